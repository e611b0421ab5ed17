pub mod date;
pub mod page;
pub mod reading_time;
pub mod state;

use chrono::{DateTime, Utc};
use thiserror::Error;
use urlencoding::encode;

use crate::prismic::{RawBanner, RawContentBlock, RawContentItem};

pub use page::{load_more, merge_page, PostPage};
pub use reading_time::compute_reading_time_minutes;
pub use state::DetailState;

/// A required field was absent from a content item.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("content item `{id}` is missing `{field}`")]
pub struct MalformedContentError {
    pub id: String,
    pub field: &'static str,
}

/// Which document field a post identifier was taken from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdKind {
    #[default]
    Uid,
    /// The post has no uid, `id` is the document id.
    Document,
}

/// What the listing shows for one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostSummary {
    pub id: String,
    pub id_kind: IdKind,
    pub published_at: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// What the post page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub summary: PostSummary,
    pub banner: Banner,
    pub content: Vec<ContentSection>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentSection {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

impl PostDetail {
    pub fn reading_time_minutes(&self) -> usize {
        compute_reading_time_minutes(&self.content)
    }
}

/// File name of a post page.
///
/// The identifier is percent-encoded, so distinct identifiers never share a
/// file and `/` can not escape the post directory.
pub fn page_file_name(id: &str) -> String {
    format!("{}.html", encode(id))
}

pub fn project_summary(raw: &RawContentItem) -> Result<PostSummary, MalformedContentError> {
    let (id, id_kind) = match &raw.uid {
        Some(uid) => (uid.clone(), IdKind::Uid),
        None if !raw.id.is_empty() => (raw.id.clone(), IdKind::Document),
        None => {
            return Err(MalformedContentError {
                id: String::new(),
                field: "uid",
            })
        }
    };

    let required = |value: &Option<String>, field: &'static str| {
        value.clone().ok_or_else(|| MalformedContentError {
            id: id.clone(),
            field,
        })
    };

    let title = required(&raw.data.title, "title")?;
    let subtitle = required(&raw.data.subtitle, "subtitle")?;
    let author = required(&raw.data.author, "author")?;

    Ok(PostSummary {
        id,
        id_kind,
        published_at: raw.first_publication_date,
        title,
        subtitle,
        author,
    })
}

pub fn project_detail(raw: &RawContentItem) -> Result<PostDetail, MalformedContentError> {
    let summary = project_summary(raw)?;
    let banner = raw.data.banner.as_ref().map(Banner::from).unwrap_or_default();
    let content = raw
        .data
        .content
        .iter()
        .flatten()
        .map(ContentSection::from)
        .collect();

    Ok(PostDetail {
        summary,
        banner,
        content,
    })
}

impl TryFrom<&RawContentItem> for PostSummary {
    type Error = MalformedContentError;

    fn try_from(raw: &RawContentItem) -> Result<Self, Self::Error> {
        project_summary(raw)
    }
}

impl TryFrom<&RawContentItem> for PostDetail {
    type Error = MalformedContentError;

    fn try_from(raw: &RawContentItem) -> Result<Self, Self::Error> {
        project_detail(raw)
    }
}

impl From<&RawBanner> for Banner {
    fn from(raw: &RawBanner) -> Self {
        Self {
            url: raw.url.clone().unwrap_or_default(),
            alt: raw.alt.clone().unwrap_or_default(),
        }
    }
}

impl From<&RawContentBlock> for ContentSection {
    fn from(raw: &RawContentBlock) -> Self {
        Self {
            heading: raw.heading.clone().unwrap_or_default(),
            paragraphs: raw
                .body
                .iter()
                .map(|paragraph| paragraph.text.clone().unwrap_or_default())
                .collect(),
        }
    }
}
