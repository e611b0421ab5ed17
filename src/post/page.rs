use log::debug;

use crate::{api::ContentClient, error::BlogError, prismic::RawContentItem};

use super::{project_summary, MalformedContentError, PostSummary};

/// The listing as loaded so far.
///
/// Pages only grow by replacement: [`merge_page`] returns a new value with
/// the fetched items appended, the previous one is never touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPage {
    pub items: Vec<PostSummary>,
    pub next_page_cursor: Option<String>,
}

impl PostPage {
    pub fn has_more(&self) -> bool {
        self.next_page_cursor.is_some()
    }
}

/// Append the projected `fetched` items after `current` and take the fetched cursor.
///
/// Identifiers are not de-duplicated. A `None` cursor means there is nothing
/// left to load.
pub fn merge_page(
    current: &PostPage,
    fetched: &[RawContentItem],
    next_cursor: Option<String>,
) -> Result<PostPage, MalformedContentError> {
    let fetched = fetched
        .iter()
        .map(project_summary)
        .collect::<Result<Vec<_>, _>>()?;

    let mut items = Vec::with_capacity(current.items.len() + fetched.len());
    items.extend_from_slice(&current.items);
    items.extend(fetched);

    Ok(PostPage {
        items,
        next_page_cursor: next_cursor,
    })
}

/// Fetch the page behind `current`'s cursor and merge it.
///
/// Any failure leaves `current` as it was, the caller decides whether to keep
/// it. Without a cursor there is nothing to fetch and the page comes back as is.
pub async fn load_more(client: &ContentClient, current: &PostPage) -> Result<PostPage, BlogError> {
    let Some(cursor) = current.next_page_cursor.as_deref() else {
        return Ok(current.clone());
    };

    let response = client.fetch_page(cursor).await?;
    debug!(
        "Loaded page {}/{} ({} posts)",
        response.page,
        response.total_pages,
        response.results.len()
    );

    Ok(merge_page(current, &response.results, response.next_page)?)
}
