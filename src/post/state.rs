use crate::prismic::RawContentItem;

use super::{project_detail, MalformedContentError, PostDetail};

/// Where a post page stands while its path is resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DetailState {
    /// Not generated yet, served until the content arrives.
    #[default]
    Loading,
    Ready(PostDetail),
    NotFound,
}

impl DetailState {
    /// Settle the state from a lookup by identifier.
    pub fn resolve(found: Option<&RawContentItem>) -> Result<Self, MalformedContentError> {
        match found {
            Some(raw) => Ok(Self::Ready(project_detail(raw)?)),
            None => Ok(Self::NotFound),
        }
    }
}
