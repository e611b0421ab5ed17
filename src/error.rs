use thiserror::Error;

use crate::{api::FetchError, post::MalformedContentError};

#[derive(Error, Debug)]
pub enum BlogError {
    #[error("fetch failed: {0}")]
    FetchFailed(#[from] FetchError),
    #[error("malformed content: {0}")]
    MalformedContent(#[from] MalformedContentError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
