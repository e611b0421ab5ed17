pub mod post;

pub use post::*;

use serde::{Deserialize, Serialize};

/// Response of the API root, only the refs are used.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ApiInfo {
    pub refs: Vec<Ref>,
}

impl ApiInfo {
    pub fn master_ref(&self) -> Option<&str> {
        self.refs
            .iter()
            .find(|r| r.is_master_ref)
            .map(|r| r.reference.as_str())
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Ref {
    #[serde(rename = "ref")]
    pub reference: String,
    #[serde(default)]
    pub is_master_ref: bool,
}

/// One page of `documents/search`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub results: Vec<RawContentItem>,
    pub next_page: Option<String>,
}
