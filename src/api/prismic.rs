use log::info;
use urlencoding::encode;

use crate::{
    config::Config,
    post::IdKind,
    prismic::{ApiInfo, RawContentItem, SearchResponse},
};

use super::{FetchError, HttpClient};

/// Custom type of the blog documents.
const DOCUMENT_TYPE: &str = "post";

#[derive(Debug, Clone)]
pub struct ContentClient {
    inner: HttpClient,
    endpoint: String,
    access_token: Option<String>,
    master_ref: Option<String>,
}

impl ContentClient {
    pub fn new(config: &Config) -> Self {
        Self {
            inner: HttpClient::new(config),
            endpoint: config.endpoint().to_string(),
            access_token: config.access_token().map(str::to_string),
            master_ref: None,
        }
    }

    /// Resolve the master ref once, every search is pinned to it.
    pub async fn connect(mut self) -> Result<Self, FetchError> {
        let master_ref = self.master_ref().await?;
        info!("Using ref {}", master_ref);
        self.master_ref = Some(master_ref);
        Ok(self)
    }

    pub async fn master_ref(&self) -> Result<String, FetchError> {
        let url = self.with_token(self.endpoint.clone());
        let info: ApiInfo = self.inner.get_json(&url).await?;
        info.master_ref()
            .map(str::to_string)
            .ok_or(FetchError::NoMasterRef)
    }

    /// First listing page, or the page behind `cursor` when one is given.
    pub async fn list_content(
        &self,
        page_size: u32,
        cursor: Option<&str>,
    ) -> Result<SearchResponse, FetchError> {
        if let Some(cursor) = cursor {
            return self.fetch_page(cursor).await;
        }

        let query = format!("[[at(document.type,\"{}\")]]", DOCUMENT_TYPE);
        let url = format!("{}&pageSize={}", self.search_url(&query).await?, page_size);
        self.inner.get_json(&url).await
    }

    /// `None` when no post has this uid.
    pub async fn get_content_by_uid(&self, uid: &str) -> Result<Option<RawContentItem>, FetchError> {
        let query = format!("[[at(my.{}.uid,\"{}\")]]", DOCUMENT_TYPE, uid);
        self.find_one(&query).await
    }

    /// Lookup for posts published without a uid.
    pub async fn get_content_by_document_id(
        &self,
        id: &str,
    ) -> Result<Option<RawContentItem>, FetchError> {
        let query = format!("[[at(document.id,\"{}\")]]", id);
        self.find_one(&query).await
    }

    /// Find a post by an identifier taken from a summary.
    pub async fn get_content(
        &self,
        id: &str,
        kind: IdKind,
    ) -> Result<Option<RawContentItem>, FetchError> {
        match kind {
            IdKind::Uid => self.get_content_by_uid(id).await,
            IdKind::Document => self.get_content_by_document_id(id).await,
        }
    }

    async fn find_one(&self, query: &str) -> Result<Option<RawContentItem>, FetchError> {
        let url = self.search_url(query).await?;
        let response: SearchResponse = self.inner.get_json(&url).await?;
        Ok(response.results.into_iter().next())
    }

    /// Plain GET of a cursor returned by a previous page, never retried.
    pub async fn fetch_page(&self, cursor: &str) -> Result<SearchResponse, FetchError> {
        self.inner.get_json_once(cursor).await
    }

    async fn search_url(&self, query: &str) -> Result<String, FetchError> {
        let reference = match &self.master_ref {
            Some(reference) => reference.clone(),
            None => self.master_ref().await?,
        };
        let url = format!(
            "{}/documents/search?ref={}&q={}",
            self.endpoint,
            encode(&reference),
            encode(query)
        );
        Ok(self.with_token(url))
    }

    fn with_token(&self, url: String) -> String {
        match &self.access_token {
            Some(token) => {
                let separator = if url.contains('?') { '&' } else { '?' };
                format!("{}{}access_token={}", url, separator, encode(token))
            }
            None => url,
        }
    }
}
