pub mod prismic;

use log::{debug, log_enabled, trace};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{policies::ExponentialBackoff, RetryTransientMiddleware};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::config::Config;

pub use prismic::ContentClient;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest_middleware::Error),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL `{0}`")]
    Url(String),
    #[error("the API did not return a master ref")]
    NoMasterRef,
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    retries: u32,
}

impl HttpClient {
    fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            retries: config.retries(),
        }
    }
    fn client(&self) -> ClientWithMiddleware {
        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(self.retries);

        ClientBuilder::new(self.client.clone())
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build()
    }
    fn client_without_retry(&self) -> ClientWithMiddleware {
        ClientBuilder::new(self.client.clone()).build()
    }

    /// GET `url` and decode the JSON body, retrying transient failures.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.send_json(self.client(), url).await
    }

    /// GET `url` once, failures surface immediately.
    async fn get_json_once<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        self.send_json(self.client_without_retry(), url).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        client: ClientWithMiddleware,
        url: &str,
    ) -> Result<T, FetchError> {
        let url = reqwest::Url::parse(url).map_err(|_| FetchError::Url(url.to_string()))?;

        debug!("GET {}", url);
        let response = client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;

        if log_enabled!(log::Level::Trace) {
            if let Ok(value) = serde_json::from_str::<Value>(&body) {
                trace!("{}", serde_json::to_string_pretty(&value)?);
            }
        }

        Ok(serde_json::from_str(&body)?)
    }
}
