use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

use super::{Reading, ReadingDraft};
use crate::pagination::PagedResult;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Remote operations the feed depends on.
pub trait ReadingsApi {
    fn fetch_page(
        &self,
        page: u64,
        page_size: u64,
    ) -> impl Future<Output = Result<PagedResult<Reading>, ClientError>> + Send;

    fn create(
        &self,
        draft: &ReadingDraft,
    ) -> impl Future<Output = Result<Reading, ClientError>> + Send;
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// `ReadingsApi` over HTTP. `base_url` is the versioned API root, e.g.
/// `http://localhost:5127/api/v1`.
#[derive(Debug, Clone)]
pub struct HttpReadingsApi {
    http_client: Client,
    base_url: String,
}

impl HttpReadingsApi {
    /// # Errors
    ///
    /// Returns `ClientError::Request` if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http_client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn readings_url(&self) -> String {
        format!("{}/readings", self.base_url)
    }

    async fn decode<T>(response: reqwest::Response) -> Result<T, ClientError>
    where
        T: serde::de::DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .map(|b| b.error)
                .unwrap_or(text);
            return Err(ClientError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

impl ReadingsApi for HttpReadingsApi {
    async fn fetch_page(
        &self,
        page: u64,
        page_size: u64,
    ) -> Result<PagedResult<Reading>, ClientError> {
        let response = self
            .http_client
            .get(self.readings_url())
            .query(&[("page", page), ("pageSize", page_size)])
            .send()
            .await?;

        Self::decode(response).await
    }

    async fn create(&self, draft: &ReadingDraft) -> Result<Reading, ClientError> {
        let response = self
            .http_client
            .post(self.readings_url())
            .json(draft)
            .send()
            .await?;

        Self::decode(response).await
    }
}
