use crate::domain::model::{ApiResponse, ObjectRef, SearchTerm};
use crate::domain::ports::MuseumApi;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://collectionapi.metmuseum.org/public/collection/v1";

/// HTTP client for the Met collection API.
#[derive(Debug, Clone)]
pub struct MetMuseumClient {
    base_url: String,
    client: Client,
}

impl MetMuseumClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = match timeout {
            Some(timeout) => Client::builder().timeout(timeout).build()?,
            None => Client::new(),
        };
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    // The term is interpolated verbatim; the URL parser percent-encodes
    // spaces and the like, while `&` and `#` keep their URL meaning.
    pub fn search_url(&self, term: &SearchTerm) -> Result<Url> {
        Ok(Url::parse(&format!("{}/search?q={}", self.base_url, term))?)
    }

    pub fn object_url(&self, object: ObjectRef) -> Result<Url> {
        Ok(Url::parse(&format!("{}/objects/{}", self.base_url, object))?)
    }

    async fn get_json(&self, url: Url) -> Result<ApiResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let bytes = response.bytes().await?;
        let body: serde_json::Value = serde_json::from_slice(&bytes)?;

        Ok(ApiResponse {
            url: url.to_string(),
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl MuseumApi for MetMuseumClient {
    async fn search(&self, term: &SearchTerm) -> Result<ApiResponse> {
        let url = self.search_url(term)?;
        self.get_json(url).await
    }

    async fn object(&self, object: ObjectRef) -> Result<ApiResponse> {
        let url = self.object_url(object)?;
        self.get_json(url).await
    }
}
