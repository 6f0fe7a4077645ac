use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::search::SearchQuery;
use crate::types::SearchResponse;

const REDACTED: &str = "[redacted]";

/// Provider-side asset search
#[async_trait]
pub trait SearchApi: Send + Sync {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, GalleryError>;
}

/// Build the Basic auth header value for the Admin API
pub fn authorization_header(api_key: &str, api_secret: &str) -> String {
    let credentials = format!("{}:{}", api_key, api_secret);
    format!("Basic {}", general_purpose::STANDARD.encode(credentials))
}

/// Cloudinary `resources/search` client
pub struct CloudinaryClient {
    http: Client,
    endpoint: String,
    authorization: String,
    secrets: Vec<String>,
}

impl CloudinaryClient {
    pub fn new(config: &GalleryConfig) -> Result<Self, GalleryError> {
        let http = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(GalleryError::ClientBuild)?;

        let authorization = authorization_header(&config.api_key, &config.api_secret);
        let token = authorization.trim_start_matches("Basic ").to_string();

        Ok(Self {
            http,
            endpoint: config.search_endpoint(),
            authorization,
            secrets: vec![config.api_secret.clone(), token, config.api_key.clone()],
        })
    }

    /// Strip credential material from text the provider sent back
    fn redact(&self, text: &str) -> String {
        self.secrets
            .iter()
            .filter(|s| !s.is_empty())
            .fold(text.to_string(), |acc, secret| acc.replace(secret.as_str(), REDACTED))
    }
}

fn transport_error(err: reqwest::Error) -> GalleryError {
    if err.is_timeout() {
        GalleryError::UpstreamTimeout
    } else {
        GalleryError::Transport(err)
    }
}

#[async_trait]
impl SearchApi for CloudinaryClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchResponse, GalleryError> {
        tracing::debug!(
            expression = %query.expression,
            has_cursor = query.next_cursor.is_some(),
            "Searching provider"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .form(query)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.map_err(transport_error)?;
            tracing::warn!("Provider rejected search with status {}", status);
            return Err(GalleryError::Provider {
                status: status.as_u16(),
                body: self.redact(&text),
            });
        }

        let bytes = response.bytes().await.map_err(transport_error)?;
        let parsed: SearchResponse = serde_json::from_slice(&bytes)?;

        tracing::info!(
            "Provider returned {} resources (more pages: {})",
            parsed.resources.len(),
            parsed.next_cursor.is_some()
        );
        Ok(parsed)
    }
}
