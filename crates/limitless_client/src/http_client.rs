//! HTTP client implementation for the Limitless lifelogs API.
//!
//! This module provides a reqwest-based implementation of the
//! [`LifelogsClient`](crate::LifelogsClient) trait.

use crate::config::DEFAULT_ENDPOINT;
use crate::utils::{bool_param, local_timezone};
use crate::{Lifelog, LifelogPage, LifelogQuery, LifelogsClient, LimitlessError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};

/// Client for the Limitless lifelogs API using reqwest.
#[derive(Clone, Debug)]
pub struct ReqwestLifelogsClient {
    base_url: String,
    endpoint: String,
    api_key: SecretString,
    client: reqwest::Client,
}

impl ReqwestLifelogsClient {
    /// Create a new client instance.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the Limitless API (e.g., "https://api.limitless.ai")
    /// * `api_key` - The API key sent as the `X-API-Key` header
    pub fn new(base_url: &str, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .build()
            .expect("reqwest client build should not fail");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key,
            client,
        }
    }

    /// Override the listing endpoint path (relative to the base URL).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_start_matches('/').to_string();
        self
    }

    /// Build an authenticated GET request.
    fn get_request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header("X-API-Key", self.api_key.expose_secret())
    }

    /// Extract error information from a failed response.
    async fn error_from_response(&self, resp: reqwest::Response) -> LimitlessError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let body_snippet: String = body.chars().take(256).collect();
        tracing::debug!(status, body = %body_snippet, "lifelogs request failed");

        match status {
            401 | 403 => LimitlessError::Auth {
                status,
                body: body_snippet,
            },
            404 => LimitlessError::NotFound(body_snippet),
            _ => LimitlessError::ApiStatus {
                status,
                body: body_snippet,
            },
        }
    }
}

#[async_trait]
impl LifelogsClient for ReqwestLifelogsClient {
    async fn get_lifelogs(&self, query: &LifelogQuery) -> Result<Vec<Lifelog>, LimitlessError> {
        let url = format!("{}/{}", self.base_url, self.endpoint);
        let page_size = query.effective_batch_size();
        let timezone = match &query.timezone {
            Some(tz) => tz.clone(),
            None => local_timezone(),
        };

        let mut accumulated: Vec<Lifelog> = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let mut pairs: Vec<(&str, String)> = vec![
                ("limit", page_size.to_string()),
                ("includeMarkdown", bool_param(query.include_markdown).into()),
                // The headings flag ships inverted; existing API consumers
                // depend on this exact encoding.
                ("includeHeadings", bool_param(!query.include_headings).into()),
                ("direction", query.direction.as_str().into()),
                ("timezone", timezone.clone()),
            ];
            if let Some(date) = &query.date {
                pairs.push(("date", date.clone()));
            }
            if let Some(c) = &cursor {
                pairs.push(("cursor", c.clone()));
            }

            tracing::debug!(url = %url, params = ?pairs, "requesting lifelogs page");

            let resp = self.get_request(&url).query(&pairs).send().await?;
            let status = resp.status();
            tracing::debug!(status = status.as_u16(), "lifelogs page response");
            if !status.is_success() {
                return Err(self.error_from_response(resp).await);
            }

            let body = resp.text().await?;
            let page = LifelogPage::from_body(&body);
            let received = page.lifelogs.len();
            tracing::trace!(
                records = received,
                next_cursor = ?page.next_cursor,
                "decoded lifelogs page"
            );

            accumulated.extend(page.lifelogs);

            if let Some(limit) = query.limit {
                if accumulated.len() >= limit as usize {
                    accumulated.truncate(limit as usize);
                    return Ok(accumulated);
                }
            }

            // A page shorter than what we asked for means the listing is
            // exhausted even if the server still handed back a cursor.
            match page.next_cursor {
                Some(next) if received >= page_size as usize => cursor = Some(next),
                _ => return Ok(accumulated),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReqwestLifelogsClient;
    use secrecy::SecretString;

    #[tokio::test]
    async fn client_new_and_basic() {
        let client = ReqwestLifelogsClient::new("http://localhost", SecretString::new("key".into()));
        let _ = client;
    }

    #[test]
    fn with_endpoint_strips_leading_slash() {
        let client = ReqwestLifelogsClient::new("http://localhost/", SecretString::new("key".into()))
            .with_endpoint("/v1/other");
        assert_eq!(client.endpoint, "v1/other");
        assert_eq!(client.base_url, "http://localhost");
    }
}
