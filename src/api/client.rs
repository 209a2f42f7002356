use reqwest::{Client, ClientBuilder, RequestBuilder};
use tracing::{debug, warn};

use crate::api::models::VotePayload;
use crate::api::response::{normalize, ApiResult, RawResponse, DEFAULT_MESSAGE};
use crate::config::Config;
use crate::error::Result;

/// Thin client over the fixed set of news API endpoints.
///
/// Cloning is cheap; clones share one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    api_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url(),
        })
    }

    pub async fn fetch_by_id(&self, id: &str) -> ApiResult {
        let url = format!("{}/id/{}", self.api_url, urlencoding::encode(id));
        self.send(self.http.get(url)).await
    }

    pub async fn fetch_latest(&self, offset: usize, count: usize) -> ApiResult {
        let url = format!("{}/latest/{}/{}", self.api_url, offset, count);
        self.send(self.http.get(url)).await
    }

    pub async fn search(&self, term: &str) -> ApiResult {
        let url = format!("{}/search/{}", self.api_url, urlencoding::encode(term));
        self.send(self.http.get(url)).await
    }

    pub async fn fetch_trending(&self, hours: u32, words: u32) -> ApiResult {
        let url = format!("{}/info/word-cloud", self.api_url);
        let request = self
            .http
            .get(url)
            .query(&[("num_hours", hours), ("num_words", words)]);
        self.send(request).await
    }

    pub async fn post_vote(&self, payload: &VotePayload) -> ApiResult {
        let url = format!("{}/vote", self.api_url);
        self.send(self.http.post(url).json(payload)).await
    }

    // Transport errors never escape; they come back as a failed ApiResult.
    async fn send(&self, request: RequestBuilder) -> ApiResult {
        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("News API request failed: {}", e);
                return ApiResult::transport_failure(e);
            }
        };

        let status = response.status().as_u16();
        debug!("{} -> HTTP {}", response.url(), status);

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read news API response body: {}", e);
                return ApiResult::transport_failure(e);
            }
        };

        let result = normalize(RawResponse { status, body }, DEFAULT_MESSAGE);
        debug!("Normalized status {}: {}", result.status_code, result.message);
        result
    }
}
