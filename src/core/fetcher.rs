use crate::core::request::build_request_url;
use crate::domain::model::{MetricsResponse, TargetMetrics};
use crate::domain::ports::MetricsSource;
use crate::utils::error::{MetricsError, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// `None` leaves the deadline to the network stack.
    pub timeout: Option<Duration>,
    pub retries: u32,
    pub retry_delay: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: None,
            retries: 0,
            retry_delay: Duration::from_millis(500),
        }
    }
}

pub struct AhrefsClient {
    client: Client,
    api_base: String,
    token: String,
    options: FetchOptions,
}

impl AhrefsClient {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_options(api_base, token, FetchOptions::default())
    }

    pub fn with_options(
        api_base: impl Into<String>,
        token: impl Into<String>,
        options: FetchOptions,
    ) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into(),
            token: token.into(),
            options,
        }
    }

    fn build_request(&self, url: &Url) -> Result<reqwest::Request> {
        let mut request = self
            .client
            .get(url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/json");

        // 設定超時
        if let Some(timeout) = self.options.timeout {
            request = request.timeout(timeout);
        }

        request.build().map_err(|e| MetricsError::RequestBuildError {
            message: e.to_string(),
        })
    }

    async fn send_with_retry(&self, url: &Url) -> Result<reqwest::Response> {
        let mut attempt: u32 = 0;
        loop {
            let request = self.build_request(url)?;
            match self.client.execute(request).await.map_err(MetricsError::from) {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt < self.options.retries => {
                    attempt += 1;
                    let delay = self.options.retry_delay * attempt;
                    tracing::warn!(
                        "Request attempt {} failed: {}; retrying in {:?}",
                        attempt,
                        e,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[async_trait]
impl MetricsSource for AhrefsClient {
    async fn fetch(&self, domain: &str) -> Result<TargetMetrics> {
        let url = build_request_url(&self.api_base, domain)?;
        tracing::debug!("Making API request to: {}", url);

        // 執行請求
        let response = self.send_with_retry(&url).await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        // 先讀完整個 body，錯誤回應才能原樣回報
        let body = response.text().await.map_err(MetricsError::BodyReadError)?;

        if status != StatusCode::OK {
            return Err(MetricsError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        decode_first_target(&body, domain)
    }
}

pub fn decode_first_target(body: &str, domain: &str) -> Result<TargetMetrics> {
    let response: MetricsResponse = serde_json::from_str(body)?;
    response
        .into_first_target()
        .ok_or_else(|| MetricsError::EmptyResultError {
            domain: domain.to_string(),
        })
}
