//! Native HTTP client using reqwest

use std::time::Duration;

use reqwest::Client;
use url::Url;

use super::HttpResponse;
use crate::config::ApiConfig;
use crate::error::FetchError;

pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Network {
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            client,
            user_agent: user_agent.to_string(),
        })
    }

    pub fn from_config(config: &ApiConfig) -> Result<Self, FetchError> {
        Self::new(
            &config.user_agent,
            Duration::from_secs(config.timeout_secs),
        )
    }

    pub async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .header("User-Agent", &self.user_agent)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                message: e.to_string(),
            })?;

        let status = response.status().as_u16();

        if status == 429 {
            return Err(FetchError::RateLimited);
        }

        let body = response.text().await.map_err(|e| FetchError::Network {
            message: e.to_string(),
        })?;

        Ok(HttpResponse { status, body })
    }
}
