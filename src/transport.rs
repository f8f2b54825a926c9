use anyhow::Result;
use common::{ClientError, PredictionClient, RawResponse, Transport};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::{debug, error, trace};

use crate::config::Settings;

/// reqwest underneath the shared prediction client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    base_url: String,
    http_client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("delaycast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Transport for ReqwestTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, ClientError> {
        let url = self.url(path);
        debug!("GET request to: {}", url);

        let response = self.http_client.get(&url).send().await.map_err(|e| {
            error!("GET {} - Request failed: {}", path, e);
            ClientError::Transport(e.to_string())
        })?;

        read_body(path, response).await
    }

    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, ClientError> {
        let url = self.url(path);
        debug!("POST request to: {}", url);

        let response = self
            .http_client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!("POST {} - Request failed: {}", path, e);
                ClientError::Transport(e.to_string())
            })?;

        read_body(path, response).await
    }
}

async fn read_body(path: &str, response: reqwest::Response) -> Result<RawResponse, ClientError> {
    let status = response.status().as_u16();
    trace!("{} - Response received ({}), reading body", path, status);

    let body = response.text().await.map_err(|e| {
        error!("{} - Failed to read response body: {}", path, e);
        ClientError::Transport(e.to_string())
    })?;

    Ok(RawResponse::new(status, body))
}

/// Prediction client configured from `settings`
pub fn build_client(settings: &Settings) -> Result<PredictionClient<ReqwestTransport>> {
    let transport = ReqwestTransport::new(settings.api_base_url(), settings.request_timeout())?;
    Ok(PredictionClient::new(transport))
}
