pub mod insights;
pub mod prediction;

use ::common::{ClientError, PredictionClient, RawResponse, Transport};
use gloo_net::http::Request;
use crate::settings;

/// Browser `fetch` underneath the shared prediction client.
#[derive(Debug, Clone)]
pub struct GlooTransport;

impl Transport for GlooTransport {
    async fn get(&self, path: &str) -> Result<RawResponse, ClientError> {
        let url = settings::get_settings().api_url(path);
        log::debug!("GET request to: {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| {
                let error_msg = e.to_string();
                log::error!("GET {} - Request failed: {}", path, error_msg);
                ClientError::Transport(error_msg)
            })?;

        read_body(path, response).await
    }

    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, ClientError> {
        let url = settings::get_settings().api_url(path);
        log::debug!("POST request to: {}", url);

        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| {
                let error_msg = format!("Failed to build request: {}", e);
                log::error!("POST {} - {}", path, error_msg);
                ClientError::Transport(error_msg)
            })?
            .send()
            .await
            .map_err(|e| {
                let error_msg = e.to_string();
                log::error!("POST {} - Request failed: {}", path, error_msg);
                ClientError::Transport(error_msg)
            })?;

        read_body(path, response).await
    }
}

async fn read_body(path: &str, response: gloo_net::http::Response) -> Result<RawResponse, ClientError> {
    let status = response.status();
    log::trace!("{} - Response received ({}), reading body", path, status);

    let body = response.text().await.map_err(|e| {
        let error_msg = format!("Failed to read response body: {}", e);
        log::error!("{} - {}", path, error_msg);
        ClientError::Transport(error_msg)
    })?;

    Ok(RawResponse::new(status, body))
}

/// Shared client bound to the configured service.
pub fn client() -> PredictionClient<GlooTransport> {
    PredictionClient::new(GlooTransport)
}
