use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::insights::Insights;
use crate::options::{FALLBACK_AIRPORTS, FALLBACK_CARRIERS, fallback};
use crate::prediction::{PredictionForm, PredictionRequest, PredictionResult};
use crate::{AirportsResponse, CarriersResponse, Envelope, InsightsResponse, PredictResponse};

/// Paths of the prediction service, relative to its base URL.
pub mod endpoints {
    pub const PREDICT: &str = "/api/predict";
    pub const INSIGHTS: &str = "/api/insights";
    pub const CARRIERS: &str = "/api/carriers";
    pub const AIRPORTS: &str = "/api/airports";
}

/// Status and body of an HTTP exchange, before any decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The HTTP layer underneath [`PredictionClient`].
///
/// Implementations only move bytes; they report connection problems as
/// [`ClientError::Transport`] and hand every received response back untouched.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, path: &str) -> Result<RawResponse, ClientError>;

    async fn post_json(&self, path: &str, body: String) -> Result<RawResponse, ClientError>;
}

/// Maps form input and service responses onto the prediction API.
#[derive(Debug, Clone)]
pub struct PredictionClient<T> {
    transport: T,
}

impl<T: Transport> PredictionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validates the form and, only if it is complete, submits it.
    pub async fn predict(&self, form: &PredictionForm) -> Result<PredictionResult, ClientError> {
        let request = form.validate()?;
        self.predict_request(&request).await
    }

    pub async fn predict_request(
        &self,
        request: &PredictionRequest,
    ) -> Result<PredictionResult, ClientError> {
        request.check()?;

        let body = serde_json::to_string(request)
            .map_err(|e| ClientError::Transport(format!("Failed to serialize request: {}", e)))?;

        tracing::debug!(
            carrier = %request.carrier,
            airport = %request.airport,
            month = request.month,
            "Submitting prediction request"
        );
        let response = self.transport.post_json(endpoints::PREDICT, body).await?;
        let result = decode::<PredictResponse>(endpoints::PREDICT, response);

        match &result {
            Ok(prediction) => tracing::info!("Prediction received: {}", prediction.delay_category),
            Err(e) => tracing::error!("Prediction failed: {}", e),
        }
        result
    }

    pub async fn insights(&self) -> Result<Insights, ClientError> {
        let result = self.fetch::<InsightsResponse>(endpoints::INSIGHTS).await;
        if let Err(ref e) = result {
            tracing::error!("Failed to fetch insights: {}", e);
        }
        result
    }

    /// Carrier codes for the select; never empty.
    pub async fn carriers(&self) -> Vec<String> {
        self.options::<CarriersResponse>(endpoints::CARRIERS, &FALLBACK_CARRIERS)
            .await
    }

    /// Airport codes for the select; never empty.
    pub async fn airports(&self) -> Vec<String> {
        self.options::<AirportsResponse>(endpoints::AIRPORTS, &FALLBACK_AIRPORTS)
            .await
    }

    async fn options<E>(&self, path: &str, fallback_list: &[&str]) -> Vec<String>
    where
        E: Envelope<Payload = Vec<String>> + DeserializeOwned,
    {
        match self.fetch::<E>(path).await {
            Ok(list) if !list.is_empty() => {
                tracing::debug!("Loaded {} options from {}", list.len(), path);
                list
            }
            Ok(_) => {
                tracing::warn!("{} returned no options, using built-in list", path);
                fallback(fallback_list)
            }
            Err(e) => {
                tracing::warn!("{} unavailable ({}), using built-in list", path, e);
                fallback(fallback_list)
            }
        }
    }

    async fn fetch<E>(&self, path: &str) -> Result<E::Payload, ClientError>
    where
        E: Envelope + DeserializeOwned,
    {
        tracing::trace!("GET {}", path);
        let response = self.transport.get(path).await?;
        decode::<E>(path, response)
    }
}

/// Interprets a response of `path` as envelope `E`.
///
/// Non-2xx answers still carry an envelope when the service itself failed;
/// its `error` is preferred over the bare status code.
fn decode<E>(path: &str, response: RawResponse) -> Result<E::Payload, ClientError>
where
    E: Envelope + DeserializeOwned,
{
    let parsed = serde_json::from_str::<E>(&response.body);

    if !response.is_success() {
        tracing::warn!("{} - Non-OK response: {}", path, response.status);
        return Err(match parsed {
            Ok(envelope) => match envelope.error_message() {
                Some(message) => ClientError::Remote(message.to_string()),
                None => ClientError::Http(response.status),
            },
            Err(_) => ClientError::Http(response.status),
        });
    }

    parsed
        .map_err(|e| ClientError::Malformed(e.to_string()))?
        .into_result()
}
