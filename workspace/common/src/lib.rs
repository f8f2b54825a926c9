//! Common transport-layer types shared between the frontend and the CLI.
//! These structs mirror the prediction service's request/response payloads
//! so both front ends deserialize API responses without duplicating shapes.

mod client;
mod error;
mod insights;
mod options;
mod prediction;
mod state;

pub use client::{PredictionClient, RawResponse, Transport, endpoints};
pub use error::{ClientError, ValidationError};
pub use insights::{Insights, ModelPerformance, MonthlyDelay, RankedDelay};
pub use options::{FALLBACK_AIRPORTS, FALLBACK_CARRIERS, MonthOption, month_options};
pub use prediction::{
    DelayCategory, PredictionForm, PredictionRequest, PredictionResult, Tone,
};
pub use state::FetchState;

use serde::{Deserialize, Serialize};

/// Default location of the hosted prediction service.
pub const DEFAULT_API_BASE_URL: &str = "https://airplane-delay-model-2.onrender.com";

/// Response envelope of `POST /api/predict`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<PredictionResult>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response envelope of `GET /api/insights`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsightsResponse {
    pub success: bool,
    #[serde(default)]
    pub insights: Option<Insights>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response envelope of `GET /api/carriers`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarriersResponse {
    pub success: bool,
    #[serde(default)]
    pub carriers: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response envelope of `GET /api/airports`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AirportsResponse {
    pub success: bool,
    #[serde(default)]
    pub airports: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// The `{ success, <payload>?, error? }` shape every endpoint answers with.
pub trait Envelope {
    type Payload;

    fn success(&self) -> bool;
    fn into_payload(self) -> Option<Self::Payload>;
    fn error_message(&self) -> Option<&str>;

    /// Collapses the envelope into the payload or the service's error.
    fn into_result(self) -> Result<Self::Payload, ClientError>
    where
        Self: Sized,
    {
        if self.success() {
            self.into_payload()
                .ok_or_else(|| ClientError::Malformed("response is missing its payload".to_string()))
        } else {
            let message = self
                .error_message()
                .unwrap_or("The prediction service rejected the request")
                .to_string();
            Err(ClientError::Remote(message))
        }
    }
}

impl Envelope for PredictResponse {
    type Payload = PredictionResult;

    fn success(&self) -> bool {
        self.success
    }

    fn into_payload(self) -> Option<PredictionResult> {
        self.prediction
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Envelope for InsightsResponse {
    type Payload = Insights;

    fn success(&self) -> bool {
        self.success
    }

    fn into_payload(self) -> Option<Insights> {
        self.insights
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Envelope for CarriersResponse {
    type Payload = Vec<String>;

    fn success(&self) -> bool {
        self.success
    }

    fn into_payload(self) -> Option<Vec<String>> {
        self.carriers
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl Envelope for AirportsResponse {
    type Payload = Vec<String>;

    fn success(&self) -> bool {
        self.success
    }

    fn into_payload(self) -> Option<Vec<String>> {
        self.airports
    }

    fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_failure_passes_message_through() {
        let envelope: PredictResponse =
            serde_json::from_str(r#"{"success": false, "error": "Unknown carrier: ZZ"}"#).unwrap();

        let err = envelope.into_result().unwrap_err();
        assert_eq!(err, ClientError::Remote("Unknown carrier: ZZ".to_string()));
    }

    #[test]
    fn test_envelope_success_without_payload_is_malformed() {
        let envelope: InsightsResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();

        assert!(matches!(envelope.into_result(), Err(ClientError::Malformed(_))));
    }

    #[test]
    fn test_carriers_envelope() {
        let envelope: CarriersResponse =
            serde_json::from_str(r#"{"success": true, "carriers": ["AA", "DL"]}"#).unwrap();

        assert_eq!(envelope.into_result().unwrap(), vec!["AA", "DL"]);
    }
}
