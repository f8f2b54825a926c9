use ::common::{ClientError, PredictionRequest, PredictionResult};
use crate::api_client;

/// Submit a validated request to `/api/predict`
pub async fn predict(request: PredictionRequest) -> Result<PredictionResult, ClientError> {
    log::debug!(
        "Requesting prediction for {} at {} in month {}",
        request.carrier,
        request.airport,
        request.month
    );
    let result = api_client::client().predict_request(&request).await;
    match &result {
        Ok(prediction) => log::info!(
            "Prediction: {} ({:.1} min total)",
            prediction.delay_category,
            prediction.total_delay_minutes
        ),
        Err(e) => log::error!("Prediction failed: {}", e),
    }
    result
}

/// Carrier codes for the form; falls back to the built-in list
pub async fn get_carriers() -> Vec<String> {
    log::trace!("Fetching carrier options");
    let carriers = api_client::client().carriers().await;
    log::info!("Fetched {} carriers", carriers.len());
    carriers
}

/// Airport codes for the form; falls back to the built-in list
pub async fn get_airports() -> Vec<String> {
    log::trace!("Fetching airport options");
    let airports = api_client::client().airports().await;
    log::info!("Fetched {} airports", airports.len());
    airports
}
