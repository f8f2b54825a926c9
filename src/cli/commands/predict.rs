use anyhow::{Result, bail};
use common::PredictionForm;
use tracing::{debug, error, info};

use crate::config::Settings;
use crate::render::{ColorMode, prediction_card};
use crate::transport::build_client;

pub async fn predict(settings: &Settings, form: &PredictionForm) -> Result<()> {
    // Rejected input never reaches the network
    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => {
            debug!("Prediction input rejected: {}", e);
            bail!("{}", e);
        }
    };

    let client = build_client(settings)?;
    info!(
        "Requesting prediction for {} at {} (month {})",
        request.carrier, request.airport, request.month
    );

    match client.predict_request(&request).await {
        Ok(result) => {
            print!("{}", prediction_card(&result, ColorMode::detect()));
            Ok(())
        }
        Err(e) => {
            error!("Prediction failed: {}", e);
            bail!("{}", e.user_message());
        }
    }
}
