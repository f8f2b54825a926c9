use ::common::Insights;
use crate::api_client;

pub async fn get_insights() -> Result<Insights, String> {
    log::trace!("Fetching model insights");
    let result = api_client::client().insights().await;

    match &result {
        Ok(insights) => log::info!("Fetched insights for model {}", insights.best_model),
        Err(e) => log::error!("Failed to fetch insights: {}", e),
    }

    result.map_err(|e| e.user_message())
}
