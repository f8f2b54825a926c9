use anyhow::{Result, bail};
use tracing::{error, info};

use crate::config::Settings;
use crate::render::insights_report;
use crate::transport::build_client;

pub async fn insights(settings: &Settings) -> Result<()> {
    let client = build_client(settings)?;
    info!("Fetching insights from {}", settings.api_base_url());

    match client.insights().await {
        Ok(insights) => {
            print!("{}", insights_report(&insights));
            Ok(())
        }
        Err(e) => {
            error!("Failed to load insights: {}", e);
            bail!("{}", e.user_message());
        }
    }
}
