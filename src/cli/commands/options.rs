use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use crate::render::options_listing;
use crate::transport::build_client;

/// Prints the selectable values. Unreachable services fall back to the
/// built-in lists, so this never fails on the network.
pub async fn options(settings: &Settings) -> Result<()> {
    let client = build_client(settings)?;
    info!("Fetching carriers and airports from {}", settings.api_base_url());

    let carriers = client.carriers().await;
    let airports = client.airports().await;
    print!("{}", options_listing(&carriers, &airports));
    Ok(())
}
