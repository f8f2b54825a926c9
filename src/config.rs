use anyhow::Result;
use config::{Config, Environment};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime configuration of the binary.
///
/// Built from defaults, then `DELAYCAST_*` environment variables (a `.env`
/// file is read first), then command-line flags.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Settings {
    /// Base URL of the prediction service
    pub api_base_url: String,
    /// Address the bundle host listens on
    pub bind_address: String,
    /// Directory holding the built frontend (`index.html` plus wasm assets)
    pub static_dir: PathBuf,
    /// Upper bound for one call to the prediction service
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load configuration from `.env` and the process environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::with_prefix("DELAYCAST"))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        let settings = Config::builder()
            .set_default("api_base_url", common::DEFAULT_API_BASE_URL)?
            .set_default("bind_address", "0.0.0.0:3000")?
            .set_default("static_dir", "workspace/frontend/dist")?
            .set_default("request_timeout_secs", 60)?
            .add_source(environment)
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Base URL without a trailing slash, so endpoint paths can be appended.
    pub fn api_base_url(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }
}
