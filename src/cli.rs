use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use crate::config::Settings;
use commands::{insights, options, predict, serve};

#[derive(Parser)]
#[command(name = "delaycast")]
#[command(about = "Flight delay predictions and aviation insights from the command line")]
#[command(version)]
pub struct Cli {
    /// Base URL of the prediction service
    ///
    /// Overrides DELAYCAST_API_BASE_URL and the built-in default.
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Host the built web frontend
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the trunk build of the frontend
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
    },
    /// Predict delays for one flight scenario
    ///
    /// Examples:
    ///   delaycast predict --carrier AA --airport ATL --month 7 --arr-flights 150
    ///   delaycast predict --carrier DL --airport JFK --month 1 --arr-flights 80 --weather-severity 4
    Predict {
        /// Carrier code (e.g., AA)
        #[arg(long)]
        carrier: Option<String>,

        /// Airport code (e.g., ATL)
        #[arg(long)]
        airport: Option<String>,

        /// Month of travel, 1-12
        #[arg(long)]
        month: Option<String>,

        /// Number of arriving flights
        #[arg(long)]
        arr_flights: Option<String>,

        /// Weather severity, 1-5
        #[arg(long, default_value_t = 1)]
        weather_severity: u8,

        /// NAS severity, 1-5
        #[arg(long, default_value_t = 1)]
        nas_severity: u8,

        /// Equipment issues, 1-5
        #[arg(long, default_value_t = 1)]
        equipment_issues: u8,
    },
    /// Show model performance and historical delay rankings
    Insights,
    /// List the carriers, airports and months the service accepts
    Options,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut settings = Settings::load()?;
        if let Some(api_base_url) = self.api_base_url {
            settings.api_base_url = api_base_url;
        }

        match self.command {
            Commands::Serve { bind_address, static_dir } => {
                if let Some(bind_address) = bind_address {
                    settings.bind_address = bind_address;
                }
                if let Some(static_dir) = static_dir {
                    settings.static_dir = static_dir;
                }
                serve(&settings).await?;
            }
            Commands::Predict {
                carrier,
                airport,
                month,
                arr_flights,
                weather_severity,
                nas_severity,
                equipment_issues,
            } => {
                let form = common::PredictionForm {
                    carrier: carrier.unwrap_or_default(),
                    airport: airport.unwrap_or_default(),
                    month: month.unwrap_or_default(),
                    arr_flights: arr_flights.unwrap_or_default(),
                    weather_severity,
                    nas_severity,
                    equipment_issues,
                };
                predict(&settings, &form).await?;
            }
            Commands::Insights => {
                insights(&settings).await?;
            }
            Commands::Options => {
                options(&settings).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_arguments() {
        let cli = Cli::try_parse_from([
            "delaycast",
            "predict",
            "--carrier",
            "AA",
            "--airport",
            "ATL",
            "--month",
            "7",
            "--arr-flights",
            "150",
            "--nas-severity",
            "3",
        ])
        .unwrap();

        match cli.command {
            Commands::Predict { carrier, month, weather_severity, nas_severity, .. } => {
                assert_eq!(carrier.as_deref(), Some("AA"));
                assert_eq!(month.as_deref(), Some("7"));
                assert_eq!(weather_severity, 1);
                assert_eq!(nas_severity, 3);
            }
            _ => panic!("expected predict"),
        }
    }

    #[test]
    fn test_global_base_url() {
        let cli = Cli::try_parse_from(["delaycast", "insights", "--api-base-url", "http://localhost:5000"])
            .unwrap();
        assert_eq!(cli.api_base_url.as_deref(), Some("http://localhost:5000"));
        assert!(matches!(cli.command, Commands::Insights));
    }
}
