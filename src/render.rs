//! Plain-text renditions of the prediction result, insights dashboard and
//! option lists for the terminal.

use common::{Insights, PredictionResult, RankedDelay, Tone};
use std::io::IsTerminal;

const RANKED_ENTRIES: usize = 5;

/// Whether badges get ANSI colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Ansi,
    Plain,
}

impl ColorMode {
    /// Colours only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        if std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal() {
            ColorMode::Ansi
        } else {
            ColorMode::Plain
        }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        match self {
            ColorMode::Ansi => format!("\x1b[1;{}m{}\x1b[0m", tone.ansi_code(), text),
            ColorMode::Plain => text.to_string(),
        }
    }
}

pub fn prediction_card(result: &PredictionResult, color: ColorMode) -> String {
    let category = &result.delay_category;

    format!(
        "Prediction Results\n  \
         Overall Assessment:        {}\n  \
         Total Delay Minutes:       {} min\n  \
         Average Delay per Flight:  {} min\n",
        color.paint(category.tone(), category.label()),
        result.total_minutes_rounded(),
        result.average_minutes_rounded(),
    )
}

fn ranked_rows(entries: &[RankedDelay]) -> String {
    entries
        .iter()
        .map(|entry| format!("  {}. {:<4} {:>10}\n", entry.rank, entry.code, entry.delay_label()))
        .collect()
}

pub fn insights_report(insights: &Insights) -> String {
    let performance = &insights.model_performance;

    let mut out = format!(
        "Aviation Insights\n  \
         Best Model:           {} (active)\n  \
         R² Score:             {}\n  \
         Mean Absolute Error:  {}\n",
        insights.best_model,
        performance.r2_percent(),
        performance.mae_minutes(),
    );

    out.push_str("\nTop Performing Carriers (lowest average delay)\n");
    out.push_str(&ranked_rows(&insights.top_carriers(RANKED_ENTRIES)));

    out.push_str("\nBusiest Airports (highest average delay)\n");
    out.push_str(&ranked_rows(&insights.busiest_airports(RANKED_ENTRIES)));

    out.push_str("\nMonthly Delay Patterns\n");
    for entry in insights.monthly_series() {
        out.push_str(&format!("  {}  {:>7}\n", entry.label, entry.delay_label()));
    }
    out
}

pub fn options_listing(carriers: &[String], airports: &[String]) -> String {
    format!(
        "Carriers: {}\nAirports: {}\nMonths:   1-12\n",
        carriers.join(" "),
        airports.join(" "),
    )
}
