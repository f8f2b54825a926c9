use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate analytics precomputed by the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub best_model: String,
    pub model_performance: ModelPerformance,
    /// Month number ("1".."12") to average delay in minutes.
    pub monthly_delays: BTreeMap<String, f64>,
    pub carrier_delays: BTreeMap<String, f64>,
    pub airport_delays: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    pub r2: f64,
    pub mae: f64,
}

impl ModelPerformance {
    /// R² as a percentage with one decimal, e.g. `87.3%`.
    pub fn r2_percent(&self) -> String {
        format!("{:.1}%", self.r2 * 100.0)
    }

    pub fn mae_minutes(&self) -> String {
        format_minutes(self.mae)
    }
}

/// One entry of a ranked carrier or airport list.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedDelay {
    pub rank: usize,
    pub code: String,
    pub delay: f64,
}

impl RankedDelay {
    pub fn delay_label(&self) -> String {
        format_minutes(self.delay)
    }
}

/// One cell of the monthly delay grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyDelay {
    pub month: u8,
    pub label: &'static str,
    pub delay: f64,
}

impl MonthlyDelay {
    pub fn delay_label(&self) -> String {
        format!("{:.1}", self.delay)
    }
}

impl Insights {
    /// Carriers with the lowest average delay, best first.
    pub fn top_carriers(&self, limit: usize) -> Vec<RankedDelay> {
        rank(&self.carrier_delays, limit, |a, b| a.total_cmp(&b))
    }

    /// Airports with the highest average delay, worst first.
    pub fn busiest_airports(&self, limit: usize) -> Vec<RankedDelay> {
        rank(&self.airport_delays, limit, |a, b| b.total_cmp(&a))
    }

    /// Monthly delays in calendar order. Keys that are not a month number are skipped.
    pub fn monthly_series(&self) -> Vec<MonthlyDelay> {
        let mut series: Vec<MonthlyDelay> = self
            .monthly_delays
            .iter()
            .filter_map(|(key, delay)| match short_month_label(key) {
                Some((month, label)) => Some(MonthlyDelay { month, label, delay: *delay }),
                None => {
                    tracing::warn!("Skipping monthly delay with unexpected key {:?}", key);
                    None
                }
            })
            .collect();
        series.sort_by_key(|entry| entry.month);
        series
    }
}

fn rank(
    delays: &BTreeMap<String, f64>,
    limit: usize,
    order: impl Fn(f64, f64) -> std::cmp::Ordering,
) -> Vec<RankedDelay> {
    let mut entries: Vec<(&String, f64)> = delays.iter().map(|(code, delay)| (code, *delay)).collect();
    // BTreeMap iteration is already sorted by code, and the sort is stable.
    entries.sort_by(|a, b| order(a.1, b.1));

    entries
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(index, (code, delay))| RankedDelay {
            rank: index + 1,
            code: code.clone(),
            delay,
        })
        .collect()
}

/// Maps `"1"` to `(1, "Jan")` and so on through `"12"`.
pub fn short_month_label(key: &str) -> Option<(u8, &'static str)> {
    let number = key.trim().parse::<u8>().ok()?;
    let month = Month::try_from(number).ok()?;
    Some((number, &month.name()[..3]))
}

fn format_minutes(minutes: f64) -> String {
    format!("{:.1} min", minutes)
}
