//! Label formatting for the temperature bar chart.

use chrono::NaiveDate;

use crate::TemperatureSeries;

pub const SERIES_LABEL: &str = "Daily mean temperature (°C)";
pub const DEGREE_SUFFIX: &str = "°C";

/// Chart-ready copy of a series: raw labels plus their display text.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub tick_text: Vec<String>,
    pub values: Vec<f64>,
    pub hover_text: Vec<String>,
}

impl ChartData {
    pub fn empty() -> Self {
        Self::default()
    }
}

impl From<&TemperatureSeries> for ChartData {
    fn from(series: &TemperatureSeries) -> Self {
        Self {
            labels: series.dates.clone(),
            tick_text: series.dates.iter().map(|date| tick_label(date)).collect(),
            values: series.temperatures.clone(),
            hover_text: series
                .temperatures
                .iter()
                .map(|value| tooltip_label(SERIES_LABEL, *value))
                .collect(),
        }
    }
}

/// Renders an ISO date (optionally followed by a time) as `dd/mm`.
/// Anything unparseable is returned unchanged.
pub fn tick_label(date: &str) -> String {
    date.get(..10)
        .and_then(|day| NaiveDate::parse_from_str(day, "%Y-%m-%d").ok())
        .map(|day| day.format("%d/%m").to_string())
        .unwrap_or_else(|| date.to_string())
}

pub fn tooltip_label(series_label: &str, value: f64) -> String {
    format!("{}: {}{}", series_label, value, DEGREE_SUFFIX)
}
