//! Runtime configuration
//!
//! Everything has a default; environment variables only override.

use crate::tools::charts::{MAX_CHART_DIMENSION, MIN_CHART_DIMENSION};

/// Default chart canvas, 8x4 inches at 80 dpi
pub const DEFAULT_CHART_WIDTH: u32 = 640;
pub const DEFAULT_CHART_HEIGHT: u32 = 320;

/// Environment variable overriding the default chart width
pub const CHART_WIDTH_VAR: &str = "PIZZA_CHART_WIDTH";
/// Environment variable overriding the default chart height
pub const CHART_HEIGHT_VAR: &str = "PIZZA_CHART_HEIGHT";

/// Server configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            chart_width: parse_dimension(CHART_WIDTH_VAR, lookup(CHART_WIDTH_VAR))
                .unwrap_or(defaults.chart_width),
            chart_height: parse_dimension(CHART_HEIGHT_VAR, lookup(CHART_HEIGHT_VAR))
                .unwrap_or(defaults.chart_height),
        }
    }
}

fn parse_dimension(key: &str, value: Option<String>) -> Option<u32> {
    let value = value?;
    match value.trim().parse::<u32>() {
        Ok(n) if (MIN_CHART_DIMENSION..=MAX_CHART_DIMENSION).contains(&n) => Some(n),
        _ => {
            tracing::warn!(
                key,
                value = %value,
                min = MIN_CHART_DIMENSION,
                max = MAX_CHART_DIMENSION,
                "Ignoring invalid chart dimension"
            );
            None
        }
    }
}
