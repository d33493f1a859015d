use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SolarDialError};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub timeline: TimelineConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimelineConfig {
    #[serde(default = "default_max_historical_hours")]
    pub max_historical_hours: usize,
    #[serde(default = "default_forecast_hours")]
    pub forecast_hours: usize,
    #[serde(default = "default_early_morning_cutoff_hours")]
    pub early_morning_cutoff_hours: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_peak_uv")]
    pub peak_uv: f64,
    #[serde(default = "default_decay_per_hour")]
    pub decay_per_hour: f64,
    #[serde(default = "default_daylight_start_hour")]
    pub daylight_start_hour: u32,
    #[serde(default = "default_daylight_end_hour")]
    pub daylight_end_hour: u32,
    #[serde(default = "default_solar_noon_hour")]
    pub solar_noon_hour: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Days scanned past the search start. Zero disables the search.
    #[serde(default = "default_search_window_days")]
    pub search_window_days: u32,
}

fn default_max_historical_hours() -> usize {
    12
}

fn default_forecast_hours() -> usize {
    48
}

fn default_early_morning_cutoff_hours() -> u32 {
    6
}

fn default_peak_uv() -> f64 {
    8.0
}

fn default_decay_per_hour() -> f64 {
    1.2
}

fn default_daylight_start_hour() -> u32 {
    6
}

fn default_daylight_end_hour() -> u32 {
    18
}

fn default_solar_noon_hour() -> u32 {
    12
}

fn default_search_window_days() -> u32 {
    185
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            max_historical_hours: default_max_historical_hours(),
            forecast_hours: default_forecast_hours(),
            early_morning_cutoff_hours: default_early_morning_cutoff_hours(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            peak_uv: default_peak_uv(),
            decay_per_hour: default_decay_per_hour(),
            daylight_start_hour: default_daylight_start_hour(),
            daylight_end_hour: default_daylight_end_hour(),
            solar_noon_hour: default_solar_noon_hour(),
        }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            search_window_days: default_search_window_days(),
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.timeline;
        if t.early_morning_cutoff_hours > 24 {
            return Err(SolarDialError::InvalidConfig(format!(
                "early_morning_cutoff_hours must be <= 24, got {}",
                t.early_morning_cutoff_hours
            )));
        }

        let f = &self.fallback;
        if !f.peak_uv.is_finite() || f.peak_uv < 0.0 {
            return Err(SolarDialError::InvalidConfig(format!(
                "peak_uv must be a non-negative number, got {}",
                f.peak_uv
            )));
        }
        if !f.decay_per_hour.is_finite() || f.decay_per_hour < 0.0 {
            return Err(SolarDialError::InvalidConfig(format!(
                "decay_per_hour must be a non-negative number, got {}",
                f.decay_per_hour
            )));
        }
        if f.daylight_start_hour > f.daylight_end_hour || f.daylight_end_hour > 23 {
            return Err(SolarDialError::InvalidConfig(format!(
                "daylight hours must satisfy start <= end <= 23, got {}..={}",
                f.daylight_start_hour, f.daylight_end_hour
            )));
        }
        if f.solar_noon_hour > 23 {
            return Err(SolarDialError::InvalidConfig(format!(
                "solar_noon_hour must be <= 23, got {}",
                f.solar_noon_hour
            )));
        }
        Ok(())
    }
}
