use std::collections::HashSet;

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime, Timelike};
use serde::Serialize;

use crate::config::{Config, FallbackConfig};
use crate::error::Result;
use crate::types::{truncate_to_hour, HourlySample, UvArcGroup};

/// Round to the nearest 0.5, ties upward.
pub fn round_to_half(uv: f64) -> f64 {
    let uv = if uv.is_finite() { uv.max(0.0) } else { 0.0 };
    (uv * 2.0 + 0.5).floor() / 2.0
}

pub fn forecast_window(now: NaiveDateTime, cutoff_hours: u32) -> (NaiveDateTime, NaiveDateTime) {
    let start = truncate_to_hour(now);
    let tomorrow = (now.date() + Duration::days(1)).and_time(NaiveTime::MIN);
    (start, tomorrow + Duration::hours(cutoff_hours as i64))
}

pub fn historical_hours(
    sunrise: NaiveDateTime,
    now: NaiveDateTime,
    max_hours: usize,
) -> Vec<NaiveDateTime> {
    let first = truncate_to_hour(sunrise);
    let last = truncate_to_hour(now);
    if last < first {
        return Vec::new();
    }
    let span = (last - first).num_hours() as usize + 1;
    let skip = span.saturating_sub(max_hours);
    (skip..span)
        .map(|h| first + Duration::hours(h as i64))
        .collect()
}

pub fn merge_timeline(
    historical: &[HourlySample],
    forecast: &[HourlySample],
    window_start: NaiveDateTime,
    window_end: NaiveDateTime,
) -> Vec<HourlySample> {
    let in_window: Vec<&HourlySample> = forecast
        .iter()
        .filter(|s| s.time >= window_start && s.time < window_end)
        .collect();
    if in_window.len() < forecast.len() {
        log::debug!(
            "dropped {} forecast samples outside window",
            forecast.len() - in_window.len()
        );
    }

    let candidates = historical.len() + in_window.len();
    let mut seen: HashSet<(u32, u32)> = HashSet::new();
    let mut merged: Vec<HourlySample> = historical
        .iter()
        .chain(in_window)
        .filter(|s| seen.insert((s.time.day(), s.time.hour())))
        .copied()
        .collect();

    let duplicates = candidates - merged.len();
    if duplicates > 0 {
        log::debug!("dropped {} duplicate hourly samples", duplicates);
    }

    merged.sort_by_key(|s| s.time);
    merged
}

fn hours_since(base: NaiveDateTime, time: NaiveDateTime) -> f64 {
    (time - base).num_minutes() as f64 / 60.0
}

pub fn group_by_intensity(timeline: &[HourlySample]) -> Vec<UvArcGroup> {
    let mut samples = timeline.to_vec();
    samples.sort_by_key(|s| s.time);

    let Some(first) = samples.first() else {
        return Vec::new();
    };
    let base = first.time.date().and_time(NaiveTime::MIN);

    let mut groups = Vec::new();
    let mut current: Option<(f64, Vec<HourlySample>)> = None;

    for sample in samples {
        let rounded = round_to_half(sample.uv_index);
        if let Some((value, members)) = current.as_mut() {
            let contiguous = members
                .last()
                .is_some_and(|last| sample.time == last.time + Duration::hours(1));
            if *value == rounded && contiguous {
                members.push(sample);
                continue;
            }
        }
        if let Some((value, members)) = current.take() {
            groups.push(close_group(base, value, members));
        }
        if rounded > 0.0 {
            current = Some((rounded, vec![sample]));
        }
    }
    if let Some((value, members)) = current {
        groups.push(close_group(base, value, members));
    }
    groups
}

fn close_group(base: NaiveDateTime, uv_index: f64, members: Vec<HourlySample>) -> UvArcGroup {
    let start_time = members[0].time;
    let end_time = members[members.len() - 1].time + Duration::hours(1);
    UvArcGroup {
        uv_index,
        start_time,
        end_time,
        start_hour: hours_since(base, start_time),
        end_hour: hours_since(base, end_time),
        member_hours: members,
    }
}

pub fn synthesize_fallback(reference_time: NaiveDateTime, config: &FallbackConfig) -> Vec<HourlySample> {
    let start = truncate_to_hour(reference_time);
    let daylight = config.daylight_start_hour..=config.daylight_end_hour;
    (0..24)
        .map(|h| {
            let time = start + Duration::hours(h);
            let hour = time.hour();
            let uv = if daylight.contains(&hour) {
                let from_noon = (config.solar_noon_hour as f64 - hour as f64).abs();
                (config.peak_uv - config.decay_per_hour * from_noon).max(0.0)
            } else {
                0.0
            };
            HourlySample::new(time, uv)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvArcs {
    pub groups: Vec<UvArcGroup>,
    pub synthetic: bool,
}

pub fn build_arcs(
    historical: Result<Vec<HourlySample>>,
    forecast: Result<Vec<HourlySample>>,
    now: NaiveDateTime,
    config: &Config,
) -> UvArcs {
    let mut historical = match historical {
        Ok(samples) => samples,
        Err(e) => {
            log::warn!("historical UV unavailable: {}", e);
            Vec::new()
        }
    };
    let mut forecast = match forecast {
        Ok(samples) => samples,
        Err(e) => {
            log::warn!("forecast UV unavailable: {}", e);
            Vec::new()
        }
    };

    historical.sort_by_key(|s| s.time);
    forecast.sort_by_key(|s| s.time);

    let cap = config.timeline.max_historical_hours;
    let historical = &historical[historical.len().saturating_sub(cap)..];
    let forecast = &forecast[..forecast.len().min(config.timeline.forecast_hours)];

    let (start, end) = forecast_window(now, config.timeline.early_morning_cutoff_hours);
    let merged = merge_timeline(historical, forecast, start, end);
    if merged.is_empty() {
        log::warn!("no UV samples for {}, using synthetic curve", now.date());
        let midnight = now.date().and_time(NaiveTime::MIN);
        let samples = synthesize_fallback(midnight, &config.fallback);
        return UvArcs {
            groups: group_by_intensity(&samples),
            synthetic: true,
        };
    }
    UvArcs {
        groups: group_by_intensity(&merged),
        synthetic: false,
    }
}
