use std::fmt;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::angles;
use crate::error::{Result, SolarDialError};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Location {
    lat: f64,
    lng: f64,
}

impl Location {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() || lat.abs() > 90.0 || lng.abs() > 180.0 {
            return Err(SolarDialError::InvalidLocation { lat, lng });
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawSample")]
pub struct HourlySample {
    pub time: NaiveDateTime,
    pub uv_index: f64,
}

#[derive(Deserialize)]
struct RawSample {
    time: NaiveDateTime,
    #[serde(alias = "uvIndex", alias = "uv")]
    uv_index: f64,
}

impl From<RawSample> for HourlySample {
    fn from(raw: RawSample) -> Self {
        HourlySample::new(raw.time, raw.uv_index)
    }
}

impl HourlySample {
    /// Truncates `time` to the hour; negative or non-finite UV becomes 0.
    pub fn new(time: NaiveDateTime, uv_index: f64) -> Self {
        Self {
            time: truncate_to_hour(time),
            uv_index: if uv_index.is_finite() { uv_index.max(0.0) } else { 0.0 },
        }
    }

    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>, uv_index: f64) -> Self {
        Self::new(dt.naive_local(), uv_index)
    }

    pub fn hour_of_day(&self) -> u32 {
        self.time.hour()
    }
}

pub fn truncate_to_hour(time: NaiveDateTime) -> NaiveDateTime {
    time.date()
        .and_hms_opt(time.hour(), 0, 0)
        .unwrap_or(time)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum UvLevel {
    Low,
    Moderate,
    High,
    VeryHigh,
    Extreme,
}

impl UvLevel {
    pub fn from_index(uv: f64) -> Self {
        if uv < 3.0 {
            UvLevel::Low
        } else if uv < 6.0 {
            UvLevel::Moderate
        } else if uv < 8.0 {
            UvLevel::High
        } else if uv < 11.0 {
            UvLevel::VeryHigh
        } else {
            UvLevel::Extreme
        }
    }
}

/// A maximal run of consecutive hours sharing one rounded UV value.
///
/// `start_hour` and `end_hour` are hours since midnight of the day the
/// timeline starts on, so a group past midnight reads as 24 or more.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UvArcGroup {
    pub uv_index: f64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub start_hour: f64,
    pub end_hour: f64,
    pub member_hours: Vec<HourlySample>,
}

impl UvArcGroup {
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn level(&self) -> UvLevel {
        UvLevel::from_index(self.uv_index)
    }

    pub fn start_angle(&self) -> f64 {
        angles::hour_to_dial_angle(self.start_hour)
    }

    pub fn end_angle(&self) -> f64 {
        angles::hour_to_dial_angle(self.end_hour)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayLengthEstimate {
    pub hours: i64,
    pub minutes: i64,
    pub total_minutes: i64,
}

impl DayLengthEstimate {
    pub fn from_minutes(total_minutes: i64) -> Self {
        Self {
            hours: total_minutes / 60,
            minutes: total_minutes % 60,
            total_minutes,
        }
    }

    pub fn formatted_label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DayLengthEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours, self.minutes)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolsticeKind {
    Summer,
    Winter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Solstice {
    pub kind: SolsticeKind,
    pub date: NaiveDate,
}

impl Solstice {
    pub fn name(&self) -> &'static str {
        match self.kind {
            SolsticeKind::Summer => "Summer Solstice",
            SolsticeKind::Winter => "Winter Solstice",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MatchResult {
    pub date: NaiveDate,
    pub day_length: DayLengthEstimate,
    pub difference_minutes: i64,
    pub days_from_today: i64,
    pub solstice: Solstice,
}
