pub mod angles;
pub mod config;
pub mod day_length;
pub mod error;
pub mod timeline;
pub mod types;

pub use angles::{
    day_length_hours, day_of_year, deg_to_rad, hour_to_dial_angle, normalize_angle, rad_to_deg,
    solar_declination, sunrise_hour_angle, DEGREES_PER_HOUR, EARTH_AXIAL_TILT,
};

pub use config::{Config, FallbackConfig, MatcherConfig, TimelineConfig};

pub use day_length::{
    estimate_day_length, find_match, next_solstice, next_solstice_from, DayLengthMatcher,
    SolsticeSource, SolsticeTable,
};

pub use error::{Result, SolarDialError};

pub use timeline::{
    build_arcs, forecast_window, group_by_intensity, historical_hours, merge_timeline,
    round_to_half, synthesize_fallback, UvArcs,
};

pub use types::{
    truncate_to_hour, DayLengthEstimate, HourlySample, Location, MatchResult, Solstice,
    SolsticeKind, UvArcGroup, UvLevel,
};
