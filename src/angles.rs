use chrono::{Datelike, NaiveDate};

pub const EARTH_AXIAL_TILT: f64 = 23.45;
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const EQUINOX_DAY_OFFSET: i32 = 81;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(360.0)
}

pub fn hour_to_dial_angle(hour: f64) -> f64 {
    normalize_angle(hour * DEGREES_PER_HOUR)
}

pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

pub fn solar_declination(n: i32) -> f64 {
    EARTH_AXIAL_TILT * deg_to_rad((360.0 / 365.0) * (n - EQUINOX_DAY_OFFSET) as f64).sin()
}

/// Sunrise hour angle in degrees. The acos argument is clamped, so polar
/// night yields 0° and polar day 180°.
pub fn sunrise_hour_angle(latitude: f64, declination: f64) -> f64 {
    let lat_rad = deg_to_rad(latitude);
    let decl_rad = deg_to_rad(declination);
    let cos_h = -lat_rad.tan() * decl_rad.tan();
    rad_to_deg(cos_h.clamp(-1.0, 1.0).acos())
}

pub fn day_length_hours(latitude: f64, n: i32) -> f64 {
    let decl = solar_declination(n);
    2.0 * sunrise_hour_angle(latitude, decl) / DEGREES_PER_HOUR
}
