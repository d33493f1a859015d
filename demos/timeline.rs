use chrono::{Duration, NaiveDate};

use solar_dial::{
    build_arcs, estimate_day_length, Config, DayLengthMatcher, HourlySample, Location,
    SolarDialError,
};

fn main() -> Result<(), SolarDialError> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let location = Location::new(40.7128, -74.0060)?;
    let now = NaiveDate::from_ymd_opt(2026, 7, 15)
        .unwrap()
        .and_hms_opt(11, 20, 0)
        .unwrap();
    let today_start = now.date().and_hms_opt(0, 0, 0).unwrap();

    let historical: Vec<HourlySample> = [0.4, 1.3, 2.6, 4.1, 5.4, 6.6]
        .iter()
        .enumerate()
        .map(|(i, &uv)| HourlySample::new(today_start + Duration::hours(6 + i as i64), uv))
        .collect();
    let forecast: Vec<HourlySample> = [7.4, 7.7, 7.2, 6.1, 4.6, 3.0, 1.6, 0.6, 0.1]
        .iter()
        .enumerate()
        .map(|(i, &uv)| HourlySample::new(today_start + Duration::hours(11 + i as i64), uv))
        .collect();

    let arcs = build_arcs(Ok(historical), Ok(forecast), now, &config);

    println!("=== UV Arcs for {} ===", now.date());
    if arcs.synthetic {
        println!("(synthetic curve)");
    }
    for g in &arcs.groups {
        println!(
            "UV {:>4.1} {:?}: {:05.2}h - {:05.2}h ({:.0}° - {:.0}°)",
            g.uv_index,
            g.level(),
            g.start_hour,
            g.end_hour,
            g.start_angle(),
            g.end_angle()
        );
    }
    println!();

    let today = now.date();
    let day_length = estimate_day_length(today, &location);
    let matcher = DayLengthMatcher::new(config.matcher);
    println!("=== Day Length ===");
    println!("Today ({}): {}", today, day_length);
    match matcher.find_match(day_length.total_minutes, &location, today) {
        Some(m) => println!(
            "After the {} ({}), {} is closest: {} (off by {} min, {} days from today)",
            m.solstice.name(),
            m.solstice.date,
            m.date,
            m.day_length,
            m.difference_minutes,
            m.days_from_today
        ),
        None => println!("No match in an empty search window"),
    }
    Ok(())
}
