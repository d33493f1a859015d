use chrono::{Datelike, Duration, NaiveDate};

use crate::angles;
use crate::config::MatcherConfig;
use crate::types::{DayLengthEstimate, Location, MatchResult, Solstice, SolsticeKind};

pub trait SolsticeSource {
    fn solstices(&self, year: i32) -> Option<(NaiveDate, NaiveDate)>;
}

/// UTC solstice dates as (year, June day, December day).
const KNOWN_SOLSTICES: &[(i32, u32, u32)] = &[
    (2024, 20, 21),
    (2025, 21, 21),
    (2026, 21, 21),
    (2027, 21, 22),
    (2028, 20, 21),
    (2029, 21, 21),
    (2030, 21, 21),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct SolsticeTable;

impl SolsticeSource for SolsticeTable {
    fn solstices(&self, year: i32) -> Option<(NaiveDate, NaiveDate)> {
        let &(_, june, december) = KNOWN_SOLSTICES.iter().find(|(y, _, _)| *y == year)?;
        Some((
            NaiveDate::from_ymd_opt(year, 6, june)?,
            NaiveDate::from_ymd_opt(year, 12, december)?,
        ))
    }
}

fn approximate_solstices(year: i32) -> (NaiveDate, NaiveDate) {
    let fixed = |month| NaiveDate::from_ymd_opt(year, month, 21).unwrap_or(NaiveDate::MAX);
    (fixed(6), fixed(12))
}

fn solstices_for<S: SolsticeSource + ?Sized>(source: &S, year: i32) -> (NaiveDate, NaiveDate) {
    source
        .solstices(year)
        .unwrap_or_else(|| approximate_solstices(year))
}

pub fn next_solstice_from<S: SolsticeSource + ?Sized>(source: &S, reference: NaiveDate) -> Solstice {
    let (summer, winter) = solstices_for(source, reference.year());
    if summer > reference {
        return Solstice { kind: SolsticeKind::Summer, date: summer };
    }
    if winter > reference {
        return Solstice { kind: SolsticeKind::Winter, date: winter };
    }
    let (next_summer, _) = solstices_for(source, reference.year() + 1);
    Solstice { kind: SolsticeKind::Summer, date: next_summer }
}

pub fn next_solstice(reference: NaiveDate) -> Solstice {
    next_solstice_from(&SolsticeTable, reference)
}

pub fn estimate_day_length(date: NaiveDate, location: &Location) -> DayLengthEstimate {
    let n = angles::day_of_year(date);
    let hours = angles::day_length_hours(location.lat(), n);
    DayLengthEstimate::from_minutes((hours * 60.0).round() as i64)
}

pub struct DayLengthMatcher<S = SolsticeTable> {
    config: MatcherConfig,
    solstices: S,
}

impl DayLengthMatcher<SolsticeTable> {
    pub fn new(config: MatcherConfig) -> Self {
        Self { config, solstices: SolsticeTable }
    }
}

impl Default for DayLengthMatcher<SolsticeTable> {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl<S: SolsticeSource> DayLengthMatcher<S> {
    pub fn with_source(config: MatcherConfig, solstices: S) -> Self {
        Self { config, solstices }
    }

    pub fn next_solstice(&self, reference: NaiveDate) -> Solstice {
        next_solstice_from(&self.solstices, reference)
    }

    /// Scan the days after the next solstice for the closest day length to
    /// `target_minutes`. The earliest date wins a tie. `None` only when the
    /// search window is zero days.
    pub fn find_match(
        &self,
        target_minutes: i64,
        location: &Location,
        today: NaiveDate,
    ) -> Option<MatchResult> {
        let solstice = self.next_solstice(today);
        let search_start = solstice.date + Duration::days(1);
        let days_until_search_start = (search_start - today).num_days();

        let mut best: Option<MatchResult> = None;
        for days_after_solstice in 1..=i64::from(self.config.search_window_days) {
            let days_from_today = days_until_search_start + days_after_solstice;
            let date = today + Duration::days(days_from_today);
            let day_length = estimate_day_length(date, location);
            let difference_minutes = (day_length.total_minutes - target_minutes).abs();
            if best.map_or(true, |b| difference_minutes < b.difference_minutes) {
                best = Some(MatchResult {
                    date,
                    day_length,
                    difference_minutes,
                    days_from_today,
                    solstice,
                });
            }
        }

        if best.is_none() {
            log::debug!("empty search window after {}", solstice.name());
        }
        best
    }
}

pub fn find_match(target_minutes: i64, location: &Location, today: NaiveDate) -> Option<MatchResult> {
    DayLengthMatcher::new(MatcherConfig::default()).find_match(target_minutes, location, today)
}
