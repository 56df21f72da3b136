//! Aggregations over a [`TripTable`]: modes, value counts, totals.
//!
//! Every function here is pure; printing lives in `cli::report`.

use std::collections::BTreeMap;

use crate::core::{
    constants::TRIP_SEPARATOR,
    data::TripTable,
    selection::{Day, month_name},
};

/// Most frequent value(s), ascending. Empty input gives an empty vec.
pub fn modes<T, I>(values: I) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    let mut counts = BTreeMap::<T, u64>::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let Some(&top) = counts.values().max() else {
        return Vec::new();
    };
    counts
        .into_iter()
        .filter_map(|(v, n)| (n == top).then_some(v))
        .collect()
}

/// Occurrences per label, highest count first; equal counts sort by label.
pub fn value_counts<I>(values: I) -> Vec<(String, u64)>
where
    I: IntoIterator<Item = String>,
{
    let mut counts = BTreeMap::<String, u64>::new();
    for v in values {
        *counts.entry(v).or_default() += 1;
    }
    let mut out: Vec<(String, u64)> = counts.into_iter().collect();
    // stable sort keeps the BTreeMap's label order within a tie
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// `"<start> To <end>"` per trip; `None` when either station is blank.
///
/// Derived on demand so the loaded table is never mutated.
#[must_use]
pub fn trip_labels(table: &TripTable) -> Vec<Option<String>> {
    table
        .trips
        .iter()
        .map(|t| match (&t.start_station, &t.end_station) {
            (Some(s), Some(e)) => Some(format!("{s}{TRIP_SEPARATOR}{e}")),
            _ => None,
        })
        .collect()
}

// --- Report payloads ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    /// Three-letter names, e.g. `Jun` or `Jul`.
    pub months: Vec<String>,
    pub days: Vec<Day>,
    pub hours: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub start: Vec<String>,
    pub end: Vec<String>,
    pub trips: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationStats {
    pub total: f64,
    /// `None` when no trip carries a duration.
    pub mean: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthYears {
    pub earliest: i64,
    pub latest: i64,
    /// Smallest of the modal years when several tie.
    pub most_common: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, u64)>,
    /// Present only when the city records gender.
    pub genders: Option<Vec<(String, u64)>>,
    /// Present only when the city records birth year and at least one cell is filled.
    pub birth_years: Option<BirthYears>,
}

// --- Report computations ---

#[must_use]
pub fn time_stats(table: &TripTable) -> TimeStats {
    let trips = &table.trips;
    TimeStats {
        months: modes(trips.iter().map(|t| t.month))
            .into_iter()
            .map(month_name)
            .collect(),
        days: modes(trips.iter().map(|t| t.day_of_week))
            .into_iter()
            .filter_map(Day::from_index)
            .collect(),
        hours: modes(trips.iter().map(|t| t.hour)),
    }
}

#[must_use]
pub fn station_stats(table: &TripTable, trip_labels: &[Option<String>]) -> StationStats {
    let trips = &table.trips;
    StationStats {
        start: modes(trips.iter().filter_map(|t| t.start_station.clone())),
        end: modes(trips.iter().filter_map(|t| t.end_station.clone())),
        trips: modes(trip_labels.iter().flatten().cloned()),
    }
}

#[must_use]
pub fn duration_stats(table: &TripTable) -> DurationStats {
    let (total, n) = table
        .trips
        .iter()
        .filter_map(|t| t.duration)
        .fold((0.0_f64, 0_u32), |(sum, n), d| (sum + d, n + 1));
    DurationStats {
        total,
        mean: (n > 0).then(|| total / f64::from(n)),
    }
}

/// Nearest whole year, or `None` when it does not fit an `i64`.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn whole_year(y: f64) -> Option<i64> {
    let y = y.round();
    // i64::MAX as f64 rounds up to 2^63, which no longer fits
    (y >= i64::MIN as f64 && y < i64::MAX as f64).then(|| y as i64)
}

#[must_use]
pub fn user_stats(table: &TripTable) -> UserStats {
    let trips = &table.trips;
    let user_types = value_counts(trips.iter().filter_map(|t| t.user_type.clone()));
    let genders = table
        .optional
        .gender
        .then(|| value_counts(trips.iter().filter_map(|t| t.gender.clone())));

    let birth_years = if table.optional.birth_year {
        // years are whole numbers stored as floats ("1992.0")
        let years: Vec<i64> = trips
            .iter()
            .filter_map(|t| t.birth_year)
            .filter_map(whole_year)
            .collect();
        match (years.iter().min(), years.iter().max()) {
            (Some(&earliest), Some(&latest)) => Some(BirthYears {
                earliest,
                latest,
                most_common: modes(years.iter().copied())
                    .first()
                    .copied()
                    .unwrap_or(earliest),
            }),
            _ => None,
        }
    } else {
        None
    };

    UserStats {
        user_types,
        genders,
        birth_years,
    }
}
