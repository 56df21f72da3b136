//! Trip-table loader: CSV ingest, schema validation, derived time fields and
//! month / weekday filtering.

use std::{
    error::Error,
    fmt::{self, Display},
    fs::File,
    io::Read,
    path::Path,
};

use chrono::{Datelike, NaiveDateTime, Timelike};
use log::debug;

use crate::core::{
    constants::{
        COL_BIRTH_YEAR, COL_END_STATION, COL_GENDER, COL_START_STATION, COL_START_TIME,
        COL_TRIP_DURATION, COL_USER_TYPE,
    },
    selection::{DayFilter, MonthFilter, Selection},
};

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

// --- Public Row Structs ---

/// One bicycle trip. Blank cells are `None`.
#[derive(Clone, Debug)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub start_station: Option<String>,
    pub end_station: Option<String>,
    pub duration: Option<f64>,
    pub user_type: Option<String>,
    pub gender: Option<String>,
    pub birth_year: Option<f64>,
    /// 0..=23
    pub hour: u32,
    /// 1-based
    pub month: u32,
    /// Monday = 0
    pub day_of_week: u32,
    /// Original cells in header order, for the raw-data view.
    pub raw: csv::StringRecord,
}

/// Which optional columns the city's file provides.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OptionalFields {
    pub gender: bool,
    pub birth_year: bool,
}

/// Trips of one city after filtering.
#[derive(Clone, Debug)]
pub struct TripTable {
    pub headers: Vec<String>,
    pub optional: OptionalFields,
    pub trips: Vec<TripRecord>,
}

impl TripTable {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.trips.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trips.is_empty()
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct LoadError {
    /// 1-based data line, 0 when the fault is not tied to a row
    pub line: usize,
    pub kind: LoadErrorKind,
}

#[derive(Debug)]
pub enum LoadErrorKind {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(&'static str),
    BadTimestamp(String),
    BadNumber { field: &'static str, text: String },
}

impl Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::Io(e) => write!(f, "I/O error: {e}"),
            LoadErrorKind::Csv(e) => write!(f, "line {}: {e}", self.line),
            LoadErrorKind::MissingColumn(name) => write!(f, "Missing header: {name}"),
            LoadErrorKind::BadTimestamp(text) => {
                write!(f, "line {}: invalid {COL_START_TIME} '{text}'", self.line)
            }
            LoadErrorKind::BadNumber { field, text } => {
                write!(f, "line {}: invalid {field} value '{text}'", self.line)
            }
        }
    }
}
impl Error for LoadError {}

impl LoadError {
    fn at(line: usize, kind: LoadErrorKind) -> Self {
        Self { line, kind }
    }
}

// --- Helpers ---

/// Header positions resolved once per file.
struct Columns {
    start_time: usize,
    start_station: usize,
    end_station: usize,
    duration: usize,
    user_type: usize,
    gender: Option<usize>,
    birth_year: Option<usize>,
}

impl Columns {
    fn resolve(headers: &[String]) -> Result<Self, LoadError> {
        let find = |name: &str| headers.iter().position(|h| h == name);
        // mandatory columns are checked in this order; the first missing one wins
        let require = |name: &'static str| {
            find(name).ok_or_else(|| LoadError::at(0, LoadErrorKind::MissingColumn(name)))
        };
        Ok(Self {
            start_time: require(COL_START_TIME)?,
            start_station: require(COL_START_STATION)?,
            end_station: require(COL_END_STATION)?,
            duration: require(COL_TRIP_DURATION)?,
            user_type: require(COL_USER_TYPE)?,
            gender: find(COL_GENDER),
            birth_year: find(COL_BIRTH_YEAR),
        })
    }

    fn optional(&self) -> OptionalFields {
        OptionalFields {
            gender: self.gender.is_some(),
            birth_year: self.birth_year.is_some(),
        }
    }
}

#[inline]
fn text(rec: &csv::StringRecord, idx: usize) -> Option<String> {
    rec.get(idx).filter(|s| !s.is_empty()).map(str::to_owned)
}

#[inline]
fn number(
    rec: &csv::StringRecord,
    idx: usize,
    line: usize,
    field: &'static str,
) -> Result<Option<f64>, LoadError> {
    let Some(cell) = rec.get(idx).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };
    match lexical_core::parse::<f64>(cell.as_bytes()) {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(LoadError::at(
            line,
            LoadErrorKind::BadNumber {
                field,
                text: cell.to_owned(),
            },
        )),
    }
}

fn parse_timestamp(cell: &str, line: usize) -> Result<NaiveDateTime, LoadError> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(cell, fmt).ok())
        .ok_or_else(|| LoadError::at(line, LoadErrorKind::BadTimestamp(cell.to_owned())))
}

fn parse_row(
    rec: csv::StringRecord,
    cols: &Columns,
    line: usize,
) -> Result<TripRecord, LoadError> {
    let start_time = parse_timestamp(rec.get(cols.start_time).unwrap_or(""), line)?;
    let duration = number(&rec, cols.duration, line, COL_TRIP_DURATION)?;
    let birth_year = match cols.birth_year {
        Some(idx) => number(&rec, idx, line, COL_BIRTH_YEAR)?,
        None => None,
    };
    Ok(TripRecord {
        start_station: text(&rec, cols.start_station),
        end_station: text(&rec, cols.end_station),
        duration,
        user_type: text(&rec, cols.user_type),
        gender: cols.gender.and_then(|idx| text(&rec, idx)),
        birth_year,
        hour: start_time.hour(),
        month: start_time.month(),
        day_of_week: start_time.weekday().num_days_from_monday(),
        start_time,
        raw: rec,
    })
}

// --- Ingest ---

/// Read a trip CSV and keep the rows matching `month` and `day`.
///
/// An empty result is not an error.
pub fn read_trips<R: Read>(
    src: R,
    month: MonthFilter,
    day: DayFilter,
) -> Result<TripTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(src);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|e| LoadError::at(0, LoadErrorKind::Csv(e)))?
        .iter()
        .map(str::to_owned)
        .collect();
    let cols = Columns::resolve(&headers)?;

    let mut trips = Vec::new();
    let mut read = 0usize;
    for (i, row) in rdr.into_records().enumerate() {
        let line = i + 1;
        let rec = row.map_err(|e| LoadError::at(line, LoadErrorKind::Csv(e)))?;
        let trip = parse_row(rec, &cols, line)?;
        read += 1;
        if month.matches(trip.month) && day.matches(trip.day_of_week) {
            trips.push(trip);
        }
    }

    let optional = cols.optional();
    debug!(
        "read {read} trips, kept {} (month={month}, day={day}, gender={}, birth_year={})",
        trips.len(),
        optional.gender,
        optional.birth_year
    );
    Ok(TripTable {
        headers,
        optional,
        trips,
    })
}

/// Resolve the city's file inside `data_dir` and load it.
pub fn load_city(data_dir: &Path, sel: &Selection) -> Result<TripTable, LoadError> {
    let path = data_dir.join(sel.city.file_name());
    debug!("loading {}", path.display());
    let file = File::open(&path).map_err(|e| LoadError::at(0, LoadErrorKind::Io(e)))?;
    read_trips(file, sel.month, sel.day)
}
