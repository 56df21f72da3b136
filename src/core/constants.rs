//! A collection of constants.

/// Rows shown per raw-data page
pub const PAGE_SIZE: usize = 5;
/// Consecutive invalid answers tolerated per prompt
pub const MAX_ATTEMPTS: usize = 5;

/// The longest bar of a chart spans this many full cells
pub const CHART_WIDTH: u64 = 25;
/// Block glyphs have 8 horizontal sub-cell steps
pub const EIGHTHS_PER_CELL: u64 = 8;
/// Count column is right-aligned to 4 digits
pub const COUNT_WIDTH: usize = 4;

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3600.0;
/// Hour divisor of the historical report output.
///
/// 7200 seconds formats as "60 hours, 0 minutes, 0 seconds".
pub const LEGACY_SECONDS_PER_HOUR: f64 = 120.0;

/// Joins start and end station into a trip label
pub const TRIP_SEPARATOR: &str = " To ";
/// Width of the dashed rule between report sections
pub const RULE_WIDTH: usize = 40;

// Mandatory CSV headers, in validation order
pub const COL_START_TIME: &str = "Start Time";
pub const COL_START_STATION: &str = "Start Station";
pub const COL_END_STATION: &str = "End Station";
pub const COL_TRIP_DURATION: &str = "Trip Duration";
pub const COL_USER_TYPE: &str = "User Type";

// Optional CSV headers
pub const COL_GENDER: &str = "Gender";
pub const COL_BIRTH_YEAR: &str = "Birth Year";

