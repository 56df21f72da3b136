//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    color::{AnsiCode, Palette, colorize},
    config::{Config, ConfigBuilder},
    data::{LoadError, OptionalFields, TripRecord, TripTable, load_city, read_trips},
    error::{AppError, ConfigError, PromptError},
    selection::{City, Day, DayFilter, Month, MonthFilter, Selection},
};

pub use render::{bar_chart, format_seconds};

/// Load one city's trips from `data_dir` and print every statistics section
/// to `out`, without any prompting.
pub fn report_city<W: std::io::Write>(
    out: &mut W,
    cfg: &Config,
    sel: &Selection,
) -> Result<usize, AppError> {
    use crate::cli::report::{duration_report, station_report, time_report, user_report};

    let table = load_city(&cfg.data_dir, sel)?;
    if table.is_empty() {
        return Ok(0);
    }
    time_report(out, &table, cfg.palette)?;
    station_report(out, &table, cfg.palette)?;
    duration_report(out, &table, cfg)?;
    user_report(out, &table, cfg)?;
    Ok(table.len())
}
