//! Aggregates the “business logic” layer.

pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod selection;
pub mod stats;

// re-export frequently-used items for convenience
pub use color::{AnsiCode, Palette, colorize};
pub use config::{Config, ConfigBuilder};
pub use constants::{CHART_WIDTH, MAX_ATTEMPTS, PAGE_SIZE};
pub use data::{LoadError, OptionalFields, TripRecord, TripTable, load_city, read_trips};
pub use error::{AppError, ConfigError, PromptError};
pub use selection::{City, Day, DayFilter, Month, MonthFilter, Selection};
