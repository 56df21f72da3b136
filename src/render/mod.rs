pub mod chart;
pub mod duration;
pub mod table;

pub use chart::{bar, bar_chart};
pub use duration::format_seconds;
pub use table::{render_table, terminal_width};
