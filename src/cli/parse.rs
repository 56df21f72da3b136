use std::path::PathBuf;

use clap::Parser;

use crate::core::{
    config::{Config, ConfigBuilder},
    constants::LEGACY_SECONDS_PER_HOUR,
    error::ConfigError,
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "bikeshare",
    about = "Explore US bike-share trip data interactively"
)]
pub struct Cli {
    /// Directory holding chicago.csv, new_york_city.csv and washington.csv
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub data_dir: PathBuf,

    /// Disable coloured output (also honoured via `NO_COLOR`)
    #[arg(long)]
    pub no_color: bool,

    /// Count 120 seconds per hour in duration totals, as older reports did
    #[arg(long)]
    pub legacy_hours: bool,

    /// Emit debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    fn color_enabled(&self) -> bool {
        !self.no_color && std::env::var_os("NO_COLOR").is_none()
    }

    pub fn config(&self) -> Result<Config, ConfigError> {
        let mut b: ConfigBuilder =
            Config::builder(self.data_dir.clone()).color(self.color_enabled());
        if self.legacy_hours {
            b = b.seconds_per_hour(LEGACY_SECONDS_PER_HOUR);
        }
        b.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bikeshare"]).unwrap();
        assert_eq!(cli.data_dir, PathBuf::from("."));
        assert!(!cli.legacy_hours);
        let cfg = Cli::try_parse_from(["bikeshare", "--no-color"])
            .unwrap()
            .config()
            .unwrap();
        assert!(!cfg.palette.enabled());
    }

    #[test]
    fn legacy_hours_switches_divisor() {
        let cfg = Cli::try_parse_from(["bikeshare", "--legacy-hours", "--data-dir", "data"])
            .unwrap()
            .config()
            .unwrap();
        assert!((cfg.seconds_per_hour - 120.0).abs() < f64::EPSILON);
        assert_eq!(cfg.data_dir, PathBuf::from("data"));
    }
}
