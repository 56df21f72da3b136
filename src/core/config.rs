//! Run-time configuration object + fluent builder.

use std::path::PathBuf;

use crate::core::{
    color::Palette,
    constants::{CHART_WIDTH, MAX_ATTEMPTS, PAGE_SIZE, SECONDS_PER_HOUR},
    error::ConfigError,
};

/// Immutable parameters shared by the prompt, loader and reports.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub palette: Palette,
    pub seconds_per_hour: f64,
    pub page_size: usize,
    pub max_attempts: usize,
    pub chart_width: u64,
    /// Raw-data tables wrap to fit this width; `None` follows the terminal.
    pub table_width: Option<usize>,
}

impl Config {
    #[inline]
    pub fn builder(data_dir: impl Into<PathBuf>) -> ConfigBuilder {
        ConfigBuilder::new(data_dir.into())
    }
}

/// Fluent builder; every field but the data directory has a default.
#[derive(Debug)]
pub struct ConfigBuilder {
    data_dir: PathBuf,
    color: Option<bool>,
    seconds_per_hour: Option<f64>,
    page_size: Option<usize>,
    max_attempts: Option<usize>,
    chart_width: Option<u64>,
    table_width: Option<usize>,
}

impl ConfigBuilder {
    pub(crate) fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            color: None,
            seconds_per_hour: None,
            page_size: None,
            max_attempts: None,
            chart_width: None,
            table_width: None,
        }
    }

    #[inline]
    #[must_use]
    pub fn color(mut self, on: bool) -> Self {
        self.color = Some(on);
        self
    }
    #[inline]
    #[must_use]
    pub fn seconds_per_hour(mut self, v: f64) -> Self {
        self.seconds_per_hour = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn page_size(mut self, v: usize) -> Self {
        self.page_size = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_attempts(mut self, v: usize) -> Self {
        self.max_attempts = Some(v);
        self
    }
    #[inline]
    #[must_use]
    pub fn chart_width(mut self, v: u64) -> Self {
        self.chart_width = Some(v);
        self
    }

    #[inline]
    #[must_use]
    pub fn table_width(mut self, v: usize) -> Self {
        self.table_width = Some(v);
        self
    }

    pub fn build(self) -> Result<Config, ConfigError> {
        let seconds_per_hour = self.seconds_per_hour.unwrap_or(SECONDS_PER_HOUR);
        if !(seconds_per_hour.is_finite() && seconds_per_hour > 0.0) {
            return Err(ConfigError::InvalidHourDivisor(seconds_per_hour));
        }
        let page_size = self.page_size.unwrap_or(PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::Zero("page_size"));
        }
        let max_attempts = self.max_attempts.unwrap_or(MAX_ATTEMPTS);
        if max_attempts == 0 {
            return Err(ConfigError::Zero("max_attempts"));
        }
        let chart_width = self.chart_width.unwrap_or(CHART_WIDTH);
        if chart_width == 0 {
            return Err(ConfigError::Zero("chart_width"));
        }
        Ok(Config {
            data_dir: self.data_dir,
            palette: Palette::new(self.color.unwrap_or(true)),
            seconds_per_hour,
            page_size,
            max_attempts,
            chart_width,
            table_width: self.table_width,
        })
    }
}
