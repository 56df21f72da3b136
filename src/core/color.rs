//! Zero-alloc ANSI styling wrapper.  No external deps.

use std::fmt;

// --- AnsiCode ---
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnsiCode(&'static str);

impl AnsiCode {
    pub const fn red() -> Self {
        Self("\x1b[31m")
    }
    pub const fn green() -> Self {
        Self("\x1b[32m")
    }
    pub const fn blue() -> Self {
        Self("\x1b[34m")
    }
    pub const fn bold() -> Self {
        Self("\x1b[1m")
    }
    pub const fn bold_green() -> Self {
        Self("\x1b[1;32m")
    }
    #[inline]
    pub const fn reset() -> Self {
        Self("\x1b[0m")
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    format!("{c}{text}{}", AnsiCode::reset())
}

/// Semantic styles for console output; a disabled palette emits plain text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[inline]
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    fn paint(self, c: &AnsiCode, text: &str) -> String {
        if self.enabled {
            colorize(c, text)
        } else {
            text.to_owned()
        }
    }

    /// Statistic labels.
    #[must_use]
    pub fn label(self, text: &str) -> String {
        self.paint(&AnsiCode::green(), text)
    }
    /// Questions put to the user.
    #[must_use]
    pub fn prompt(self, text: &str) -> String {
        self.paint(&AnsiCode::bold(), text)
    }
    #[must_use]
    pub fn error(self, text: &str) -> String {
        self.paint(&AnsiCode::red(), text)
    }
    /// Informational notices (end of data, empty selection).
    #[must_use]
    pub fn notice(self, text: &str) -> String {
        self.paint(&AnsiCode::blue(), text)
    }
    #[must_use]
    pub fn banner(self, text: &str) -> String {
        self.paint(&AnsiCode::bold_green(), text)
    }
}
