//! Closed city / month / weekday vocabularies and their user-facing spelling.

use std::fmt;

/// The three cities with published trip data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lower-cased key the user types, e.g. `new york city`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            City::Chicago => "chicago",
            City::NewYorkCity => "new york city",
            City::Washington => "washington",
        }
    }

    /// Backing CSV file name inside the data directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            City::Chicago => "chicago.csv",
            City::NewYorkCity => "new_york_city.csv",
            City::Washington => "washington.csv",
        }
    }

    /// Case-insensitive parse; surrounding whitespace is ignored.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let key = input.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| c.key() == key)
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Months covered by the data set (January through June).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Jan = 1,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
    ];

    /// 1-based calendar index.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn from_number(n: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.number() == n)
    }

    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// Three-letter name of any calendar month, not just the filterable ones.
///
/// Data files may hold trips outside January..June; numbers that are not a
/// calendar month at all print as digits.
#[must_use]
pub fn month_name(n: u32) -> String {
    u8::try_from(n)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .and_then(|m| m.name().get(..3))
        .map_or_else(|| n.to_string(), str::to_owned)
}

/// Days of the week, Monday first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Mon = 0,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    /// 0-based index, Monday = 0.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub fn from_index(i: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.index() == i)
    }

    #[must_use]
    pub const fn abbrev(self) -> &'static str {
        match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbrev())
    }
}

/// `All` or a single month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthFilter {
    All,
    Only(Month),
}

impl MonthFilter {
    /// Accepts `all`, `jan` .. `jun` in any case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let word = capitalize(input.trim());
        if word == "All" {
            return Some(Self::All);
        }
        Month::ALL
            .into_iter()
            .find(|m| m.abbrev() == word)
            .map(Self::Only)
    }

    #[inline]
    #[must_use]
    pub fn matches(self, month: u32) -> bool {
        match self {
            Self::All => true,
            Self::Only(m) => m.number() == month,
        }
    }

    /// The option list shown in prompts.
    #[must_use]
    pub fn choices() -> String {
        let mut names = vec!["All"];
        names.extend(Month::ALL.iter().map(|m| m.abbrev()));
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(m) => m.fmt(f),
        }
    }
}

/// `All` or a single weekday.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayFilter {
    All,
    Only(Day),
}

impl DayFilter {
    /// Accepts `all`, `mon` .. `sun` in any case.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let word = capitalize(input.trim());
        if word == "All" {
            return Some(Self::All);
        }
        Day::ALL
            .into_iter()
            .find(|d| d.abbrev() == word)
            .map(Self::Only)
    }

    #[inline]
    #[must_use]
    pub fn matches(self, weekday: u32) -> bool {
        match self {
            Self::All => true,
            Self::Only(d) => d.index() == weekday,
        }
    }

    #[must_use]
    pub fn choices() -> String {
        let mut names: Vec<&str> = Day::ALL.iter().map(|d| d.abbrev()).collect();
        names.push("All");
        format!("[{}]", names.join(", "))
    }
}

impl fmt::Display for DayFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(d) => d.fmt(f),
        }
    }
}

/// A fully validated filter choice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selection {
    pub city: City,
    pub month: MonthFilter,
    pub day: DayFilter,
}

/// First character upper-cased, the rest lower-cased.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_parse_is_case_insensitive() {
        assert_eq!(City::parse("CHICAGO"), Some(City::Chicago));
        assert_eq!(City::parse("  New York City "), Some(City::NewYorkCity));
        assert_eq!(City::parse("washington"), Some(City::Washington));
        assert_eq!(City::parse("new_york_city"), None);
        assert_eq!(City::parse(""), None);
    }

    #[test]
    fn month_filter_accepts_capitalized_abbreviations() {
        assert_eq!(MonthFilter::parse("all"), Some(MonthFilter::All));
        assert_eq!(MonthFilter::parse("jAN"), Some(MonthFilter::Only(Month::Jan)));
        assert_eq!(MonthFilter::parse("Jun"), Some(MonthFilter::Only(Month::Jun)));
        assert_eq!(MonthFilter::parse("Jul"), None);
        assert_eq!(MonthFilter::parse("June"), None);
    }

    #[test]
    fn day_filter_accepts_capitalized_abbreviations() {
        assert_eq!(DayFilter::parse("ALL"), Some(DayFilter::All));
        assert_eq!(DayFilter::parse("sun"), Some(DayFilter::Only(Day::Sun)));
        assert_eq!(DayFilter::parse("Monday"), None);
    }

    #[test]
    fn indices_follow_calendar_conventions() {
        assert_eq!(Month::Jan.number(), 1);
        assert_eq!(Month::Jun.number(), 6);
        assert_eq!(Month::from_number(7), None);
        assert_eq!(Day::Mon.index(), 0);
        assert_eq!(Day::from_index(6), Some(Day::Sun));
    }

    #[test]
    fn month_names_cover_the_whole_year() {
        assert_eq!(month_name(1), "Jan");
        assert_eq!(month_name(6), Month::Jun.abbrev());
        assert_eq!(month_name(7), "Jul");
        assert_eq!(month_name(12), "Dec");
        assert_eq!(month_name(0), "0");
        assert_eq!(month_name(13), "13");
    }

    #[test]
    fn filters_match_by_index() {
        assert!(MonthFilter::All.matches(3));
        assert!(MonthFilter::Only(Month::Mar).matches(3));
        assert!(!MonthFilter::Only(Month::Mar).matches(4));
        assert!(DayFilter::Only(Day::Tue).matches(1));
        assert!(!DayFilter::Only(Day::Tue).matches(0));
    }

    #[test]
    fn choice_lists_match_prompt_wording() {
        assert_eq!(MonthFilter::choices(), "[All, Jan, Feb, Mar, Apr, May, Jun]");
        assert_eq!(DayFilter::choices(), "[Mon, Tue, Wed, Thu, Fri, Sat, Sun, All]");
    }
}
