//! The four timed statistics sections printed after each load.

use std::{
    io::{self, Write},
    time::Instant,
};

use crate::{
    core::{
        color::Palette,
        config::Config,
        constants::RULE_WIDTH,
        data::TripTable,
        stats::{self, trip_labels},
    },
    render::{chart::bar_chart, duration::format_seconds},
};

fn join<T: ToString>(values: &[T], sep: &str) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(sep)
}

fn footer<W: Write>(out: &mut W, started: Instant) -> io::Result<()> {
    writeln!(
        out,
        "\nThis took {} seconds.",
        started.elapsed().as_secs_f64()
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))
}

fn chart<W: Write>(out: &mut W, data: &[(String, u64)], cfg: &Config) -> io::Result<()> {
    for line in bar_chart(data, cfg.chart_width) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Most common month, weekday and start hour.
pub fn time_report<W: Write>(out: &mut W, table: &TripTable, p: Palette) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Frequent Times of Travel...\n")?;
    let started = Instant::now();

    let s = stats::time_stats(table);
    writeln!(out, "{}{}", p.label("Most common month(s): "), join(&s.months, ","))?;
    writeln!(out, "{}{}", p.label("Most common day(s): "), join(&s.days, ","))?;
    writeln!(out, "{}{}", p.label("Most common hour(s): "), join(&s.hours, ","))?;

    footer(out, started)
}

/// Most common start station, end station and start→end trip.
pub fn station_report<W: Write>(out: &mut W, table: &TripTable, p: Palette) -> io::Result<()> {
    writeln!(out, "\nCalculating The Most Popular Stations and Trip...\n")?;
    let started = Instant::now();

    let labels = trip_labels(table);
    let s = stats::station_stats(table, &labels);
    writeln!(out, "{}{}", p.label("Most common start station(s): "), s.start.join(","))?;
    writeln!(out, "{}{}", p.label("Most common end station(s): "), s.end.join(","))?;
    writeln!(out, "{}", p.label("Most common trip(s): "))?;
    writeln!(out, "{}", s.trips.join("\n"))?;

    footer(out, started)
}

/// Total and mean trip duration.
pub fn duration_report<W: Write>(out: &mut W, table: &TripTable, cfg: &Config) -> io::Result<()> {
    let p = cfg.palette;
    writeln!(out, "\nCalculating Trip Duration...\n")?;
    let started = Instant::now();

    let d = stats::duration_stats(table);
    writeln!(
        out,
        "{}{}",
        p.label("Total travel time: "),
        format_seconds(d.total, cfg.seconds_per_hour)
    )?;
    let mean = d.mean.map_or_else(
        || "n/a".to_owned(),
        |m| format_seconds(m, cfg.seconds_per_hour),
    );
    writeln!(out, "{}{mean}", p.label("Mean travel time: "))?;

    footer(out, started)
}

/// User-type and gender charts, birth-year extremes.
pub fn user_report<W: Write>(out: &mut W, table: &TripTable, cfg: &Config) -> io::Result<()> {
    let p = cfg.palette;
    writeln!(out, "\nCalculating User Stats...\n")?;
    let started = Instant::now();

    let u = stats::user_stats(table);
    writeln!(out, "{}", p.label("User types:"))?;
    chart(out, &u.user_types, cfg)?;

    if let Some(genders) = &u.genders {
        writeln!(out, "{}", p.label("\nGender Stats:"))?;
        chart(out, genders, cfg)?;
    }

    if let Some(years) = u.birth_years {
        writeln!(out, "{}{}", p.label("\nEarliest Year of birth: "), years.earliest)?;
        writeln!(out, "{}{}", p.label("Most Recent Year of birth: "), years.latest)?;
        writeln!(out, "{}{}", p.label("Most Common Year of birth: "), years.most_common)?;
    }

    footer(out, started)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{
        data::read_trips,
        selection::{DayFilter, MonthFilter},
    };

    const SAMPLE: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
2017-06-05 08:00:00,3600,A,B,Subscriber,Male,1990.0
2017-06-06 08:30:00,3600,A,B,Customer,Female,1985.0
";

    fn cfg() -> Config {
        Config::builder(".").color(false).build().unwrap()
    }

    fn render(f: impl Fn(&mut Vec<u8>, &TripTable) -> io::Result<()>, csv: &str) -> String {
        let t = read_trips(csv.as_bytes(), MonthFilter::All, DayFilter::All).unwrap();
        let mut out = Vec::new();
        f(&mut out, &t).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn time_report_lists_ties() {
        let out = render(|o, t| time_report(o, t, Palette::new(false)), SAMPLE);
        assert!(out.contains("Most common month(s): Jun\n"));
        assert!(out.contains("Most common day(s): Mon,Tue\n"));
        assert!(out.contains("Most common hour(s): 8\n"));
        assert!(out.contains("This took "));
    }

    #[test]
    fn time_report_names_summer_months() {
        let csv = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-07-03 08:00:00,60,A,B,Subscriber
2017-07-10 08:00:00,60,A,B,Subscriber
2017-06-05 08:00:00,60,A,B,Subscriber
";
        let out = render(|o, t| time_report(o, t, Palette::new(false)), csv);
        assert!(out.contains("Most common month(s): Jul\n"), "{out}");
    }

    #[test]
    fn station_report_prints_trip() {
        let out = render(|o, t| station_report(o, t, Palette::new(false)), SAMPLE);
        assert!(out.contains("Most common start station(s): A\n"));
        assert!(out.contains("Most common trip(s): \nA To B\n"));
    }

    #[test]
    fn duration_report_uses_formatter() {
        let out = render(|o, t| duration_report(o, t, &cfg()), SAMPLE);
        assert!(out.contains("Total travel time: 2 hours, 0 minutes, 0 seconds"));
        assert!(out.contains("Mean travel time: 1 hours, 0 minutes, 0 seconds"));
    }

    #[test]
    fn user_report_skips_missing_columns() {
        let out = render(|o, t| user_report(o, t, &cfg()), SAMPLE);
        assert!(out.contains("Gender Stats:"));
        assert!(out.contains("Earliest Year of birth: 1985"));
        assert!(out.contains("Most Common Year of birth: 1985"));

        let plain = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-06-05 08:00:00,60,A,B,Subscriber
";
        let out = render(|o, t| user_report(o, t, &cfg()), plain);
        assert!(out.contains("User types:\nSubscriber ▏    1 "));
        assert!(!out.contains("Gender"));
        assert!(!out.contains("Year of birth"));
    }
}
