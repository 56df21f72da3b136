//! Line-oriented console plus the bounded-retry filter prompt.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::core::{
    color::Palette,
    config::Config,
    constants::RULE_WIDTH,
    error::PromptError,
    selection::{City, DayFilter, MonthFilter, Selection},
};

/// Question/answer channel. Generic so sessions can run on in-memory buffers.
pub struct Console<R, W> {
    input: R,
    out: W,
    palette: Palette,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W, palette: Palette) -> Self {
        Self {
            input,
            out,
            palette,
        }
    }

    #[inline]
    pub fn palette(&self) -> Palette {
        self.palette
    }

    /// Raw output sink, for multi-line reports.
    #[inline]
    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{line}")
    }

    /// Print `question` in prompt style and read one line; end of input reads
    /// as an empty answer.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.out, "{}", self.palette.prompt(question))?;
        self.out.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_owned())
    }

    /// True only for a (case-insensitive) `yes`.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(question)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    /// Ask until `parse` accepts an answer, at most `max_attempts` times.
    ///
    /// Retries are asked with `retry`, preceded by a red `Invalid input!`.
    pub fn ask_until<T>(
        &mut self,
        field: &'static str,
        first: &str,
        retry: &str,
        max_attempts: usize,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, PromptError> {
        let mut answer = self.ask(first)?;
        for attempt in 1..=max_attempts {
            if let Some(v) = parse(&answer) {
                return Ok(v);
            }
            debug!("rejected {field} answer {answer:?} ({attempt}/{max_attempts})");
            if attempt == max_attempts {
                break;
            }
            let question = format!("{}\n{retry}", self.palette.error("Invalid input!"));
            answer = self.ask(&question)?;
        }
        Err(PromptError::Exhausted { field })
    }
}

/// Collect city, month and day, in that order.
pub fn get_filters<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    cfg: &Config,
) -> Result<Selection, PromptError> {
    console.say("Hello! Let's explore some US bikeshare data!")?;

    let city = console.ask_until(
        "city",
        "Please choose one of these cities to view its data (Chicago, New York City, Washington):",
        "Please try again to choose one of these cities to view its data (chicago, new york city, washington):",
        cfg.max_attempts,
        City::parse,
    )?;

    let months = MonthFilter::choices();
    let month = console.ask_until(
        "month",
        &format!("Please choose a month to filter by {months}:"),
        &format!("Please try again to choose a month to filter by {months}:"),
        cfg.max_attempts,
        MonthFilter::parse,
    )?;

    let days = DayFilter::choices();
    let day = console.ask_until(
        "day",
        &format!("Please choose a day to filter by {days}:"),
        &format!("Please try again to choose a day to filter by {days}:"),
        cfg.max_attempts,
        DayFilter::parse,
    )?;

    console.say(&"-".repeat(RULE_WIDTH))?;
    Ok(Selection { city, month, day })
}
