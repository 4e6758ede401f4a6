//! Week span model and week directory lookup.
//!
//! # Responsibility
//! - Compute the enclosing week of a date (`WeekSpan::containing`).
//! - Render week directory, summary and workday file names.
//! - Locate an existing week directory for the compiler.
//!
//! # Invariants
//! - `start` is always a Monday and `end` the following Sunday.
//! - Weeks straddling a year or quarter boundary are filed under the start
//!   date's year and quarter.

use crate::config::RecallConfig;
use crate::error::{RecallError, RecallResult};
use chrono::{Datelike, Duration, Local, NaiveDate};
use log::debug;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Subdirectory of a week directory that holds daily notes.
pub const DAILY_DIR_NAME: &str = "daily";

const WORKDAYS_PER_WEEK: i64 = 5;

/// One Monday..Sunday calendar week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekSpan {
    /// Monday of the week.
    pub start: NaiveDate,
    /// Sunday of the week.
    pub end: NaiveDate,
    /// ISO week number of `start`.
    pub iso_week: u32,
    /// Calendar year of `start`.
    pub year: i32,
    /// Quarter (1..=4) of `start`.
    pub quarter: u32,
}

impl WeekSpan {
    /// Returns the week enclosing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        let offset = i64::from(date.weekday().num_days_from_monday());
        let start = date - Duration::days(offset);
        let end = start + Duration::days(6);
        Self {
            start,
            end,
            iso_week: start.iso_week().week(),
            year: start.year(),
            quarter: quarter_of(start),
        }
    }

    /// `Week<NN>-<MonDD>-<MonDD>`, e.g. `Week02-Jan08-Jan14`.
    pub fn dir_name(&self) -> String {
        format!(
            "{}{}-{}",
            self.dir_prefix(),
            self.start.format("%b%d"),
            self.end.format("%b%d")
        )
    }

    /// `Week<NN>-`, the prefix used when looking up an existing directory.
    pub fn dir_prefix(&self) -> String {
        format!("Week{:02}-", self.iso_week)
    }

    /// `week<NN>-summary.md`
    pub fn summary_file_name(&self) -> String {
        format!("week{:02}-summary.md", self.iso_week)
    }

    /// Deterministic week directory path under `config`.
    pub fn week_dir(&self, config: &RecallConfig) -> PathBuf {
        config
            .quarter_dir(self.year, self.quarter)
            .join(self.dir_name())
    }

    /// Monday through Friday.
    pub fn workdays(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..WORKDAYS_PER_WEEK).map(move |offset| start + Duration::days(offset))
    }

    /// Human-readable start date, e.g. `January 08, 2024`.
    pub fn start_label(&self) -> String {
        long_date(self.start)
    }

    /// Human-readable end date, e.g. `January 14, 2024`.
    pub fn end_label(&self) -> String {
        long_date(self.end)
    }
}

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Daily note file name for `date`: `YYYY-MM-DD.md`.
pub fn daily_file_name(date: NaiveDate) -> String {
    format!("{}.md", date.format("%Y-%m-%d"))
}

/// Finds the existing week directory for the week enclosing `date`.
///
/// Searches `<base>/<year>/Q<quarter>` for a directory named `Week<NN>-*`.
/// When several match, the first in name order wins.
///
/// # Errors
/// - `WeekNotFound` when the quarter directory or a matching entry is absent.
/// - `Io` when the quarter directory cannot be listed.
pub fn locate_week_dir(config: &RecallConfig, date: NaiveDate) -> RecallResult<PathBuf> {
    let week = WeekSpan::containing(date);
    let quarter_dir = config.quarter_dir(week.year, week.quarter);
    let not_found = || RecallError::WeekNotFound {
        week: week.iso_week,
        year: week.year,
    };

    let entries = match fs::read_dir(&quarter_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(not_found()),
        Err(err) => return Err(RecallError::io(&quarter_dir, err)),
    };

    let prefix = week.dir_prefix();
    let mut matches = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|err| RecallError::io(&quarter_dir, err))?;
        let name = entry.file_name();
        let is_match = name
            .to_str()
            .map(|value| value.starts_with(prefix.as_str()))
            .unwrap_or(false);
        if is_match && entry.path().is_dir() {
            matches.push(entry.path());
        }
    }
    matches.sort();

    debug!(
        "event=week_lookup module=calendar status=ok prefix={} candidates={}",
        prefix,
        matches.len()
    );
    matches.into_iter().next().ok_or_else(not_found)
}

fn quarter_of(date: NaiveDate) -> u32 {
    (date.month() - 1) / 3 + 1
}

fn long_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}
