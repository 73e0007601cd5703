//! Free-text date parsing for ranking.
//!
//! Listing pages print dates in every imaginable way. [`DateParser`] turns
//! such text into milliseconds since the Unix epoch so articles can be
//! compared. It never fails: unparseable input yields `0`, which sorts as
//! the oldest possible date.
//!
//! Attempts, first success wins:
//! 1. explicit grammars (`June 7, 2020`, `2020-06-07`, `06/07/2020`, ...)
//! 2. strict ISO-8601
//! 3. bare `H:mm` / `HH:mm`, read as today
//! 4. relative `<N> <unit>(s) ago`
//! 5. a loose set of common human layouts and RFC 2822
//!
//! Zone-less values are read in the local time zone.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use regex::Regex;

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// One explicit format grammar.
#[derive(Debug, Clone, Copy)]
enum Grammar {
    /// Calendar date, midnight local time.
    Date(&'static str),
    /// Wall-clock time, today.
    Time(&'static str),
    /// Date-time carrying its own offset.
    Zoned(&'static str),
}

/// Tried in order before anything else.
const GRAMMARS: [Grammar; 7] = [
    Grammar::Date("%B %d, %Y"),
    Grammar::Date("%B %d %Y"),
    Grammar::Date("%b %d, %Y"),
    Grammar::Date("%Y-%m-%d"),
    Grammar::Date("%m/%d/%Y"),
    Grammar::Time("%H:%M"),
    Grammar::Zoned("%Y-%m-%dT%H:%M:%S%.3f%#z"),
];

/// Zone-less ISO-8601 date-times accepted by the strict ISO step.
const ISO_LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Last-resort layouts.
const LOOSE_DATE_FORMATS: [&str; 7] = [
    "%d %B %Y",
    "%d %b %Y",
    "%b %d %Y",
    "%Y/%m/%d",
    "%A, %B %d, %Y",
    "%a, %b %d, %Y",
    "%B %d, %Y at %H:%M",
];

/// Converts date text into epoch milliseconds.
#[derive(Debug, Clone)]
pub struct DateParser {
    time_only: Regex,
    relative: Regex,
}

impl Default for DateParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DateParser {
    pub fn new() -> Self {
        Self {
            time_only: Regex::new(r"^(\d{1,2}):(\d{2})$").unwrap(),
            relative: Regex::new(r"(?i)(\d+)\s+(minute|hour|day|week|month|year)s?\s+ago").unwrap(),
        }
    }

    /// Parses `raw` relative to the current local time.
    pub fn parse(&self, raw: &str) -> i64 {
        self.parse_at(raw, Local::now())
    }

    /// Parses `raw`, using `now` for "today" and "ago" arithmetic.
    pub fn parse_at(&self, raw: &str, now: DateTime<Local>) -> i64 {
        let raw = raw.trim();
        if raw.is_empty() {
            return 0;
        }

        GRAMMARS
            .iter()
            .find_map(|grammar| parse_grammar(*grammar, raw, now))
            .or_else(|| parse_iso(raw))
            .or_else(|| self.parse_time_only(raw, now))
            .or_else(|| self.parse_relative(raw, now))
            .or_else(|| parse_loose(raw))
            .unwrap_or(0)
    }

    fn parse_time_only(&self, raw: &str, now: DateTime<Local>) -> Option<i64> {
        let caps = self.time_only.captures(raw)?;
        let hour = caps[1].parse().ok()?;
        let minute = caps[2].parse().ok()?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)?;
        local_millis(now.date_naive().and_time(time))
    }

    fn parse_relative(&self, raw: &str, now: DateTime<Local>) -> Option<i64> {
        let caps = self.relative.captures(raw)?;
        let amount: i64 = caps[1].parse().ok()?;
        let unit_ms = match caps[2].to_ascii_lowercase().as_str() {
            "minute" => MINUTE_MS,
            "hour" => HOUR_MS,
            "day" => DAY_MS,
            "week" => 7 * DAY_MS,
            // Fixed approximations; calendar-exact arithmetic is not wanted here.
            "month" => 30 * DAY_MS,
            "year" => 365 * DAY_MS,
            _ => return None,
        };

        now.timestamp_millis().checked_sub(amount.checked_mul(unit_ms)?)
    }
}

/// Parses with a one-off [`DateParser`].
pub fn parse_date(raw: &str) -> i64 {
    DateParser::new().parse(raw)
}

fn parse_grammar(grammar: Grammar, raw: &str, now: DateTime<Local>) -> Option<i64> {
    match grammar {
        Grammar::Date(fmt) => NaiveDate::parse_from_str(raw, fmt)
            .ok()
            .and_then(|date| local_millis(date.and_time(NaiveTime::MIN))),
        Grammar::Time(fmt) => NaiveTime::parse_from_str(raw, fmt)
            .ok()
            .and_then(|time| local_millis(now.date_naive().and_time(time))),
        Grammar::Zoned(fmt) => DateTime::parse_from_str(raw, fmt)
            .ok()
            .map(|dt| dt.timestamp_millis()),
    }
}

fn parse_iso(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }

    ISO_LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(local_millis)
}

fn parse_loose(raw: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }

    LOOSE_DATE_FORMATS.iter().find_map(|fmt| {
        NaiveDateTime::parse_from_str(raw, fmt)
            .ok()
            .or_else(|| {
                NaiveDate::parse_from_str(raw, fmt)
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .and_then(local_millis)
    })
}

fn local_millis(naive: NaiveDateTime) -> Option<i64> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
}
