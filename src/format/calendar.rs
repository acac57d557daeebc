use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, ParseError, Timelike, Utc,
};

/// Calendar units in descending magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Years,
    Months,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// The unit table. Order matters: formatting walks it largest first.
    pub const ALL: [Unit; 6] = [
        Unit::Years,
        Unit::Months,
        Unit::Days,
        Unit::Hours,
        Unit::Minutes,
        Unit::Seconds,
    ];

    /// Name used in translation keys (`timeInterval.<name>`).
    pub fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }
}

/// Elapsed calendar time between two instants, split into whole units.
///
/// Fields are subtracted one by one from the earlier instant to the later
/// one, borrowing from the next larger unit when a field goes negative. A
/// borrowed month is worth the number of days in the earlier instant's
/// month, so Mar 31 to Apr 30 is 30 days, not one month. Sub-second
/// precision is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDiff {
    pub years: u64,
    pub months: u64,
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
    /// `true` when `from` lies after `to`.
    pub invert: bool,
}

impl CalendarDiff {
    /// Absolute difference between `from` and `to`.
    pub fn between(from: DateTime<Utc>, to: DateTime<Utc>) -> Self {
        let invert = from > to;
        let (start, end) = if invert { (to, from) } else { (from, to) };

        let mut years = i64::from(end.year() - start.year());
        let mut months = i64::from(end.month()) - i64::from(start.month());
        let mut days = i64::from(end.day()) - i64::from(start.day());
        let mut hours = i64::from(end.hour()) - i64::from(start.hour());
        let mut minutes = i64::from(end.minute()) - i64::from(start.minute());
        let mut seconds = i64::from(end.second()) - i64::from(start.second());

        if end.nanosecond() < start.nanosecond() {
            seconds -= 1;
        }
        if seconds < 0 {
            seconds += 60;
            minutes -= 1;
        }
        if minutes < 0 {
            minutes += 60;
            hours -= 1;
        }
        if hours < 0 {
            hours += 24;
            days -= 1;
        }
        if days < 0 {
            days += days_in_month(start.year(), start.month());
            months -= 1;
        }
        if months < 0 {
            months += 12;
            years -= 1;
        }

        Self {
            years: years as u64,
            months: months as u64,
            days: days as u64,
            hours: hours as u64,
            minutes: minutes as u64,
            seconds: seconds as u64,
            invert,
        }
    }

    pub fn get(&self, unit: Unit) -> u64 {
        match unit {
            Unit::Years => self.years,
            Unit::Months => self.months,
            Unit::Days => self.days,
            Unit::Hours => self.hours,
            Unit::Minutes => self.minutes,
            Unit::Seconds => self.seconds,
        }
    }

    pub fn is_zero(&self) -> bool {
        Unit::ALL.iter().all(|&unit| self.get(unit) == 0)
    }
}

fn days_in_month(year: i32, month: u32) -> i64 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    match (
        NaiveDate::from_ymd_opt(year, month, 1),
        NaiveDate::from_ymd_opt(next_year, next_month, 1),
    ) {
        (Some(first), Some(next)) => (next - first).num_days(),
        _ => 31,
    }
}

const NAIVE_DATETIME_FORMATS: [&str; 3] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a date string into a UTC instant.
///
/// Accepts `now` or a blank string (both resolved to `now`), `@<unix
/// seconds>`, RFC 3339, RFC 2822, and the plain `YYYY-MM-DD[ HH:MM[:SS]]`
/// forms. Inputs without an offset
/// are taken as UTC. On failure the RFC 3339 error is returned, except for
/// `@` inputs which report the timestamp error.
pub fn parse_date(input: &str, now: DateTime<Utc>) -> Result<DateTime<Utc>, ParseError> {
    let input = input.trim();

    if input.is_empty() || input.eq_ignore_ascii_case("now") {
        return Ok(now);
    }

    if let Some(timestamp) = input.strip_prefix('@') {
        return NaiveDateTime::parse_from_str(timestamp, "%s").map(|naive| naive.and_utc());
    }

    let err = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => return Ok(dt.with_timezone(&Utc)),
        Err(e) => e,
    };

    if let Ok(dt) = DateTime::parse_from_rfc2822(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN).and_utc())
        .map_err(|_| err)
}
