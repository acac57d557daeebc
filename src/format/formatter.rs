use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use tracing::debug;

use super::calendar::{CalendarDiff, Unit, parse_date};
use super::clock::{Clock, SystemClock};
use crate::error::InvalidArgument;
use crate::i18n::{Args, Translate};

pub const DEFAULT_UNITS_LIMIT: usize = 2;

/// Something to format: an instant, or a string still to be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target<'a> {
    Resolved(DateTime<Utc>),
    Text(&'a str),
}

impl From<DateTime<Utc>> for Target<'_> {
    fn from(dt: DateTime<Utc>) -> Self {
        Target::Resolved(dt)
    }
}

impl From<DateTime<FixedOffset>> for Target<'_> {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Target::Resolved(dt.with_timezone(&Utc))
    }
}

/// Naive values are taken as UTC.
impl From<NaiveDateTime> for Target<'_> {
    fn from(naive: NaiveDateTime) -> Self {
        Target::Resolved(naive.and_utc())
    }
}

impl<'a> From<&'a str> for Target<'a> {
    fn from(s: &'a str) -> Self {
        Target::Text(s)
    }
}

impl<'a> From<&'a String> for Target<'a> {
    fn from(s: &'a String) -> Self {
        Target::Text(s)
    }
}

/// Formats instants as "3 days, 4 hours ago" relative to a reference instant.
///
/// The reference instant is captured from the clock on construction and on
/// every [`reset`](Self::reset); it does not advance on its own.
#[derive(Debug, Clone)]
pub struct RelativeTimeFormatter<T, C = SystemClock> {
    translator: T,
    clock: C,
    now: DateTime<Utc>,
    units_limit: usize,
}

impl<T: Translate> RelativeTimeFormatter<T> {
    pub fn new(translator: T) -> Self {
        Self::with_clock(translator, SystemClock)
    }
}

impl<T: Translate, C: Clock> RelativeTimeFormatter<T, C> {
    pub fn with_clock(translator: T, clock: C) -> Self {
        let now = clock.now();
        Self {
            translator,
            clock,
            now,
            units_limit: DEFAULT_UNITS_LIMIT,
        }
    }

    /// Set the units limit used by [`format`](Self::format).
    pub fn with_units_limit(mut self, units_limit: usize) -> Result<Self, InvalidArgument> {
        if units_limit < 1 {
            return Err(InvalidArgument::UnitsLimitBelowOne(units_limit));
        }
        self.units_limit = units_limit;
        Ok(self)
    }

    pub fn units_limit(&self) -> usize {
        self.units_limit
    }

    /// The instant treated as "now".
    pub fn reference(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Re-capture the current time as the reference instant.
    pub fn reset(&mut self) {
        self.now = self.clock.now();
        debug!(now = %self.now, "Reference instant reset");
    }

    /// Format `target` with the configured units limit.
    pub fn format<'a>(&self, target: impl Into<Target<'a>>) -> Result<String, InvalidArgument> {
        self.format_with_limit(target, self.units_limit)
    }

    /// Format `target` using at most `units_limit` consecutive units,
    /// starting from the largest non-zero one.
    ///
    /// Units inside that window that are zero are skipped, so with a limit
    /// of 2, "3 days and 5 minutes" comes out as "3 days ago". A difference
    /// under one second is "just now".
    pub fn format_with_limit<'a>(
        &self,
        target: impl Into<Target<'a>>,
        units_limit: usize,
    ) -> Result<String, InvalidArgument> {
        if units_limit < 1 {
            return Err(InvalidArgument::UnitsLimitBelowOne(units_limit));
        }

        let date = self.resolve(target.into())?;
        let diff = CalendarDiff::between(date, self.now);
        debug!(date = %date, now = %self.now, future = diff.invert, "Formatting relative time");

        let fragments: Vec<String> = Unit::ALL
            .iter()
            .skip_while(|&&unit| diff.get(unit) == 0)
            .take(units_limit)
            .filter(|&&unit| diff.get(unit) > 0)
            .map(|&unit| self.format_interval(diff.get(unit), unit))
            .collect();

        if fragments.is_empty() {
            return Ok(self.translator.translate("timeInterval.justNow", &Args::new()));
        }

        let args = Args::new().with("interval", fragments.join(", "));
        Ok(self.translator.translate("timeInterval.ago", &args))
    }

    /// Translate a single `<magnitude> <unit>` fragment.
    pub fn format_interval(&self, magnitude: u64, unit: Unit) -> String {
        let key = format!("timeInterval.{}", unit.name());
        self.translator.translate(&key, &Args::count(magnitude))
    }

    fn resolve(&self, target: Target<'_>) -> Result<DateTime<Utc>, InvalidArgument> {
        match target {
            Target::Resolved(dt) => Ok(dt),
            Target::Text(input) => {
                parse_date(input, self.clock.now()).map_err(|source| {
                    InvalidArgument::UnparsableDate {
                        input: input.to_string(),
                        source,
                    }
                })
            }
        }
    }
}
