pub mod calendar;
pub mod clock;
pub mod formatter;

pub use calendar::{CalendarDiff, Unit, parse_date};
pub use clock::{Clock, FixedClock, SystemClock};
pub use formatter::{DEFAULT_UNITS_LIMIT, RelativeTimeFormatter, Target};
