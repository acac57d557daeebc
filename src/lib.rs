//! Relative time formatting ("3 days, 4 hours ago") with pluggable message
//! catalogs.
pub mod error;
pub mod format;
pub mod i18n;
pub mod util;

pub use error::InvalidArgument;
pub use format::{RelativeTimeFormatter, Target};
pub use i18n::{Args, Catalog, Translate};
