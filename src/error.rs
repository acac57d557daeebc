use thiserror::Error;

/// Caller input rejected by [`RelativeTimeFormatter`](crate::format::RelativeTimeFormatter).
#[derive(Error, Debug)]
pub enum InvalidArgument {
    #[error("Units limit should be not less than one, got {0}")]
    UnitsLimitBelowOne(usize),

    #[error("Invalid date provided: {input:?}")]
    UnparsableDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}
