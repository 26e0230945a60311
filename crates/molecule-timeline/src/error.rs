// File: crates/molecule-timeline/src/error.rs
// Summary: Typed errors for accumulation, stacking and chart assembly.

use thiserror::Error;

/// Failures of the year-bucket merge. Both indicate a caller bug: the
/// supplied years do not cover the records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccumulateError {
    #[error("ran out of years before records were exhausted: record year {record_year} is after the last year {last_year}")]
    YearsExhausted { record_year: i32, last_year: i32 },

    #[error("record year {record_year} precedes the first year {first_year}")]
    RecordBeforeSpan { record_year: i32, first_year: i32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    #[error("no layers to stack")]
    Empty,

    #[error("layer {layer} has {found} buckets, expected {expected}")]
    LengthMismatch { layer: usize, expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error(transparent)]
    Accumulate(#[from] AccumulateError),

    #[error(transparent)]
    Stack(#[from] StackError),

    #[error("molecule {name} has {atoms} atom(s); at least 2 are required")]
    InvalidAtomCount { name: String, atoms: u32 },

    #[error("molecule {name} has an invalid date {date}")]
    InvalidDate { name: String, date: String },

    #[error("catalog is empty")]
    EmptyCatalog,

    #[error("invalid year span {first}..={last}")]
    InvalidSpan { first: i32, last: i32 },

    #[error("stacked band for {category} is invalid: {reason}")]
    InvalidBand { category: &'static str, reason: &'static str },

    #[error("invalid color {0:?}; expected #RRGGBB")]
    InvalidColor(String),
}
