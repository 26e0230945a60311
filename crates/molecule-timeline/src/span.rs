// File: crates/molecule-timeline/src/span.rs
// Summary: Contiguous, ascending ranges of calendar years.

use std::ops::RangeInclusive;

use crate::accumulate::Dated;
use crate::error::TimelineError;

/// Inclusive run of years `first..=last`, step 1. Never empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct YearSpan {
    first: i32,
    last: i32,
}

impl YearSpan {
    pub fn new(first: i32, last: i32) -> Result<Self, TimelineError> {
        if last < first {
            return Err(TimelineError::InvalidSpan { first, last });
        }
        Ok(Self { first, last })
    }

    /// One year of padding on each side of the records: `min - 1 ..= max + 1`.
    pub fn padded<R: Dated>(records: &[R]) -> Result<Self, TimelineError> {
        let (min, max) = records
            .iter()
            .map(Dated::year)
            .fold(None, |acc: Option<(i32, i32)>, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
            .ok_or(TimelineError::EmptyCatalog)?;
        match (min.checked_sub(1), max.checked_add(1)) {
            (Some(first), Some(last)) => Self::new(first, last),
            _ => Err(TimelineError::InvalidSpan { first: min, last: max }),
        }
    }

    pub const fn first(&self) -> i32 { self.first }

    pub const fn last(&self) -> i32 { self.last }

    /// Number of years; widened so any valid pair of `i32` bounds fits.
    pub const fn len(&self) -> usize { (self.last as i64 - self.first as i64) as usize + 1 }

    pub const fn is_empty(&self) -> bool { false }

    pub fn iter(&self) -> RangeInclusive<i32> {
        self.first..=self.last
    }
}

impl IntoIterator for YearSpan {
    type Item = i32;
    type IntoIter = RangeInclusive<i32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
