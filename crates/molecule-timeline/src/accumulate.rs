// File: crates/molecule-timeline/src/accumulate.rs
// Summary: Cumulative record counts per year via a single two-pointer merge.

use log::trace;

use crate::error::AccumulateError;
use crate::span::YearSpan;

/// Anything placed on the timeline by its year.
pub trait Dated {
    fn year(&self) -> i32;
}

impl Dated for i32 {
    fn year(&self) -> i32 { *self }
}

impl<T: Dated + ?Sized> Dated for &T {
    fn year(&self) -> i32 { (**self).year() }
}

/// For each year of `span`, the number of `records` dated in or before that year.
///
/// `records` must be sorted ascending by year; this is only checked in debug
/// builds. Years and records are each walked once: when the current year is
/// before the current record the running count is emitted and the year
/// advances, otherwise the record is counted and the next one is taken. Once
/// records run out the final count is repeated for the remaining years.
///
/// # Errors
/// - [`AccumulateError::RecordBeforeSpan`] if the first record precedes `span`.
/// - [`AccumulateError::YearsExhausted`] if a record falls after `span`.
pub fn accumulate_by_year<R: Dated>(span: YearSpan, records: &[R]) -> Result<Vec<usize>, AccumulateError> {
    debug_assert!(
        records.windows(2).all(|w| w[0].year() <= w[1].year()),
        "records must be sorted by year"
    );

    let mut out = Vec::with_capacity(span.len());
    let mut years = span.iter();
    let mut pending = records.iter();

    let Some(mut record) = pending.next() else {
        out.resize(span.len(), 0);
        return Ok(out);
    };
    if record.year() < span.first() {
        return Err(AccumulateError::RecordBeforeSpan { record_year: record.year(), first_year: span.first() });
    }

    // Non-empty by construction of YearSpan.
    let mut year = span.first();
    years.next();
    let mut counter = 0usize;
    loop {
        if year < record.year() {
            out.push(counter);
            year = years.next().ok_or(AccumulateError::YearsExhausted {
                record_year: record.year(),
                last_year: span.last(),
            })?;
            continue;
        }

        counter += 1;
        match pending.next() {
            Some(next) => record = next,
            None => {
                out.push(counter);
                out.extend(years.map(|_| counter));
                break;
            }
        }
    }
    trace!("accumulated {} records over {}..={}: {:?}", records.len(), span.first(), span.last(), out);
    Ok(out)
}
