// File: crates/molecule-timeline/src/lib.rs
// Summary: Domain entry point; catalog of laser-cooled molecules and the statistics behind the timeline chart.

pub mod accumulate;
pub mod catalog;
pub mod category;
pub mod error;
pub mod markup;
pub mod plot;
pub mod span;
pub mod stack;

pub use accumulate::{accumulate_by_year, Dated};
pub use catalog::{Catalog, MoleculeRecord, Occurrence, MOLECULES};
pub use category::Category;
pub use error::{AccumulateError, StackError, TimelineError};
pub use plot::{build_chart, TimelineStyle};
pub use span::YearSpan;
pub use stack::{stack_cumulative, CategoryCounts};
