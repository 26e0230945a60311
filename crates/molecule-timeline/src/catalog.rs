// File: crates/molecule-timeline/src/catalog.rs
// Summary: Immutable catalog of molecules with the date of their first laser cooling.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::accumulate::Dated;
use crate::category::Category;
use crate::error::TimelineError;
use crate::markup::render_subscripts;

/// When a molecule was first laser-cooled: a calendar date, or only a year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Occurrence {
    Date { year: i32, month: u32, day: u32 },
    Year(i32),
}

impl Occurrence {
    pub const fn date(year: i32, month: u32, day: u32) -> Self {
        Self::Date { year, month, day }
    }

    pub const fn year(&self) -> i32 {
        match *self {
            Self::Date { year, .. } | Self::Year(year) => year,
        }
    }

    /// Calendar date, if this is a full and valid date.
    pub fn to_date(&self) -> Option<NaiveDate> {
        match *self {
            Self::Date { year, month, day } => NaiveDate::from_ymd_opt(year, month, day),
            Self::Year(_) => None,
        }
    }

    // A bare year sorts before every dated entry of the same year.
    fn sort_key(&self) -> (i32, u32, u32) {
        match *self {
            Self::Date { year, month, day } => (year, month, day),
            Self::Year(year) => (year, 0, 0),
        }
    }
}

impl Ord for Occurrence {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for Occurrence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Occurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.to_date()) {
            (_, Some(date)) => write!(f, "{}", date.format("%Y-%m-%d")),
            (Self::Date { year, month, day }, None) => write!(f, "{year:04}-{month:02}-{day:02}"),
            (Self::Year(year), None) => write!(f, "{year}"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoleculeRecord {
    /// Display label; `$_n$` marks a subscript.
    pub name: &'static str,
    pub occurrence: Occurrence,
    pub atom_count: u32,
}

impl MoleculeRecord {
    pub const fn new(name: &'static str, occurrence: Occurrence, atom_count: u32) -> Self {
        Self { name, occurrence, atom_count }
    }

    pub fn category(&self) -> Result<Category, TimelineError> {
        Category::from_atom_count(self.atom_count).ok_or_else(|| TimelineError::InvalidAtomCount {
            name: self.name.to_string(),
            atoms: self.atom_count,
        })
    }

    /// Name with subscript markup rendered as Unicode.
    pub fn display_name(&self) -> String {
        render_subscripts(self.name)
    }
}

impl Dated for MoleculeRecord {
    fn year(&self) -> i32 {
        self.occurrence.year()
    }
}

/// Molecules in the order they were entered, not chronologically.
pub static MOLECULES: [MoleculeRecord; 12] = [
    MoleculeRecord::new("SrF", Occurrence::date(2010, 9, 19), 2),
    MoleculeRecord::new("YO", Occurrence::date(2013, 4, 1), 2),
    MoleculeRecord::new("CaF", Occurrence::date(2014, 5, 16), 2),
    MoleculeRecord::new("YbF", Occurrence::date(2018, 3, 22), 2),
    MoleculeRecord::new("BaH", Occurrence::date(2020, 8, 18), 2),
    MoleculeRecord::new("CaH", Occurrence::date(2022, 8, 9), 2),
    MoleculeRecord::new("BaF", Occurrence::date(2022, 3, 14), 2),
    MoleculeRecord::new("CaD", Occurrence::date(2024, 8, 5), 2),
    MoleculeRecord::new("SrOH", Occurrence::date(2017, 4, 24), 3),
    MoleculeRecord::new("YbOH", Occurrence::date(2020, 2, 19), 3),
    MoleculeRecord::new("CaOH", Occurrence::date(2020, 3, 31), 3),
    MoleculeRecord::new("CaOCH$_3$", Occurrence::date(2020, 9, 11), 6),
];

/// Read-only view over a set of molecule records.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Cow<'static, [MoleculeRecord]>,
}

impl Default for Catalog {
    fn default() -> Self { Self::builtin() }
}

impl Catalog {
    /// The built-in list of laser-cooled molecules.
    pub fn builtin() -> Self {
        Self { records: Cow::Borrowed(&MOLECULES) }
    }

    pub fn from_records(records: Vec<MoleculeRecord>) -> Self {
        Self { records: Cow::Owned(records) }
    }

    pub fn records(&self) -> &[MoleculeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize { self.records.len() }

    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    /// Check every record has a real date and a known category.
    pub fn validate(&self) -> Result<(), TimelineError> {
        for r in self.records.iter() {
            r.category()?;
            if matches!(r.occurrence, Occurrence::Date { .. }) && r.occurrence.to_date().is_none() {
                return Err(TimelineError::InvalidDate { name: r.name.to_string(), date: r.occurrence.to_string() });
            }
        }
        Ok(())
    }

    /// Records sorted by occurrence; ties keep catalog order.
    pub fn chronological(&self) -> Vec<&MoleculeRecord> {
        let mut sorted: Vec<&MoleculeRecord> = self.records.iter().collect();
        sorted.sort_by_key(|r| r.occurrence);
        sorted
    }

    /// Chronological records of one category. Records with an invalid atom count are skipped.
    pub fn by_category(&self, category: Category) -> Vec<&MoleculeRecord> {
        self.chronological()
            .into_iter()
            .filter(|r| r.category().ok() == Some(category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_year_sorts_before_dates_in_that_year() {
        assert!(Occurrence::Year(2020) < Occurrence::date(2020, 1, 1));
        assert!(Occurrence::date(2019, 12, 31) < Occurrence::Year(2020));
    }

    #[test]
    fn occurrence_formats() {
        assert_eq!(Occurrence::date(2010, 9, 19).to_string(), "2010-09-19");
        assert_eq!(Occurrence::Year(2013).to_string(), "2013");
        assert_eq!(Occurrence::date(2021, 2, 30).to_string(), "2021-02-30");
    }

    #[test]
    fn invalid_date_fails_validation() {
        let c = Catalog::from_records(vec![MoleculeRecord::new("XY", Occurrence::date(2021, 2, 30), 2)]);
        assert!(matches!(c.validate(), Err(TimelineError::InvalidDate { .. })));
    }
}
