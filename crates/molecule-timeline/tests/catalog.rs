// File: crates/molecule-timeline/tests/catalog.rs
// Purpose: Built-in catalog contents and ordering.

use molecule_timeline::{Catalog, Category, MoleculeRecord, Occurrence, TimelineError, MOLECULES};

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.len(), 12);
    catalog.validate().expect("built-in records are valid");
}

#[test]
fn chronological_is_sorted_and_complete() {
    let catalog = Catalog::builtin();
    let sorted = catalog.chronological();
    assert_eq!(sorted.len(), MOLECULES.len());
    assert!(sorted.windows(2).all(|w| w[0].occurrence <= w[1].occurrence));
    let names: Vec<&str> = sorted.iter().map(|r| r.name).collect();
    assert_eq!(
        names,
        vec!["SrF", "YO", "CaF", "SrOH", "YbF", "YbOH", "CaOH", "BaH", "CaOCH$_3$", "BaF", "CaH", "CaD"]
    );
}

#[test]
fn categories_split_eight_three_one() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.by_category(Category::Diatomic).len(), 8);
    assert_eq!(catalog.by_category(Category::Triatomic).len(), 3);
    assert_eq!(catalog.by_category(Category::Polyatomic).len(), 1);
}

#[test]
fn display_name_renders_subscripts() {
    let poly = Catalog::builtin().by_category(Category::Polyatomic)[0].display_name();
    assert_eq!(poly, "CaOCH₃");
}

#[test]
fn monatomic_record_is_rejected() {
    let catalog = Catalog::from_records(vec![MoleculeRecord::new("Sr", Occurrence::Year(2008), 1)]);
    assert_eq!(
        catalog.validate(),
        Err(TimelineError::InvalidAtomCount { name: "Sr".to_string(), atoms: 1 })
    );
}

#[test]
fn bare_years_mix_with_dates() {
    let catalog = Catalog::from_records(vec![
        MoleculeRecord::new("B", Occurrence::date(2015, 6, 1), 2),
        MoleculeRecord::new("A", Occurrence::Year(2015), 3),
        MoleculeRecord::new("C", Occurrence::Year(2012), 2),
    ]);
    let names: Vec<&str> = catalog.chronological().iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["C", "A", "B"]);
}
