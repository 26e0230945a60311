// File: crates/molecule-timeline/tests/stack.rs
// Purpose: Per-category counts stacked over the built-in catalog.

use molecule_timeline::{accumulate_by_year, Catalog, Category, CategoryCounts, TimelineError, YearSpan};

fn builtin_counts() -> CategoryCounts {
    let catalog = Catalog::builtin();
    let span = YearSpan::padded(&catalog.chronological()).unwrap();
    CategoryCounts::from_catalog(&catalog, span).expect("counts")
}

#[test]
fn layers_per_category() {
    let c = builtin_counts();
    assert_eq!(c.layer(Category::Diatomic), &[0, 1, 1, 1, 2, 3, 3, 3, 3, 4, 4, 5, 5, 7, 7, 8, 8]);
    assert_eq!(c.layer(Category::Triatomic), &[0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 3, 3, 3, 3, 3, 3]);
    assert_eq!(c.layer(Category::Polyatomic), &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1]);
}

#[test]
fn stacks_are_prefix_sums() {
    let c = builtin_counts();
    for i in 0..c.span().len() {
        let d = c.layer(Category::Diatomic)[i];
        let t = c.layer(Category::Triatomic)[i];
        let p = c.layer(Category::Polyatomic)[i];
        assert_eq!(c.stacked(Category::Diatomic)[i], d);
        assert_eq!(c.stacked(Category::Triatomic)[i], d + t);
        assert_eq!(c.stacked(Category::Polyatomic)[i], d + t + p);
    }
    assert_eq!(c.below(Category::Diatomic), vec![0; c.span().len()]);
    assert_eq!(c.below(Category::Polyatomic), c.stacked(Category::Triatomic));
}

#[test]
fn top_of_stack_matches_overall_accumulation() {
    let catalog = Catalog::builtin();
    let c = builtin_counts();
    let overall = accumulate_by_year(c.span(), &catalog.chronological()).unwrap();
    assert_eq!(c.total(), overall.as_slice());
}

#[test]
fn span_too_short_is_an_error() {
    let catalog = Catalog::builtin();
    let span = YearSpan::new(2009, 2020).unwrap();
    let err = CategoryCounts::from_catalog(&catalog, span).unwrap_err();
    assert!(matches!(err, TimelineError::Accumulate(_)), "got {err:?}");
}
