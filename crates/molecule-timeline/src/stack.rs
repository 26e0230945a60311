// File: crates/molecule-timeline/src/stack.rs
// Summary: Per-category cumulative counts and their stacked (prefix-summed) totals.

use log::debug;

use crate::accumulate::accumulate_by_year;
use crate::catalog::Catalog;
use crate::category::Category;
use crate::error::{StackError, TimelineError};
use crate::span::YearSpan;

/// Stack equal-length layers bottom to top: output `k` is the element-wise
/// sum of layers `0..=k`.
pub fn stack_cumulative(layers: &[Vec<usize>]) -> Result<Vec<Vec<usize>>, StackError> {
    let Some(first) = layers.first() else { return Err(StackError::Empty) };
    let expected = first.len();
    if let Some((layer, l)) = layers.iter().enumerate().find(|(_, l)| l.len() != expected) {
        return Err(StackError::LengthMismatch { layer, expected, found: l.len() });
    }

    let mut out: Vec<Vec<usize>> = Vec::with_capacity(layers.len());
    for layer in layers {
        let stacked = match out.last() {
            Some(below) => below.iter().zip(layer).map(|(a, b)| a + b).collect(),
            None => layer.clone(),
        };
        out.push(stacked);
    }
    Ok(out)
}

/// Cumulative counts of one catalog over one year span, split by category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryCounts {
    span: YearSpan,
    layers: Vec<Vec<usize>>,
    stacked: Vec<Vec<usize>>,
}

impl CategoryCounts {
    /// Accumulate each category separately, then stack them in [`Category::ALL`] order.
    pub fn from_catalog(catalog: &Catalog, span: YearSpan) -> Result<Self, TimelineError> {
        catalog.validate()?;
        let layers = Category::ALL
            .iter()
            .map(|&c| {
                let records = catalog.by_category(c);
                debug!("category {c}: {} record(s)", records.len());
                accumulate_by_year(span, &records)
            })
            .collect::<Result<Vec<_>, _>>()?;
        let stacked = stack_cumulative(&layers)?;
        Ok(Self { span, layers, stacked })
    }

    pub fn span(&self) -> YearSpan { self.span }

    /// Cumulative count of `category` alone.
    pub fn layer(&self, category: Category) -> &[usize] {
        &self.layers[category.index()]
    }

    /// Cumulative count of `category` and every category stacked below it.
    pub fn stacked(&self, category: Category) -> &[usize] {
        &self.stacked[category.index()]
    }

    /// Stack height directly below `category`; zero for the bottom layer.
    pub fn below(&self, category: Category) -> Vec<usize> {
        match category.index() {
            0 => vec![0; self.span.len()],
            i => self.stacked[i - 1].clone(),
        }
    }

    /// Cumulative count over all categories.
    pub fn total(&self) -> &[usize] {
        self.stacked.last().map(Vec::as_slice).unwrap_or(&[])
    }
}
