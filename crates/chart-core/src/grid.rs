// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

const EPS: f64 = 1e-9;
/// Upper bound on the ticks one call may produce.
pub const MAX_TICKS: usize = 1000;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Smallest "nice" integer step (1, 2, 5 x 10^k) giving at most `max_ticks` ticks over `span`.
pub fn nice_integer_step(span: f64, max_ticks: usize) -> f64 {
    let max_ticks = max_ticks.max(1) as f64;
    let raw = (span.abs() / max_ticks).max(1.0);
    let mag = 10f64.powf(raw.log10().floor());
    for m in [1.0, 2.0, 5.0, 10.0] {
        let step = m * mag;
        if step + EPS >= raw { return step; }
    }
    10.0 * mag
}

/// Integer-valued major ticks inside `[min, max]`, at most `max_ticks` of them.
/// With `prune`, ticks sitting on either end of the range are dropped.
pub fn integer_ticks(min: f64, max: f64, max_ticks: usize, prune: bool) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max < min { return Vec::new(); }
    let step = nice_integer_step(max - min, max_ticks);
    let first = (min / step).ceil() * step;
    let mut out = Vec::new();
    let mut v = first;
    while v <= max + EPS {
        out.push(v);
        v += step;
    }
    if prune {
        out.retain(|&t| (t - min).abs() > EPS && (t - max).abs() > EPS);
    }
    out
}

/// Minor ticks every `step` inside `[min, max]`, skipping positions already in `major`.
/// Ranges that would need more than [`MAX_TICKS`] positions get none.
pub fn minor_ticks(min: f64, max: f64, step: f64, major: &[f64]) -> Vec<f64> {
    if step <= 0.0 || !(min.is_finite() && max.is_finite()) || max < min { return Vec::new(); }
    if (max - min) / step >= MAX_TICKS as f64 { return Vec::new(); }
    let mut out = Vec::new();
    let mut v = (min / step).ceil() * step;
    while v <= max + EPS {
        if !major.iter().any(|m| (m - v).abs() < EPS) {
            out.push(v);
        }
        v += step;
    }
    out
}
