// File: crates/chart-core/tests/view.rs
// Purpose: Pan/zoom keep spans and anchor points consistent.

use chart_core::types::Insets;
use chart_core::ViewState;

fn view() -> ViewState {
    ViewState { x_min: 2009.0, x_max: 2025.0, y_min: 0.0, y_max: 12.2 }
}

#[test]
fn pan_preserves_spans() {
    let insets = Insets::new(0, 0, 0, 0);
    let mut v = view();
    v.pan_by_pixels(100.0, -50.0, 800, 400, &insets);
    assert!(((v.x_max - v.x_min) - 16.0).abs() < 1e-9);
    assert!(((v.y_max - v.y_min) - 12.2).abs() < 1e-9);
    // Dragging right moves the window to earlier years
    assert!(v.x_min < 2009.0);
}

#[test]
fn zoom_keeps_cursor_anchor() {
    let insets = Insets::new(0, 0, 0, 0);
    let mut v = view();
    // Cursor at the centre of an 800x400 plot
    v.zoom_at_pixel(0.5, 400.0, 200.0, 800, 400, &insets);
    assert!(((v.x_max - v.x_min) - 8.0).abs() < 1e-9);
    assert!((((v.x_min + v.x_max) * 0.5) - 2017.0).abs() < 1e-9);
    assert!((((v.y_min + v.y_max) * 0.5) - 6.1).abs() < 1e-9);
}

#[test]
fn round_trip_through_chart_axes() {
    let mut chart = chart_core::Chart::new();
    let v = view();
    v.apply_to_chart(&mut chart);
    assert_eq!(ViewState::from_axes(&chart), v);
}
