// File: crates/chart-core/tests/autoscale.rs
// Purpose: Validate autoscale over step lines and stacked areas.

use chart_core::{Chart, Series, SeriesType, ViewState};

#[test]
fn autoscale_includes_band_lower_bounds() {
    let mut chart = Chart::new();

    chart.add_series(Series::with_data(SeriesType::Step, vec![(2010.0, 1.0), (2015.0, 3.0)]));
    chart.add_series(
        Series::try_step_area(vec![(2008.0, 2.0), (2012.0, 6.0)], vec![-1.0, 0.0]).expect("valid band"),
    );

    chart.autoscale_axes(0.0);

    // X spans 2008..2015 across both series
    assert!(chart.x_axis.min <= 2008.0 + 1e-9);
    assert!(chart.x_axis.max >= 2015.0 - 1e-9);

    // Y min comes from the band's lower bound, Y max from the band's top
    assert!(chart.y_axis.min <= -1.0 + 1e-9);
    assert!(chart.y_axis.max >= 6.0 - 1e-9);
}

#[test]
fn autoscale_margin_pads_y_only() {
    let mut chart = Chart::new();
    chart.add_series(Series::with_data(SeriesType::Line, vec![(0.0, 0.0), (10.0, 10.0)]));
    chart.autoscale_axes(0.1);
    assert_eq!(chart.x_axis.min, 0.0);
    assert_eq!(chart.x_axis.max, 10.0);
    assert!((chart.y_axis.min + 1.0).abs() < 1e-9);
    assert!((chart.y_axis.max - 11.0).abs() < 1e-9);
}

#[test]
fn empty_chart_falls_back_to_unit_view() {
    let chart = Chart::new();
    let v = ViewState::from_chart(&chart);
    assert_eq!((v.x_min, v.x_max, v.y_min, v.y_max), (0.0, 1.0, 0.0, 1.0));
}
