// File: crates/chart-core/tests/smoke.rs
// Purpose: Basic end-to-end render smoke tests writing PNG and SVG.

use chart_core::{Annotation, Axis, Chart, RenderOptions, Series, SeriesType};

fn sample_chart() -> Chart {
    let mut chart = Chart::new();
    chart.x_axis = Axis::new("Year", 2009.0, 2016.0).with_integer_ticks(8, true);
    chart.y_axis = Axis::new("Count", 0.0, 4.2).with_integer_ticks(6, false).with_minor_step(1.0).with_grid(true);
    chart.add_series(
        Series::try_step_area(
            vec![(2009.0, 0.0), (2010.0, 1.0), (2013.0, 2.0), (2014.0, 3.0), (2016.0, 3.0)],
            vec![0.0; 5],
        )
        .expect("band")
        .with_label("diatomics"),
    );
    chart.add_series(Series::with_data(
        SeriesType::Step,
        vec![(2009.0, 0.0), (2010.0, 1.0), (2013.0, 2.0), (2014.0, 3.0), (2016.0, 3.0)],
    ));
    chart.add_annotation(Annotation::new(2010.1, 0.5, "SrF"));
    chart
}

#[test]
fn render_smoke_png() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/smoke.png");

    chart.render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = chart.render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn render_smoke_svg() {
    let chart = sample_chart();
    let opts = RenderOptions::default();
    let bytes = chart.render_to_svg_bytes(&opts).expect("render svg");
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("<svg"), "should be an SVG document");

    let out = std::path::PathBuf::from("target/test_out/smoke.svg");
    chart.render_to_svg(&opts, &out).expect("write svg");
    assert!(std::fs::metadata(&out).expect("svg exists").len() > 0);
}

#[test]
fn legend_lists_labelled_series_only() {
    let chart = sample_chart();
    let entries = chart.legend_entries(&RenderOptions::default().theme);
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].label, "diatomics");
}

#[test]
fn write_into_missing_directory_fails() {
    let chart = sample_chart();
    // A path whose parent is an existing regular file cannot be created
    let blocker = std::path::PathBuf::from("target/test_out/blocker.txt");
    std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
    std::fs::write(&blocker, b"x").unwrap();
    let err = chart.render_to_svg(&RenderOptions::default(), blocker.join("chart.svg"));
    assert!(err.is_err());
}
