use anyhow::Result;
use chart_core::{Axis, Chart, RenderOptions, Series, SeriesType};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_step_chart(n: usize) -> Chart {
    let mut ch = Chart::new();
    let mut data = Vec::with_capacity(n);
    let mut y = 0.0;
    for i in 0..n {
        if i % 3 == 0 { y += 1.0; }
        data.push((i as f64, y));
    }
    ch.x_axis = Axis::new("X", 0.0, (n - 1) as f64);
    ch.y_axis = Axis::new("Y", 0.0, y + 1.0);
    let lower = vec![0.0; data.len()];
    ch.add_series(Series::try_step_area(data.clone(), lower).expect("band"));
    ch.add_series(Series::with_data(SeriesType::Step, data));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &n in &[1_000usize, 10_000usize] {
        group.bench_function(format!("step_{n}"), |b| {
            let ch = build_step_chart(n);
            let opts = RenderOptions { width: 800, height: 500, draw_labels: false, ..RenderOptions::default() };
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_png_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
