use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, black_box};
use molecule_timeline::{accumulate_by_year, YearSpan};

fn gen_years(n: usize, first: i32, years: i32) -> Vec<i32> {
    // Evenly spread, already sorted
    (0..n).map(|i| first + ((i as i64 * years as i64) / n as i64) as i32).collect()
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate_by_year");
    let span = YearSpan::new(1900, 2100).expect("span");
    for &n in &[1_000usize, 100_000usize] {
        let records = gen_years(n, 1900, 200);
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &records, |b, r| {
            b.iter(|| black_box(accumulate_by_year(span, r)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_accumulate);
criterion_main!(benches);
