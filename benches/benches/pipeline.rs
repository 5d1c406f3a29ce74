use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use unicode_identifiers_benches::read_tables;
use unicode_identifiers_prepare::{collect_ranges, generate, output};
use unicode_identifiers_source::{entries, read_table};

const TEST_DATA: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../test_data");

const WARM_UP_TIME: u64 = 3;
const MEASUREMENT_TIME: u64 = 7;

fn pipeline(c: &mut Criterion)
{
    let mut group = c.benchmark_group("pipeline");

    group.warm_up_time(core::time::Duration::from_secs(WARM_UP_TIME));
    group.measurement_time(core::time::Duration::from_secs(MEASUREMENT_TIME));

    for (name, data) in read_tables(TEST_DATA) {
        let ranges = collect_ranges(entries(data.lines())).unwrap();

        group.bench_with_input(BenchmarkId::new("read", &name), data.as_str(), |b, data| {
            b.iter(|| read_table(black_box(data).as_bytes()).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("ranges", &name), data.as_str(), |b, data| {
            b.iter(|| collect_ranges(entries(black_box(data).lines())).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("render", &name), &ranges, |b, ranges| {
            b.iter(|| output::render(black_box(ranges)))
        });

        group.bench_with_input(BenchmarkId::new("generate", &name), data.as_str(), |b, data| {
            b.iter(|| generate(black_box(data).lines()).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, pipeline);
criterion_main!(benches);
