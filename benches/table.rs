use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use tabler::{render::TableRenderConfig, Table};

// Helper function to create test tables of different patterns
fn create_test_table(width: usize, height: usize, pattern: &str) -> Table<u32> {
    match pattern {
        "full" => Table::from_fn(width, height, |x, y| Some((x + y) as u32)),
        "striped" => Table::from_fn(width, height, |_, y| {
            if y % 2 == 0 {
                Some(1)
            } else {
                None
            }
        }),
        "sparse" => Table::from_fn(width, height, |x, y| {
            if x % 10 == 0 && y % 10 == 0 {
                Some(1)
            } else {
                None
            }
        }),
        _ => Table::new(width, height), // Default to all absent
    }
}

// Benchmark construction at different table sizes
fn bench_table_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_sizes");
    let sizes = [(10, 10), (100, 100), (500, 500), (1000, 1000)];

    for size in sizes.iter() {
        let (width, height) = *size;

        group.bench_with_input(
            BenchmarkId::new("from_fn", format!("{}x{}", width, height)),
            size,
            |b, &(width, height)| {
                b.iter(|| {
                    black_box(create_test_table(width, height, "full"));
                });
            },
        );
    }
    group.finish();
}

// Benchmark bulk operations on a fixed-size table
fn bench_bulk_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_ops");
    let table = create_test_table(500, 500, "full");

    group.bench_with_input(BenchmarkId::new("op", "map"), &table, |b, table| {
        b.iter(|| {
            black_box(table.map(|value, _, _, _| value.map(|n| n * 2)));
        });
    });

    group.bench_with_input(BenchmarkId::new("op", "reduce"), &table, |b, table| {
        b.iter(|| {
            black_box(table.reduce(
                |acc, value, _, _, _| acc + u64::from(value.copied().unwrap_or(0)),
                0u64,
            ));
        });
    });

    group.bench_with_input(BenchmarkId::new("op", "fill_row"), &table, |b, table| {
        b.iter(|| {
            let mut table = table.clone();
            table.set(None, 250, Some(7)).unwrap();
            black_box(table);
        });
    });
    group.finish();
}

// Benchmark geometric transforms
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let table = create_test_table(500, 500, "full");

    let transforms: Vec<(&str, fn(&Table<u32>) -> Table<u32>)> = vec![
        ("clockwise", Table::clockwise),
        ("counterclockwise", Table::counterclockwise),
        ("flip_horizontal", Table::flip_horizontal),
        ("flip_vertical", Table::flip_vertical),
    ];

    for (name, transform) in transforms {
        group.bench_with_input(BenchmarkId::new("transform", name), &table, |b, table| {
            b.iter(|| {
                black_box(transform(table));
            });
        });
    }
    group.finish();
}

// Benchmark rendering different cell patterns
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let patterns = ["full", "striped", "sparse"];

    for pattern in patterns.iter() {
        let table = create_test_table(100, 100, pattern);
        let config = TableRenderConfig::default();

        group.bench_with_input(BenchmarkId::new("pattern", pattern), &table, |b, table| {
            b.iter(|| {
                black_box(table.render_with_config(&config));
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20); // Reduced sample size for faster runs
    targets = bench_table_sizes, bench_bulk_ops, bench_transforms, bench_render
}
criterion_main!(benches);
