use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kdplane::test_utils::{build_populated_tree_and_query_points, rand_rect, seeded_rng};
use kdplane::{PointSet, Rect};

const QUERY_RECTS_PER_LOOP: usize = 100;

pub fn range(c: &mut Criterion) {
    let mut group = c.benchmark_group("Query Range");
    group.throughput(Throughput::Elements(QUERY_RECTS_PER_LOOP as u64));

    let mut rng = seeded_rng(8);
    // small windows, around 1% of the domain each
    let query_rects: Vec<Rect<f64>> = (0..QUERY_RECTS_PER_LOOP)
        .map(|_| {
            let corner = rand_rect(&mut rng, &Rect::new(0.0, 0.0, 0.9, 0.9));
            Rect::new(corner.xmin(), corner.ymin(), corner.xmin() + 0.1, corner.ymin() + 0.1)
        })
        .collect();

    for size in [1_000, 10_000, 100_000, 1_000_000] {
        let (tree, _) = build_populated_tree_and_query_points::<f64, u32>(size, 0, 6);

        group.bench_with_input(BenchmarkId::new("kdtree", size), &size, |b, _| {
            b.iter(|| {
                query_rects.iter().for_each(|rect| {
                    black_box(tree.range(black_box(rect)));
                })
            });
        });

        if size <= 10_000 {
            let set: PointSet<f64> = tree.iter().collect();
            group.bench_with_input(BenchmarkId::new("brute force", size), &size, |b, _| {
                b.iter(|| {
                    query_rects.iter().for_each(|rect| {
                        black_box(set.range(black_box(rect)));
                    })
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, range);
criterion_main!(benches);
