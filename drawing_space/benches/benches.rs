use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use drawing_space::{
    bounding_box::BoundingBox,
    core::math::{point3, Axis, Point3},
    sort::{sort_entities, sort_points, SortKey, SortParameter},
};

/// Deterministic scatter of points, coordinates in [-1000, 1000).
fn scattered_points(count: usize) -> Vec<Point3<f64>> {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state % 2_000_000) as f64 / 1000.0 - 1000.0
    };
    (0..count).map(|_| point3(next(), next(), next())).collect()
}

fn scattered_boxes(count: usize) -> Vec<(usize, BoundingBox<f64>)> {
    let corners = scattered_points(count * 2);
    corners
        .chunks_exact(2)
        .enumerate()
        .map(|(i, c)| (i, BoundingBox::new(c[0], c[1])))
        .collect()
}

fn sort_points_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_points");
    for &count in &[25, 250, 2500, 25000] {
        let points = scattered_points(count);
        group.bench_with_input(BenchmarkId::new("x_axis", count), &points, |b, points| {
            b.iter(|| sort_points(black_box(points), Axis::X))
        });
    }
    group.finish();
}

fn sort_entities_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_entities");
    for &count in &[25, 250, 2500, 25000] {
        let entities = scattered_boxes(count);
        for parameter in [SortParameter::MinPoint, SortParameter::CenterPoint] {
            let key = SortKey::new(Axis::Y, parameter);
            group.bench_with_input(
                BenchmarkId::new(key.to_string(), count),
                &entities,
                |b, entities| b.iter(|| sort_entities(black_box(entities), key)),
            );
        }
    }
    group.finish();
}

criterion_group!(sorting, sort_points_group, sort_entities_group);
criterion_main!(sorting);
