use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use pitchview_geometry::{estimate_homography, project_points, Homography, Point2d};

fn bench_estimate(c: &mut Criterion) {
    let src = [[102.0, 215.0], [810.0, 188.0], [905.0, 642.0], [48.0, 701.0]].map(Point2d::from);
    let dst = [[0.0, 0.0], [105.0, 0.0], [105.0, 68.0], [0.0, 68.0]].map(Point2d::from);

    c.bench_function("estimate_homography", |b| {
        b.iter(|| estimate_homography(black_box(&src), black_box(&dst)))
    });
}

fn bench_project(c: &mut Criterion) {
    let mut group = c.benchmark_group("project_points");
    let homo = Homography::from_array([[0.12, 0.01, -9.5], [-0.004, 0.18, -30.0], [0.0001, 0.0004, 1.0]]);

    for num_points in [22, 1000, 100000].iter() {
        group.throughput(criterion::Throughput::Elements(*num_points as u64));
        let src_points = (0..*num_points)
            .map(|i| Point2d::new((i % 1920) as f64, (i / 1920) as f64))
            .collect::<Vec<_>>();
        let mut dst_points = vec![Point2d::default(); src_points.len()];

        group.bench_with_input(
            BenchmarkId::new("homography", num_points),
            &src_points,
            |b, src| b.iter(|| project_points(black_box(&homo), black_box(src), &mut dst_points)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_estimate, bench_project);
criterion_main!(benches);
