use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shape_warp_mesh::{
    parse_shapes, preprocess_shapes, trace_path, ArcLengthIndex, BlendOptions, GridSize,
    MeshBlender, PreprocessOptions,
};
use std::hint::black_box;

const TOP_PATH: &str = "M 835.96,162.42 C 597.61,-50.29 240.85,-53.15 1.37,162.42";
const BOTTOM_PATH: &str = "M 73.32,242.27 C 283.84,56.41 576.84,75.5 764.01,242.27";

fn bench_trace(c: &mut Criterion) {
    let mixed = "M10,100 A400,120 0 0 1 790,100 L790,300 Q400,200 10,300 T10,100 Z";

    c.bench_function("trace_cubic_profile", |b| {
        b.iter(|| {
            let points = trace_path(black_box(TOP_PATH), 50).expect("Pfad ungültig");
            black_box(points.len())
        })
    });

    c.bench_function("trace_mixed_outline", |b| {
        b.iter(|| {
            let points = trace_path(black_box(mixed), 50).expect("Pfad ungültig");
            black_box(points.len())
        })
    });
}

fn bench_arc_length_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc_length_index");
    let polyline = trace_path(TOP_PATH, 50).expect("Pfad ungültig");

    for &samples in &[500usize, 2000usize] {
        group.bench_with_input(BenchmarkId::new("build", samples), &samples, |b, &n| {
            b.iter(|| black_box(ArcLengthIndex::new(black_box(&polyline), n).total_length()))
        });
    }

    let index = ArcLengthIndex::new(&polyline, 2000);
    group.bench_function("point_at_batch", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for i in 0..=1024 {
                sum += index.point_at(black_box(i as f64 / 1024.0)).x;
            }
            black_box(sum)
        })
    });

    group.finish();
}

fn bench_mesh_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("mesh_generation");
    let top = ArcLengthIndex::new(&trace_path(TOP_PATH, 50).expect("Pfad ungültig"), 2000);
    let bottom = ArcLengthIndex::new(&trace_path(BOTTOM_PATH, 50).expect("Pfad ungültig"), 2000);
    let options = BlendOptions {
        top_reversed: true,
        bottom_reversed: false,
    };

    for grid in [GridSize::new(50, 20), GridSize::new(120, 50)] {
        let blender = MeshBlender::new(&top, &bottom, options, grid);
        group.bench_with_input(
            BenchmarkId::new("blend", format!("{}x{}", grid.cols, grid.rows)),
            &blender,
            |b, blender| b.iter(|| black_box(blender.generate_mesh().row_count())),
        );
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let json = include_str!("../tests/fixtures/shapes.json");
    let options = PreprocessOptions::default();

    c.bench_function("preprocess_fixture_batch", |b| {
        b.iter(|| {
            let shapes = parse_shapes(black_box(json)).expect("Fixture ungültig");
            let processed = preprocess_shapes(shapes, &options).expect("Batch fehlgeschlagen");
            black_box(processed.len())
        })
    });
}

criterion_group!(
    core_benches,
    bench_trace,
    bench_arc_length_index,
    bench_mesh_generation,
    bench_batch
);
criterion_main!(core_benches);
