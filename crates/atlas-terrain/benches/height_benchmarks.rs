use atlas_terrain::*;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn bench_height_single(c: &mut Criterion) {
    c.bench_function("height_single", |b| {
        b.iter(|| black_box(height(black_box(1234.5), black_box(-678.9), black_box(42.0))))
    });
}

fn bench_height_breakdown(c: &mut Criterion) {
    c.bench_function("height_breakdown", |b| {
        b.iter(|| black_box(height_breakdown(black_box(1234.5), black_box(-678.9), 42.0)))
    });
}

fn bench_sample_heights(c: &mut Criterion) {
    let coord = ChunkCoord::new(3, -2);
    c.bench_function("sample_heights_chunk", |b| {
        b.iter(|| {
            black_box(sample_heights(
                black_box(coord),
                42.0,
                constants::CHUNK_RESOLUTION,
                constants::CHUNK_SIZE,
            ))
        })
    });
}

fn bench_generate_chunk(c: &mut Criterion) {
    c.bench_function("generate_chunk", |b| {
        b.iter(|| black_box(generate_chunk(black_box(0), black_box(0), 42.0)))
    });
}

fn bench_neighborhood_parallel(c: &mut Criterion) {
    let coords: Vec<_> = ChunkCoord::new(10, 10).neighborhood(1).collect();
    let workers = default_worker_count();
    c.bench_function("generate_neighborhood_parallel", |b| {
        b.iter(|| black_box(generate_chunks_parallel(42.0, &coords, workers)))
    });
}

criterion_group!(
    benches,
    bench_height_single,
    bench_height_breakdown,
    bench_sample_heights,
    bench_generate_chunk,
    bench_neighborhood_parallel,
);
criterion_main!(benches);
