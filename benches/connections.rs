use constel::connections;
use constel::field::StarField;
use constel::Vec2;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A field sized so the pairwise pass sees roughly `count` stars.
fn field_with(count: usize) -> StarField {
    let mut rng = StdRng::seed_from_u64(7);
    let width = 1920.0;
    let height = (count as f32 * 15_000.0 / width).ceil();
    let mut field = StarField::new();
    field.regenerate(width, height, &mut rng);
    field
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("connections_rebuild");

    for count in [100, 250, 550] {
        let field = field_with(count);
        let pointer = Vec2::new(960.0, 540.0);
        let mut out = Vec::new();

        group.bench_with_input(
            BenchmarkId::from_parameter(field.len()),
            &field,
            |b, field| {
                b.iter(|| {
                    connections::rebuild(black_box(field.stars()), black_box(pointer), &mut out);
                    black_box(out.len())
                })
            },
        );
    }

    group.finish();
}

fn bench_twinkle(c: &mut Criterion) {
    let mut field = field_with(550);
    let mut now_ms = 0.0;

    c.bench_function("twinkle_550", |b| {
        b.iter(|| {
            now_ms += 16.7;
            field.twinkle(black_box(now_ms));
        })
    });
}

criterion_group!(benches, bench_rebuild, bench_twinkle);
criterion_main!(benches);
