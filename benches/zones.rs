use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use brillouin::{BrillouinZones2D, BrillouinZones3D, Config2D, Config3D, LatticeKind2, LatticeKind3};

fn benchmark_zones_3d(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones_3d");
    group.sample_size(10);
    for kind in LatticeKind3::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind.name()), &kind, |b, &kind| {
            b.iter(|| {
                let mut bz = BrillouinZones3D::new(Config3D::new(kind)).unwrap();
                bz.calculate().unwrap();
                black_box(bz.count_zones())
            })
        });
    }
    group.finish();
}

fn benchmark_zones_2d(c: &mut Criterion) {
    let mut group = c.benchmark_group("zones_2d");
    group.sample_size(10);
    for zones in [3usize, 6, 12] {
        group.bench_with_input(BenchmarkId::new("square", zones), &zones, |b, &zones| {
            b.iter(|| {
                let cfg = Config2D::new(LatticeKind2::Square).with_zone_count(zones);
                let mut bz = BrillouinZones2D::new(cfg).unwrap();
                bz.calculate().unwrap();
                black_box(bz.count_zones())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_zones_3d, benchmark_zones_2d);
criterion_main!(benches);
