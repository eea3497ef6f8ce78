use criterion::{black_box, criterion_group, criterion_main, Criterion};
use brillouin::bragg::bragg_planes;
use brillouin::shell::generate_shells;
use brillouin::{LatticeKind3, Point3};

fn benchmark_shells(c: &mut Criterion) {
    let mut group = c.benchmark_group("shells");
    for kind in LatticeKind3::ALL {
        let b = kind.reciprocal_vectors(1.0).unwrap();
        group.bench_function(kind.name(), |bench| {
            bench.iter(|| {
                let shells: Vec<_> = generate_shells(black_box(&b), 4, Point3::origin(), 0.01).collect();
                black_box(shells.len())
            })
        });
    }
    group.finish();
}

fn benchmark_bragg_planes(c: &mut Criterion) {
    let b = LatticeKind3::FaceCentered.reciprocal_vectors(1.0).unwrap();
    let shells: Vec<_> = generate_shells(&b, 4, Point3::origin(), 0.01).take(6).collect();

    c.bench_function("bragg_planes_fcc_5_shells", |bench| {
        bench.iter(|| black_box(bragg_planes(black_box(&shells[1..])).unwrap()))
    });
}

criterion_group!(benches, benchmark_shells, benchmark_bragg_planes);
criterion_main!(benches);
