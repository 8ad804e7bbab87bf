use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use array_filler::data::Container;
use array_filler::fill::{Ascending, Descending, Fill, RandomNumbers, ReadNumbers};
use array_filler::source::ScriptedSource;

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for &n in &[100usize, 1_000, 32_767] {
        group.bench_with_input(BenchmarkId::new("ascending_range", n), &n, |b, &n| {
            let mut asc = Ascending::<i64>::new();
            let mut buf = vec![0i64; n];
            b.iter(|| {
                asc.fill_range(black_box(&mut buf), Some(-50), Some(50))
                    .unwrap();
            });
        });
        group.bench_with_input(BenchmarkId::new("fractional_bound", n), &n, |b, &n| {
            let mut frac = Descending::fractional();
            let mut buf = vec![0.0; n];
            b.iter(|| {
                frac.fill_to_bound(black_box(&mut buf), Some(-1_000.0))
                    .unwrap();
            });
        });
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    for &n in &[100usize, 1_000, 32_767] {
        group.bench_with_input(BenchmarkId::new("doubles", n), &n, |b, &n| {
            let mut rnd = RandomNumbers::<_, f64>::new(SmallRng::seed_from_u64(42));
            b.iter(|| black_box(rnd.fill_new_range(n as i64, Some(-1.0), Some(1.0)).unwrap()));
        });
    }
    group.finish();
}

fn bench_read(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(7);
    let tokens: Vec<i32> = (0..1_000).map(|_| rng.gen_range(-200..200)).collect();
    c.bench_function("read_window_1000", |b| {
        b.iter(|| {
            let mut read = ReadNumbers::<_, i32>::new(ScriptedSource::new(tokens.iter()));
            black_box(read.fill_new_range(1_000, Some(-100), Some(100)).unwrap())
        });
    });
}

fn bench_container(c: &mut Criterion) {
    c.bench_function("container_add_grow_delete", |b| {
        b.iter(|| {
            let mut cont = Container::with_length(16);
            for i in 0..1_000 {
                cont.add(black_box(i));
            }
            for _ in 0..500 {
                let _ = cont.delete(0);
            }
            black_box(cont.len())
        });
    });
}

criterion_group!(benches, bench_sequential, bench_random, bench_read, bench_container);
criterion_main!(benches);
