use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use tcars::{RuleTable, Status, World, engine};

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let rule = RuleTable::new(777).expect("valid rule");
    for size in [65, 1024, 16384] {
        let mut world = World::with_size(size, Status::One);
        // let the pattern spread before timing
        engine::run(&mut world, &rule, 48).for_each(drop);

        group.bench_with_input(BenchmarkId::new("serial", size), &world, |b, world| {
            b.iter_batched(
                || world.clone(),
                |mut world| engine::step(&mut world, &rule),
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("parallel", size), &world, |b, world| {
            b.iter_batched(
                || world.clone(),
                |mut world| engine::step_parallel(&mut world, &rule),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
