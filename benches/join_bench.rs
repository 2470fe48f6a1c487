use criterion::{black_box, criterion_group, criterion_main, Criterion};
use strjoin_rs::{join, with_joiner, Joiner, JoinerOptions};

fn get_parts() -> Vec<String> {
    (0..1_000).map(|i| format!("item-{}", i)).collect()
}

fn benchmark_write_str(c: &mut Criterion) {
    let parts = get_parts();

    c.bench_function("write_str_1000_parts", |b| {
        b.iter(|| {
            let mut joiner = Joiner::new([with_joiner("[", ", ", "]")]);
            for part in &parts {
                joiner.write_str(black_box(part));
            }
            joiner.into_string()
        })
    });
}

fn benchmark_write_str_grown(c: &mut Criterion) {
    let parts = get_parts();
    let total: usize = parts.iter().map(|p| p.len() + 2).sum();

    c.bench_function("write_str_1000_parts_grown", |b| {
        b.iter(|| {
            let mut joiner = Joiner::new([with_joiner("[", ", ", "]")]);
            joiner.grow(total);
            for part in &parts {
                joiner.write_str(black_box(part));
            }
            joiner.into_string()
        })
    });
}

fn benchmark_join(c: &mut Criterion) {
    let parts = get_parts();
    let options = JoinerOptions::default().prefix("[").step(", ").suffix("]");

    c.bench_function("join_1000_parts", |b| {
        b.iter(|| join(black_box(&parts), black_box(&options)))
    });
}

criterion_group!(
    benches,
    benchmark_write_str,
    benchmark_write_str_grown,
    benchmark_join
);
criterion_main!(benches);
