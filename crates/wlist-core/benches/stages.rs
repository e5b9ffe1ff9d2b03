use criterion::{black_box, criterion_group, criterion_main, Criterion};

use wlist_core::{filter, normalize, FilterParams, Wordlist};

fn synthetic_wordlist(n: usize) -> Wordlist {
    (0..n)
        .map(|i| {
            let word = if i % 3 == 0 {
                format!("Wort{}", i)
            } else {
                format!("wort{}", i / 2)
            };
            (word, 1.0 / (i as f64 + 1.0))
        })
        .collect()
}

fn bench_stages(c: &mut Criterion) {
    let list = synthetic_wordlist(100_000);
    let params = FilterParams::default();

    c.bench_function("filter_100k", |b| b.iter(|| filter(black_box(&list), &params)));
    c.bench_function("normalize_100k", |b| b.iter(|| normalize(black_box(&list))));
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
