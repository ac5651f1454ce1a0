use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use parbreak::{BreakConfig, BreakEngine, Word};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_paragraph(rng: &mut StdRng, len: usize) -> Vec<Word> {
    const ALPHABET: &[u8] = b"etaoinshrdlu";
    (0..len)
        .map(|_| {
            let n = rng.gen_range(1..11);
            let mut text: String = (0..n)
                .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
                .collect();
            if rng.gen_bool(0.07) {
                text.push('.');
            }
            Word::new(text)
        })
        .collect()
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for &len in &[1_000usize, 10_000, 50_000] {
        group.bench_function(format!("words_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_paragraph(&mut rng, len)
                },
                |words| {
                    let engine = BreakEngine::new(BreakConfig::new(72.0, 3.0));
                    let solution = engine.search(&words);
                    criterion::black_box(solution.map(|s| s.score).ok());
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_width");
    let mut rng = StdRng::seed_from_u64(7);
    let words = random_paragraph(&mut rng, 5_000);
    for &width in &[40.0f64, 80.0, 160.0] {
        group.bench_function(format!("width_{width}"), |b| {
            let engine = BreakEngine::new(BreakConfig::new(width, 3.0));
            b.iter(|| criterion::black_box(engine.search(&words).ok()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search, bench_width);
criterion_main!(benches);
