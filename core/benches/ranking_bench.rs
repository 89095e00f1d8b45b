use criterion::{criterion_group, criterion_main, Criterion};
use docrank_core::{rank, Corpus, Ranker, Strategy};

fn sample_corpus() -> Corpus {
    let words = ["search", "engine", "ranking", "vector", "cosine", "query", "document", "index", "term", "weight", "corpus", "token"];
    (0..500)
        .map(|i| {
            let text: Vec<&str> = (0..60).map(|j| words[(i * 7 + j * 13) % words.len()]).collect();
            (format!("doc{i:04}.txt"), text.join(" "))
        })
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let corpus = sample_corpus();
    for strategy in Strategy::ALL {
        c.bench_function(&format!("rank_{strategy:?}"), |b| b.iter(|| rank(&corpus, "cosine ranking query", strategy)));
    }
    let cached = Ranker::with_cache();
    c.bench_function("rank_cosine_cached", |b| b.iter(|| cached.rank(&corpus, "cosine ranking query", Strategy::Cosine)));
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
