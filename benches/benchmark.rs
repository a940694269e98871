use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tfidf_rank::{SimilarityAlgorithm, TfIdfVectorizer};

const WORDS: [&str; 16] = [
    "rust", "search", "index", "query", "term", "weight", "vector", "cosine",
    "corpus", "document", "rank", "score", "token", "idf", "tf", "engine",
];

// deterministic synthetic documents of 20 to 59 terms
fn synthetic_docs(n: usize) -> Vec<String> {
    let mut seed = 0x1234_5678_u32;
    (0..n)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            let len = 20 + (seed % 40) as usize;
            (0..len)
                .map(|i| WORDS[(seed as usize).wrapping_add(i * 7) % WORDS.len()])
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

fn add_and_search_benchmark(c: &mut Criterion) {
    let docs = synthetic_docs(500);

    c.bench_function("add_documents", |b| {
        b.iter(|| {
            let mut vectorizer = TfIdfVectorizer::new();
            vectorizer.add_documents(black_box(&docs)).unwrap();
            vectorizer
        });
    });

    let vectorizer = TfIdfVectorizer::with_documents(&docs, " ").unwrap();
    c.bench_function("search", |b| {
        b.iter(|| {
            vectorizer
                .search(black_box("cosine rank of a query"), &SimilarityAlgorithm::Cosine)
                .unwrap()
        });
    });
}

criterion_group!(benches, add_and_search_benchmark);
criterion_main!(benches);
