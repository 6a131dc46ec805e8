use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gst_index::tree::GeneralizedSuffixTree;
use rand::{distributions::Alphanumeric, thread_rng, Rng};

fn random_word(rng: &mut impl Rng, len: usize) -> String {
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

fn build(n_docs: usize, doc_len: usize) -> GeneralizedSuffixTree {
    let mut rng = thread_rng();
    let mut gst = GeneralizedSuffixTree::new();
    for id in 0..n_docs {
        gst.insert(&random_word(&mut rng, doc_len), id as u32).unwrap();
    }
    gst
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &n_docs in &[8usize, 64, 256] {
        group.bench_function(format!("insert_{n_docs}_docs_of_64"), |b| {
            b.iter(|| black_box(build(n_docs, 64)))
        });
    }
    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &n_docs in &[8usize, 64, 256] {
        group.bench_function(format!("aggregate_{n_docs}_docs_of_64"), |b| {
            b.iter_batched(
                || build(n_docs, 64),
                |mut gst| gst.aggregate(),
                criterion::BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut gst = build(256, 64);
    gst.aggregate();
    let mut rng = thread_rng();
    let query = random_word(&mut rng, 4);

    c.bench_function("search_4_chars_in_256_docs", |b| {
        b.iter(|| black_box(gst.search(&query)))
    });
}

fn bench_similar(c: &mut Criterion) {
    let mut gst = build(256, 64);
    gst.aggregate();
    let mut rng = thread_rng();
    let query = random_word(&mut rng, 32);

    c.bench_function("similar_32_chars_in_256_docs", |b| {
        b.iter(|| black_box(gst.similar(&query, 0.3)))
    });
}

criterion_group!(benches, bench_insert, bench_aggregate, bench_search, bench_similar);
criterion_main!(benches);
