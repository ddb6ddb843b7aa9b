use criterion::{Criterion, black_box, criterion_group, criterion_main};
use fuzzy_needle::{NeedleListMatcherBuilder, score};

fn benchmark_score(c: &mut Criterion) {
    c.bench_function("score", |b| {
        b.iter(|| {
            let _ = score(
                black_box("apache_http_server"),
                black_box("Apache HTTP Server 2.4.58 (httpd) source tarball"),
            );
        });
    });
}

fn benchmark_search(c: &mut Criterion) {
    let needles: Vec<String> = (0..200)
        .map(|i| format!("vendor{}_product{}", i % 17, i))
        .collect();
    let sequential = NeedleListMatcherBuilder::new()
        .parallel_threshold(usize::MAX)
        .build(&needles);
    let parallel = NeedleListMatcherBuilder::new()
        .parallel_threshold(0)
        .build(&needles);
    let haystack = "Vendor3 Product105 release 1.2.3 for linux x86_64";

    c.bench_function("search_sequential", |b| {
        b.iter(|| {
            let _ = sequential.search(black_box(haystack));
        });
    });
    c.bench_function("search_parallel", |b| {
        b.iter(|| {
            let _ = parallel.search(black_box(haystack));
        });
    });
}

criterion_group!(benches, benchmark_score, benchmark_search);
criterion_main!(benches);
