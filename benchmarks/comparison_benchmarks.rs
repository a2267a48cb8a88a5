#![allow(
    clippy::unwrap_used,
    clippy::panic,
    clippy::expect_used,
    clippy::print_stdout
)]

/// Comparison benchmarks: picourl vs url crate
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use url::Url as UrlCrate;

fn bench_parse_simple_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_simple");
    let input = "http://example.com/";

    group.bench_function("picourl", |b| {
        b.iter(|| picourl::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_complex_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_complex");
    let input = "https://sub.secure.example.com:8443/path/to/resource#section?query=value&key=data";

    group.bench_function("picourl", |b| {
        b.iter(|| picourl::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parse_unicode_host(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_unicode_host");
    let input = "https://сайт.рф/стр";

    group.bench_function("picourl", |b| {
        b.iter(|| picourl::parse(black_box(input)).unwrap());
    });

    group.bench_function("url_crate", |b| {
        b.iter(|| UrlCrate::parse(black_box(input)).unwrap());
    });

    group.finish();
}

fn bench_parser_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_reuse");
    let inputs = [
        "http://example.com/",
        "https://sub.example.com:8443/a/b",
        "gemini://gemini.circumlunar.space/docs",
        "ftp://mirror.example.org/pub",
    ];

    group.bench_function("fresh_parser_per_call", |b| {
        b.iter(|| {
            for input in &inputs {
                let _ = picourl::parse(black_box(input));
            }
        });
    });

    group.bench_function("reused_parser", |b| {
        let mut parser = picourl::Parser::new();
        b.iter(|| {
            for input in &inputs {
                let _ = parser.parse(black_box(input));
            }
        });
    });

    group.finish();
}

fn bench_is_valid(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid");

    let valid = "https://example.com/path";
    let invalid = "https://inval!d.com";

    group.bench_function("picourl_valid", |b| {
        b.iter(|| picourl::is_valid(black_box(valid)));
    });

    group.bench_function("picourl_invalid", |b| {
        b.iter(|| picourl::is_valid(black_box(invalid)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_simple_all,
    bench_parse_complex_all,
    bench_parse_unicode_host,
    bench_parser_reuse,
    bench_is_valid
);

criterion_main!(benches);
