//! Lexer Benchmarks
//!
//! Measures scanner throughput on representative Cext sources.
//! Run with: `cargo bench --package cextc-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use cextc_lex::tokenize;

fn token_count(source: &str) -> usize {
    tokenize(source.as_bytes()).map_or(0, |tokens| tokens.len())
}

fn bench_lexer_keywords(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "int32 main() { int32 y = x + 1; return y; }";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_assign", |b| {
        b.iter(|| token_count(black_box("int32 x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        import "io";

        /* Recursive fibonacci.
           Kept naive on purpose. */
        uint64 fibonacci(uint64 n) {
            if (n <= 1) {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        }

        struct point {
            float64 x;
            float64 y;
        }

        enum color {
            red,
            green,
            blue,
        }

        void shift(uint32 *value) {
            // in-place shifts
            *value <<= 2;
            *value >>= 1;
            char c = '\n';
            char u = '\U0001F600';
        }
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("complex_source", |b| {
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_strings");

    group.bench_function("short_string", |b| {
        b.iter(|| token_count(black_box("s = \"hello\";")))
    });

    group.bench_function("long_string", |b| {
        let source = "s = \"This is a longer string that contains some text for benchmarking purposes.\";";
        b.iter(|| token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_numbers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_numbers");

    group.bench_function("integer", |b| {
        b.iter(|| token_count(black_box("int64 x = 123456;")))
    });

    group.bench_function("float", |b| {
        b.iter(|| token_count(black_box("float64 x = 3.14159;")))
    });

    group.finish();
}

fn bench_lexer_identifiers(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_identifiers");

    group.bench_function("long_ident", |b| {
        b.iter(|| token_count(black_box("int32 very_long_variable_name = 42;")))
    });

    group.bench_function("many_ident", |b| {
        b.iter(|| {
            token_count(black_box(
                "int8 a = 1; int8 b = 2; int8 c = 3; int8 d = 4; int8 e = 5;",
            ))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_lexer_keywords,
    bench_lexer_complex,
    bench_lexer_strings,
    bench_lexer_numbers,
    bench_lexer_identifiers
);
criterion_main!(benches);
