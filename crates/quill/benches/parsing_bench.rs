use criterion::{criterion_group, criterion_main, Criterion};
use quill::{between, digit, literal, many, or, regex, sep_by};
use std::hint::black_box;

fn bench_literal(c: &mut Criterion) {
    let input = "keyword and then some trailing input".to_owned();
    let p = literal("keyword");
    c.bench_function("literal_match", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

fn bench_many_digits(c: &mut Criterion) {
    let input = "9".repeat(4096);
    let p = many(digit());
    c.bench_function("many_digits_4096", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

fn bench_regex_word(c: &mut Criterion) {
    let input = format!("{}!", "a".repeat(1024));
    let p = regex("[a-z]+");
    c.bench_function("regex_word_1024", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

fn bench_sep_by_list(c: &mut Criterion) {
    let input = (0..1024).map(|_| "7").collect::<Vec<_>>().join(",");
    let p = sep_by(literal(","), digit());
    c.bench_function("sep_by_1024", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

fn bench_or_fallthrough(c: &mut Criterion) {
    let input = "zeta".to_owned();
    let p = or(vec![
        literal("alpha"),
        literal("beta"),
        literal("gamma"),
        literal("zeta"),
    ]);
    c.bench_function("or_last_of_four", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

fn bench_between(c: &mut Criterion) {
    let input = format!("({})", "5".repeat(256));
    let p = between("(", ")", many(digit()));
    c.bench_function("between_digits_256", |b| {
        b.iter(|| p.run(black_box(&input)));
    });
}

criterion_group!(
    benches,
    bench_literal,
    bench_many_digits,
    bench_regex_word,
    bench_sep_by_list,
    bench_or_fallthrough,
    bench_between
);
criterion_main!(benches);
