// Criterion benchmark suite: partial-match rewrite and partial matching
//
// Run: cargo bench
// Specific group: cargo bench -- rewrite
// HTML report: target/criterion/report/index.html

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use regex_partial_match::{to_partial_source, Flags, Regex};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const PATTERNS: &[(&str, &str, &str)] = &[
    ("literal", "hello world", ""),
    ("dot_star", "foo.*bar", ""),
    ("alternation", "alpha|beta|gamma|delta", ""),
    ("char_class", "[a-zA-Z0-9_]+", ""),
    ("quantifier", "a{2,5}b+c?d*", ""),
    ("group", "(abc)+(def)*", ""),
    ("lookahead", "foo(?=bar)", ""),
    ("lookbehind", r"(?<=@)\w+", ""),
    ("named_capture", r"(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})", ""),
    ("unicode_escapes", r"\u{1F600}\p{Lu}+[\u{2600}-\u{26FF}]", "u"),
    ("class_algebra", r"[[a-z]--[aeiou]]+", "v"),
];

fn flags(letters: &str) -> Flags {
    letters.parse().expect("benchmark flags")
}

fn email_like(n: usize) -> String {
    let mut s = String::with_capacity(n * 12);
    for i in 0..n {
        s.push_str(&format!("(?:user{}@host{}\\.com)|", i, i));
    }
    s.push('x');
    s
}

// ---------------------------------------------------------------------------
// 1. rewrite -- source-to-source transformation only
// ---------------------------------------------------------------------------

fn bench_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite");
    for (name, source, letters) in PATTERNS {
        let f = flags(letters);
        group.bench_with_input(BenchmarkId::new("pattern", name), source, |b, source| {
            b.iter(|| black_box(to_partial_source(black_box(source), f)));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 2. rewrite_scaling -- long patterns
// ---------------------------------------------------------------------------

fn bench_rewrite_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rewrite_scaling");
    for n in [10, 100, 1000] {
        let source = email_like(n);
        group.bench_with_input(BenchmarkId::new("alternatives", n), &source, |b, source| {
            b.iter(|| black_box(to_partial_source(black_box(source), Flags::empty())));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 3. compile -- original vs partial, default engine
// ---------------------------------------------------------------------------

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    for (name, source, letters) in PATTERNS.iter().filter(|p| p.2 != "v") {
        group.bench_with_input(BenchmarkId::new("original", name), source, |b, source| {
            b.iter(|| black_box(Regex::new(black_box(source), letters).expect("compile")));
        });
        group.bench_with_input(BenchmarkId::new("partial", name), source, |b, source| {
            b.iter(|| black_box(Regex::partial(black_box(source), letters).expect("compile")));
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// 4. search -- partial pattern against growing prefixes
// ---------------------------------------------------------------------------

fn bench_search_prefixes(c: &mut Criterion) {
    let re = Regex::partial(r"^(?<year>\d{4})-(?<month>\d{2})-(?<day>\d{2})$", "")
        .expect("compile");
    let full = "2026-10-14";

    let mut group = c.benchmark_group("search");
    for end in [1, 5, 8, full.len()] {
        let text = &full[..end];
        group.bench_with_input(BenchmarkId::new("date_prefix", end), text, |b, text| {
            b.iter(|| black_box(re.captures(black_box(text))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_rewrite,
    bench_rewrite_scaling,
    bench_compile,
    bench_search_prefixes
);
criterion_main!(benches);
