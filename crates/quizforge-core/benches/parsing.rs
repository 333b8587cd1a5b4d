use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizforge_core::parser::{parse_pack_str, validate_pack};

fn bench_toml_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("toml_parsing");

    // Generate pack TOML strings of various sizes
    let small_toml = generate_pack_toml(5);
    let medium_toml = generate_pack_toml(50);
    let large_toml = generate_pack_toml(200);

    group.bench_function("5_questions", |b| {
        b.iter(|| parse_pack_str(black_box(&small_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("50_questions", |b| {
        b.iter(|| parse_pack_str(black_box(&medium_toml), black_box("bench.toml".as_ref())))
    });

    group.bench_function("200_questions", |b| {
        b.iter(|| parse_pack_str(black_box(&large_toml), black_box("bench.toml".as_ref())))
    });

    group.finish();
}

fn bench_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("validation");

    let toml = generate_pack_toml(200);
    let pack = parse_pack_str(&toml, "bench.toml".as_ref()).unwrap();

    group.bench_function("200_questions", |b| {
        b.iter(|| validate_pack(black_box(&pack)))
    });

    group.finish();
}

fn generate_pack_toml(n: usize) -> String {
    let mut s = String::new();
    s.push_str(
        r#"[pack]
id = "bench"
name = "Benchmark"
"#,
    );
    for i in 0..n {
        s.push_str(&format!(
            r#"
[[questions]]
prompt = "Benchmark question {i}?"
answer = "answer {i}"
value = 10
"#
        ));
    }
    s
}

criterion_group!(benches, bench_toml_parsing, bench_validation);
criterion_main!(benches);
