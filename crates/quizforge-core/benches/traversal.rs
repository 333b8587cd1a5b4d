use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

use quizforge_core::game::{NoopReporter, TriviaGame};
use quizforge_core::traits::ScriptedAnswers;

fn make_game(n: usize) -> TriviaGame {
    let mut game = TriviaGame::new();
    for i in 0..n {
        game.append(format!("question {i}"), format!("answer {i}"), 10);
    }
    game
}

fn all_correct(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("answer {i}")).collect()
}

fn all_wrong(n: usize) -> Vec<String> {
    (0..n).map(|_| "miss".to_string()).collect()
}

fn bench_ask(c: &mut Criterion) {
    let mut group = c.benchmark_group("ask");

    for n in [10usize, 100, 1000] {
        let game = make_game(n);
        let answers = all_correct(n);

        group.bench_function(format!("{n}_questions_all_correct"), |b| {
            b.iter_batched(
                || (game.clone(), ScriptedAnswers::new(answers.clone())),
                |(mut game, mut answers)| {
                    game.ask(black_box(n), &mut answers, &NoopReporter)
                        .unwrap()
                },
                BatchSize::SmallInput,
            )
        });
    }

    let n = 100;
    let game = make_game(n);
    let answers = all_wrong(n);
    group.bench_function("100_questions_all_wrong", |b| {
        b.iter_batched(
            || (game.clone(), ScriptedAnswers::new(answers.clone())),
            |(mut game, mut answers)| {
                game.ask(black_box(n), &mut answers, &NoopReporter)
                    .unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_seed(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_if_empty");

    group.bench_function("empty", |b| {
        b.iter_batched(
            TriviaGame::new,
            |mut game| game.seed_if_empty(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("already_populated", |b| {
        let game = make_game(3);
        b.iter_batched(
            || game.clone(),
            |mut game| game.seed_if_empty(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_ask, bench_seed);
criterion_main!(benches);
