//! Scripted round example: minimal programmatic usage of quizforge.
//!
//! This example demonstrates how to use quizforge as a library to run
//! a quiz round without a live player.
//!
//! ```bash
//! cargo run --example scripted_round
//! ```

use quizforge_core::game::{NoopReporter, TriviaGame};
use quizforge_core::traits::ScriptedAnswers;

fn main() -> anyhow::Result<()> {
    // Build a game from the starter questions plus one of our own
    let mut game = TriviaGame::new();
    game.seed_if_empty();
    game.append("What is the chemical symbol for gold?", "Au", 30);
    println!("Game holds {} questions", game.len());

    // Script the player: three right answers, one wrong
    let mut answers = ScriptedAnswers::new(["38", "Bank of Italy", "Call of Duty", "Au"]);

    // Run the round over every stored question
    println!("\nRunning round...\n");
    let report = game.ask(game.len(), &mut answers, &NoopReporter)?;

    // Print results
    println!("Round complete!");
    println!("  Questions: {}", report.asked);
    println!("  Correct: {}", report.correct_count());
    println!(
        "  Score: {} of {} points ({:.0}% accuracy)",
        report.score,
        report.points_available,
        report.accuracy() * 100.0,
    );

    for outcome in &report.outcomes {
        let mark = if outcome.correct { "+" } else { "-" };
        println!("  [{mark}] {} -> {:?}", outcome.prompt, outcome.given);
    }

    // Save the report
    report.save_json("scripted_round.json".as_ref())?;
    println!("\nReport saved to scripted_round.json");

    Ok(())
}
