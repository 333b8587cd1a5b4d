//! The `quizforge self-test` command.
//!
//! Scripted walk through the game rules against real stdin: the rejected
//! calls check the warning path, the accepted calls quiz whoever is at the
//! keyboard (or whatever is piped in).

use anyhow::Result;

use quizforge_core::error::AskError;
use quizforge_core::game::TriviaGame;

use crate::console::{ConsoleReporter, StdinAnswers};

pub fn execute() -> Result<()> {
    println!("*** Scripted self-test of the game rules ***");

    let mut game = TriviaGame::new();
    game.seed_if_empty();
    let size = game.len();

    // Case 1: asking zero questions must be rejected.
    println!("Case 1: ask no question. The game should give a warning.");
    let Err(err) = game.ask(0, &mut StdinAnswers, &ConsoleReporter) else {
        anyhow::bail!("asking 0 questions was accepted");
    };
    anyhow::ensure!(err == AskError::NoQuestions, "unexpected rejection: {err}");
    println!("Warning - {err}");
    println!("Case 1 passed\n");

    // Case 2.1: one question, tester answers incorrectly.
    println!("Case 2.1: ask 1 question. Enter an incorrect answer.");
    game.ask(1, &mut StdinAnswers, &ConsoleReporter)?;
    println!("Case 2.1 passed\n");

    // Case 2.2: one question, tester answers correctly.
    println!("Case 2.2: ask 1 question. Enter the correct answer.");
    game.ask(1, &mut StdinAnswers, &ConsoleReporter)?;
    println!("Case 2.2 passed\n");

    // Case 3: every stored question.
    println!("Case 3: ask all {size} questions.");
    game.ask(size, &mut StdinAnswers, &ConsoleReporter)?;
    println!("Case 3 passed\n");

    // Case 4: more questions than the game holds.
    println!("Case 4: ask {} questions.", size + 2);
    let Err(err) = game.ask(size + 2, &mut StdinAnswers, &ConsoleReporter) else {
        anyhow::bail!("asking too many questions was accepted");
    };
    anyhow::ensure!(
        err == AskError::NotEnough { available: size },
        "unexpected rejection: {err}"
    );
    println!("Warning - {err}");
    println!("Case 4 passed\n");

    println!("*** End of self-test ***");
    Ok(())
}
