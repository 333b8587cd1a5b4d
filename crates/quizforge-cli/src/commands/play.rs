//! The `quizforge play` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use quizforge_core::game::TriviaGame;
use quizforge_core::parser;
use quizforge_core::report::RoundReport;

use crate::console::{self, ConsoleReporter, StdinAnswers};

pub fn execute(pack_path: Option<PathBuf>, report_path: Option<PathBuf>) -> Result<()> {
    println!("*** Welcome to the quizforge trivia game ***");

    let mut game = TriviaGame::new();
    game.seed_if_empty();

    if let Some(path) = &pack_path {
        let packs = if path.is_dir() {
            parser::load_pack_directory(path)?
        } else {
            vec![parser::parse_pack(path)?]
        };
        for pack in packs {
            tracing::info!("loaded pack {} ({} questions)", pack.id, pack.questions.len());
            println!("Loaded pack: {} ({} questions)", pack.name, pack.questions.len());
            for question in pack.questions {
                game.append_question(question);
            }
        }
    }

    // The add loop always runs at least once.
    loop {
        if add_question_from_user(&mut game).is_none() {
            break;
        }
        if !ask_yes_no("Continue? (Yes/No): ") {
            break;
        }
    }

    println!("\n\n*** The Trivia Game ***");
    match game.ask(game.len(), &mut StdinAnswers, &ConsoleReporter) {
        Ok(report) => {
            print_round_summary(&report);
            if let Some(path) = &report_path {
                report.save_json(path)?;
                println!("Report saved to: {}", path.display());
            }
        }
        Err(e) => println!("Warning - {e}"),
    }

    println!("\n*** Thank you for playing. Goodbye! ***");
    Ok(())
}

/// Collect one question from the player. `None` when input ended.
fn add_question_from_user(game: &mut TriviaGame) -> Option<()> {
    let prompt = console::try_prompt_line("\nEnter a question: ")?;
    let answer = console::try_prompt_line("Enter an answer: ")?;
    let value = loop {
        let raw = console::try_prompt_line("Enter award points: ")?;
        match raw.trim().parse::<i64>() {
            Ok(v) => break v,
            Err(_) => println!("Please enter a whole number."),
        }
    };
    game.append(prompt, answer, value);
    Some(())
}

/// Free-form yes/no prompt: first character decides, anything else
/// re-prompts. End of input counts as "no".
fn ask_yes_no(prompt: &str) -> bool {
    loop {
        let Some(response) = console::try_prompt_line(prompt) else {
            return false;
        };
        match response.chars().next().map(|c| c.to_ascii_lowercase()) {
            Some('y') => return true,
            Some('n') => return false,
            _ => {}
        }
    }
}

fn print_round_summary(report: &RoundReport) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Outcome", "Points", "Total"]);

    for outcome in &report.outcomes {
        let (mark, points) = if outcome.correct {
            ("correct", format!("{:+}", outcome.value))
        } else {
            ("wrong", "0".to_string())
        };
        table.add_row(vec![
            Cell::new(outcome.index + 1),
            Cell::new(&outcome.prompt),
            Cell::new(mark),
            Cell::new(points),
            Cell::new(outcome.running_score),
        ]);
    }

    println!("\n{table}");
    println!(
        "Final score: {} of {} points",
        report.score, report.points_available
    );
}
