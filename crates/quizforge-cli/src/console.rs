//! Console I/O glue: line reading, prompts, and the live-game reporter.

use std::io::{self, Write};

use quizforge_core::game::QuizReporter;
use quizforge_core::model::Question;
use quizforge_core::report::RoundReport;
use quizforge_core::traits::AnswerSource;

/// Read one line from stdin, stripping only the trailing line terminator.
///
/// `None` at end of input.
pub fn try_read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => {
            if line.ends_with('\n') {
                line.pop();
                if line.ends_with('\r') {
                    line.pop();
                }
            }
            Some(line)
        }
    }
}

/// Read one line, with end of input flattened to an empty string.
pub fn read_line() -> String {
    try_read_line().unwrap_or_default()
}

/// Print a prompt without a newline, then read the response line.
pub fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();
    read_line()
}

/// Like `prompt_line`, but reports end of input instead of hiding it.
pub fn try_prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();
    try_read_line()
}

/// Answer source backed by real stdin, one line per question.
pub struct StdinAnswers;

impl AnswerSource for StdinAnswers {
    fn next_answer(&mut self, _question: &Question) -> String {
        prompt_line("Answer: ")
    }
}

/// Prints the live question-and-answer exchange.
pub struct ConsoleReporter;

impl QuizReporter for ConsoleReporter {
    fn on_question(&self, index: usize, total: usize, question: &Question) {
        println!("\nQuestion {}/{}: {}", index + 1, total, question.prompt);
    }

    fn on_correct(&self, value: i64, running_score: i64) {
        println!("Your answer is correct. You receive {value} points.");
        println!("Your total points: {running_score}");
    }

    fn on_incorrect(&self, correct_answer: &str, running_score: i64) {
        println!("Your answer is wrong. The correct answer is: {correct_answer}");
        println!("Your total points: {running_score}");
    }

    fn on_round_complete(&self, report: &RoundReport) {
        println!(
            "\nRound complete: {}/{} correct in {}ms.",
            report.correct_count(),
            report.asked,
            report.duration_ms
        );
    }
}
