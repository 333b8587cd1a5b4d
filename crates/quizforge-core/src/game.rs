//! The ordered question store and its scored traversal.
//!
//! `TriviaGame` holds questions in insertion order and answers quiz requests
//! against them: `ask(n, ...)` walks the first `n` questions, pulls one
//! answer per question from an `AnswerSource`, and tallies points for exact
//! matches.

use std::time::Instant;

use uuid::Uuid;

use crate::error::AskError;
use crate::model::Question;
use crate::report::{QuestionOutcome, RoundReport};
use crate::traits::AnswerSource;

/// Callbacks emitted while a traversal runs.
///
/// The CLI implements this to print the per-question exchange; tests use
/// `NoopReporter`.
pub trait QuizReporter {
    fn on_question(&self, index: usize, total: usize, question: &Question);
    fn on_correct(&self, value: i64, running_score: i64);
    fn on_incorrect(&self, correct_answer: &str, running_score: i64);
    fn on_round_complete(&self, report: &RoundReport);
}

/// Reporter that ignores every event.
pub struct NoopReporter;

impl QuizReporter for NoopReporter {
    fn on_question(&self, _: usize, _: usize, _: &Question) {}
    fn on_correct(&self, _: i64, _: i64) {}
    fn on_incorrect(&self, _: &str, _: i64) {}
    fn on_round_complete(&self, _: &RoundReport) {}
}

/// The ordered question store plus the transient score of the most recent
/// round.
#[derive(Debug, Clone, Default)]
pub struct TriviaGame {
    questions: Vec<Question>,
    current_score: i64,
}

impl TriviaGame {
    /// Create an empty game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of questions currently held.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The stored questions, in quiz order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Score of the most recently completed (or in-progress) round.
    ///
    /// Only a successful `ask` resets this; a rejected call leaves it alone.
    pub fn current_score(&self) -> i64 {
        self.current_score
    }

    /// Append a question at the tail.
    ///
    /// Always succeeds: no validation of the text, and the point value is
    /// accepted as given (negative and zero included).
    pub fn append(&mut self, prompt: impl Into<String>, answer: impl Into<String>, value: i64) {
        self.questions.push(Question::new(prompt, answer, value));
    }

    /// Append an already-built question at the tail.
    pub fn append_question(&mut self, question: Question) {
        self.questions.push(question);
    }

    /// Populate an empty game with the built-in starter questions.
    ///
    /// Does nothing on a non-empty game, so calling it repeatedly is safe.
    /// Returns whether seeding happened.
    pub fn seed_if_empty(&mut self) -> bool {
        if !self.questions.is_empty() {
            return false;
        }
        self.questions.extend(starter_questions());
        tracing::debug!("seeded {} starter questions", self.questions.len());
        true
    }

    /// Quiz the player on the first `n` questions, in insertion order.
    ///
    /// Rejects without touching any state when `n` is zero or exceeds the
    /// number of stored questions. Otherwise resets the score to 0, walks
    /// exactly `n` questions (one blocking answer each), awards a question's
    /// value on a verbatim answer match, and emits progress through
    /// `reporter`. The stored questions are never mutated.
    pub fn ask(
        &mut self,
        n: usize,
        answers: &mut dyn AnswerSource,
        reporter: &dyn QuizReporter,
    ) -> Result<RoundReport, AskError> {
        if n == 0 {
            return Err(AskError::NoQuestions);
        }
        if n > self.questions.len() {
            return Err(AskError::NotEnough {
                available: self.questions.len(),
            });
        }

        let start = Instant::now();
        self.current_score = 0;
        let mut outcomes = Vec::with_capacity(n);

        for (index, question) in self.questions[..n].iter().enumerate() {
            reporter.on_question(index, n, question);
            let given = answers.next_answer(question);
            let correct = question.is_correct(&given);
            if correct {
                self.current_score += question.value;
                reporter.on_correct(question.value, self.current_score);
            } else {
                reporter.on_incorrect(&question.answer, self.current_score);
            }
            outcomes.push(QuestionOutcome {
                index,
                prompt: question.prompt.clone(),
                expected: question.answer.clone(),
                given,
                correct,
                value: question.value,
                running_score: self.current_score,
            });
        }

        let report = RoundReport {
            id: Uuid::new_v4(),
            created_at: chrono::Utc::now(),
            asked: n,
            score: self.current_score,
            points_available: self.questions[..n].iter().map(|q| q.value).sum(),
            outcomes,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        reporter.on_round_complete(&report);
        Ok(report)
    }
}

/// The built-in starter set, in the order the original game shipped them.
fn starter_questions() -> [Question; 3] {
    [
        Question::new(
            "How long was the shortest war on record? (Hint: how many minutes)",
            "38",
            100,
        ),
        Question::new(
            "What was Bank of America's original name? (Hint: Bank of Italy or Bank of Germany)",
            "Bank of Italy",
            50,
        ),
        Question::new(
            "What is the best-selling video game of all time? (Hint: Call of Duty or Wii Sports)",
            "Wii Sports",
            20,
        ),
    ]
}
