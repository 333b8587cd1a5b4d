//! Collaborator seams for the quiz traversal.
//!
//! The core never reads a terminal directly: whoever drives a game supplies
//! an `AnswerSource`. The CLI wires this to stdin; tests and library users
//! can use `ScriptedAnswers`.

use std::collections::VecDeque;

use crate::model::Question;

/// Where the player's answers come from.
///
/// One call per question, blocking until an answer is available. The source
/// is infallible by contract: the end of input is reported as an empty
/// string, which scores like any other non-matching answer.
pub trait AnswerSource {
    /// Produce the player's answer for `question`.
    fn next_answer(&mut self, question: &Question) -> String;
}

/// A canned sequence of answers for tests and scripted runs.
///
/// Yields its answers in order, then empty strings once exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedAnswers {
    answers: VecDeque<String>,
}

impl ScriptedAnswers {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
        }
    }

    /// Number of answers not yet handed out.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl AnswerSource for ScriptedAnswers {
    fn next_answer(&mut self, _question: &Question) -> String {
        self.answers.pop_front().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_question() -> Question {
        Question::new("q", "a", 1)
    }

    #[test]
    fn scripted_answers_in_order() {
        let mut source = ScriptedAnswers::new(["first", "second"]);
        assert_eq!(source.remaining(), 2);
        assert_eq!(source.next_answer(&any_question()), "first");
        assert_eq!(source.next_answer(&any_question()), "second");
        assert_eq!(source.remaining(), 0);
    }

    #[test]
    fn exhausted_source_yields_empty_strings() {
        let mut source = ScriptedAnswers::default();
        assert_eq!(source.next_answer(&any_question()), "");
        assert_eq!(source.next_answer(&any_question()), "");
    }
}
