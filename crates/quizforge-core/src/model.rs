//! Core data model types for quizforge.
//!
//! These are the plain-data types the rest of the system builds on: a single
//! trivia question and the packs that group questions for loading.

use serde::{Deserialize, Serialize};

/// A single trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The text shown to the player.
    pub prompt: String,
    /// The expected answer, compared verbatim against the player's input.
    pub answer: String,
    /// Points awarded on an exact match. Zero and negative values are
    /// accepted as given.
    pub value: i64,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>, value: i64) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
            value,
        }
    }

    /// Whether `given` earns this question's points.
    ///
    /// The comparison is exact: case-sensitive and whitespace-sensitive,
    /// with no trimming or normalization of either side.
    pub fn is_correct(&self, given: &str) -> bool {
        given == self.answer
    }
}

/// A named collection of questions loaded from a TOML pack file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPack {
    /// Unique identifier for this pack.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description of the pack.
    #[serde(default)]
    pub description: String,
    /// The questions, in file order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_sensitive() {
        let q = Question::new("Best-selling video game?", "Wii Sports", 20);
        assert!(q.is_correct("Wii Sports"));
        assert!(!q.is_correct("wii sports"));
        assert!(!q.is_correct("WII SPORTS"));
    }

    #[test]
    fn exact_match_is_whitespace_sensitive() {
        let q = Question::new("Shortest war in minutes?", "38", 100);
        assert!(q.is_correct("38"));
        assert!(!q.is_correct(" 38"));
        assert!(!q.is_correct("38 "));
        assert!(!q.is_correct(""));
    }

    #[test]
    fn empty_answer_matches_only_empty_input() {
        let q = Question::new("Say nothing", "", 5);
        assert!(q.is_correct(""));
        assert!(!q.is_correct(" "));
    }

    #[test]
    fn question_serde_roundtrip() {
        let q = Question::new("What was Bank of America's original name?", "Bank of Italy", 50);
        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn negative_and_zero_values_roundtrip() {
        for value in [-25, 0, 7] {
            let q = Question::new("q", "a", value);
            let json = serde_json::to_string(&q).unwrap();
            let back: Question = serde_json::from_str(&json).unwrap();
            assert_eq!(back.value, value);
        }
    }
}
