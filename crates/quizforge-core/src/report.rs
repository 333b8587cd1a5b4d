//! Round reports: what was asked, what was answered, and how it scored.

use std::fs;
use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One question's exchange within a round.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuestionOutcome {
    /// Zero-based position within the round.
    pub index: usize,
    pub prompt: String,
    pub expected: String,
    pub given: String,
    pub correct: bool,
    /// Points the question was worth.
    pub value: i64,
    /// Score after this question was graded.
    pub running_score: i64,
}

/// Full record of one completed round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundReport {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    /// How many questions the round covered.
    pub asked: usize,
    /// Final score of the round.
    pub score: i64,
    /// Sum of the values of every question asked.
    pub points_available: i64,
    pub outcomes: Vec<QuestionOutcome>,
    pub duration_ms: u64,
}

impl RoundReport {
    /// Number of correctly answered questions.
    pub fn correct_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.correct).count()
    }

    /// Fraction of questions answered correctly, in `[0.0, 1.0]`.
    pub fn accuracy(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.correct_count() as f64 / self.outcomes.len() as f64
    }

    /// Write the report as pretty-printed JSON, creating parent directories
    /// as needed.
    pub fn save_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Read a report previously written by `save_json`.
    pub fn load_json(path: &Path) -> anyhow::Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("failed to parse report from {}", path.display()))
    }
}
