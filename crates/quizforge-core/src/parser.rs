//! TOML question pack parser.
//!
//! Loads question packs from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, QuestionPack};

/// Intermediate TOML structure for parsing pack files.
#[derive(Debug, Deserialize)]
struct TomlPackFile {
    pack: TomlPackHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlPackHeader {
    id: String,
    name: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    prompt: String,
    answer: String,
    #[serde(default = "default_value")]
    value: i64,
}

fn default_value() -> i64 {
    10
}

/// Parse a single TOML file into a `QuestionPack`.
pub fn parse_pack(path: &Path) -> Result<QuestionPack> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read pack file: {}", path.display()))?;

    parse_pack_str(&content, path)
}

/// Parse a TOML string into a `QuestionPack` (useful for testing).
pub fn parse_pack_str(content: &str, source_path: &Path) -> Result<QuestionPack> {
    let parsed: TomlPackFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            prompt: q.prompt,
            answer: q.answer,
            value: q.value,
        })
        .collect();

    Ok(QuestionPack {
        id: parsed.pack.id,
        name: parsed.pack.name,
        description: parsed.pack.description,
        questions,
    })
}

/// Recursively load all `.toml` pack files from a directory.
pub fn load_pack_directory(dir: &Path) -> Result<Vec<QuestionPack>> {
    let mut packs = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            packs.extend(load_pack_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_pack(&path) {
                Ok(pack) => packs.push(pack),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(packs)
}

/// A warning from question pack validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a question pack for common issues.
pub fn validate_pack(pack: &QuestionPack) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if pack.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "pack contains no questions".into(),
        });
    }

    // Check for empty prompts and answers
    for (i, q) in pack.questions.iter().enumerate() {
        if q.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "prompt is empty".into(),
            });
        }
        if q.answer.is_empty() {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: "answer is empty, only an empty response will score".into(),
            });
        }
    }

    // Check for non-positive point values
    for (i, q) in pack.questions.iter().enumerate() {
        if q.value <= 0 {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: format!("point value {} is not positive", q.value),
            });
        }
    }

    // Check for duplicate prompts
    let mut seen_prompts = std::collections::HashSet::new();
    for (i, q) in pack.questions.iter().enumerate() {
        if !seen_prompts.insert(&q.prompt) {
            warnings.push(ValidationWarning {
                question: Some(i),
                message: format!("duplicate prompt: {}", q.prompt),
            });
        }
    }

    warnings
}
