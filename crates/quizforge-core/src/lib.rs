//! Ordered question store, scored quiz traversal, and question packs.
//!
//! This crate defines the data model, the trivia game store with its scored
//! quiz traversal, and the TOML pack loading that the quizforge CLI builds
//! on.

pub mod error;
pub mod game;
pub mod model;
pub mod parser;
pub mod report;
pub mod traits;
