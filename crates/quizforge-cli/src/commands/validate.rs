//! The `quizforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(pack_path: PathBuf) -> Result<()> {
    let packs = if pack_path.is_dir() {
        quizforge_core::parser::load_pack_directory(&pack_path)?
    } else {
        vec![quizforge_core::parser::parse_pack(&pack_path)?]
    };

    let mut total_warnings = 0;

    for pack in &packs {
        println!("Pack: {} ({} questions)", pack.name, pack.questions.len());

        let warnings = quizforge_core::parser::validate_pack(pack);
        for w in &warnings {
            let prefix = w
                .question
                .map(|i| format!("  [question {i}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All packs valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
