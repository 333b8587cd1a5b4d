//! The `quizforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    std::fs::create_dir_all("packs")?;
    let pack_path = std::path::Path::new("packs/starter.toml");
    if pack_path.exists() {
        println!("packs/starter.toml already exists, skipping.");
    } else {
        std::fs::write(pack_path, STARTER_PACK)?;
        println!("Created packs/starter.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit packs/starter.toml with your own questions");
    println!("  2. Run: quizforge validate --pack packs/starter.toml");
    println!("  3. Run: quizforge play --pack packs/starter.toml");

    Ok(())
}

const STARTER_PACK: &str = r#"[pack]
id = "starter"
name = "Starter Trivia"
description = "A small example pack to get started"

[[questions]]
prompt = "Which planet has the most moons?"
answer = "Saturn"
value = 50

[[questions]]
prompt = "In which year did the first human travel to space?"
answer = "1961"
value = 75

[[questions]]
prompt = "What is the only letter that does not appear in any US state name?"
answer = "Q"
value = 100
"#;
