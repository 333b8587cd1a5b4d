//! The quizforge command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod console;

#[derive(Parser)]
#[command(name = "quizforge", version, about = "Console trivia quiz game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive quiz round
    Play {
        /// Path to a .toml question pack or directory
        #[arg(long)]
        pack: Option<PathBuf>,

        /// Write a JSON round report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Run the built-in scripted check of the game rules
    SelfTest,

    /// Validate question pack TOML files
    Validate {
        /// Path to a pack file or directory
        #[arg(long)]
        pack: PathBuf,
    },

    /// Create an example question pack
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quizforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { pack, report } => commands::play::execute(pack, report),
        Commands::SelfTest => commands::selftest::execute(),
        Commands::Validate { pack } => commands::validate::execute(pack),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
