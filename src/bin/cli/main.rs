mod app;
mod commands;
mod parser;
mod render;

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "flashbook-cli", about = "Flashcard collection with quiz attempts", version)]
struct Cli {
    /// Use a specific flashcard data file
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Use a specific config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    /// Disable ANSI colors
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List all flashcards
    List,

    /// Execute a single command line, e.g. `run "add q/Capital of Peru? a/Lima"`
    Run {
        /// Command line as typed in the interactive prompt
        line: String,
    },

    /// Start the interactive prompt
    Repl,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut app = app::App::new(cli.config.as_deref(), cli.data)?;
    let use_color = !cli.no_color && app.config.color && std::io::stdout().is_terminal();

    match cli.command {
        None | Some(Command::Repl) => {
            commands::repl::run(&mut app, use_color)?;
        }
        Some(Command::List) => {
            commands::list::run(&app, &cli.format, use_color)?;
        }
        Some(Command::Run { line }) => {
            if !commands::run::run(&mut app, &line, use_color) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
