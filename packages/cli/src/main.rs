mod commands;
mod config;
mod headless;

use clap::{Parser, Subcommand};
use commands::{check, new, set, show, CheckArgs, NewArgs, SetArgs, ShowArgs};
use config::Config;

/// Formic CLI - template-driven data editing without the editor UI
#[derive(Parser, Debug)]
#[command(name = "formic")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a template-default data file
    New(NewArgs),

    /// Mount a data file and print its inspector row
    Show(ShowArgs),

    /// Set one value through the editing session and save
    Set(SetArgs),

    /// Check a template, and optionally a data file against it
    Check(CheckArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = Config::load(&cwd).unwrap_or_default();

    match cli.command {
        Command::New(args) => new(args, &config),
        Command::Show(args) => show(args, &config).await,
        Command::Set(args) => set(args, &config).await,
        Command::Check(args) => check(args),
    }
}
