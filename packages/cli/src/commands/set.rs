use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formic_document::{Mutation, NodePath, Value};
use formic_editor::{EditSession, SaveOutcome};

use crate::config::Config;
use crate::headless::{AutoDialogs, HeadlessSpawner};

#[derive(Debug, Args)]
pub struct SetArgs {
    /// Template file
    pub template: PathBuf,

    /// Data file to edit
    pub data: PathBuf,

    /// Node path, e.g. `Stats.Strength` or `Tags[0]`
    pub path: String,

    /// New value, parsed as JSON; bare text falls back to a string
    pub value: String,
}

pub async fn set(args: SetArgs, config: &Config) -> Result<()> {
    let spawner = Arc::new(HeadlessSpawner::default());
    let dialogs = Arc::new(AutoDialogs {
        discard: config.auto_discard,
        save_path: None,
    });

    let mut session = EditSession::start(
        spawner,
        dialogs,
        &args.template,
        Some(args.data),
    )
    .await?;

    let path = NodePath::parse(&args.path)?;
    let value: Value = serde_json::from_str(&args.value)
        .unwrap_or_else(|_| Value::String(args.value.clone()));

    session.apply_edit(Mutation::SetValue {
        path: path.clone(),
        value,
    })?;
    println!("{} {} = {}", "✎".blue(), path, args.value);
    println!("  {}", session.title().dimmed());

    match session.save().await? {
        SaveOutcome::Saved(path) => {
            println!("{} Saved {}", "✓".green(), path.display());
        }
        SaveOutcome::Cancelled => {
            println!("{} Save cancelled; nothing written", "⚠️".yellow());
        }
    }

    Ok(())
}
