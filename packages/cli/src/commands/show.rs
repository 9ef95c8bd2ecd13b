use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formic_editor::EditSession;

use crate::config::Config;
use crate::headless::{AutoDialogs, HeadlessSpawner};

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Template file
    pub template: PathBuf,

    /// Data file to mount
    pub data: PathBuf,
}

pub async fn show(args: ShowArgs, config: &Config) -> Result<()> {
    let spawner = Arc::new(HeadlessSpawner::default());
    let dialogs = Arc::new(AutoDialogs {
        discard: config.auto_discard,
        save_path: None,
    });

    let session = EditSession::start(
        spawner.clone(),
        dialogs,
        &args.template,
        Some(args.data),
    )
    .await?;

    println!("{}", session.title().bright_white().bold());
    for line in session.status_line().lines() {
        println!("{}", line.dimmed());
    }
    println!();

    for inspector in spawner.created() {
        println!("  {}", inspector.borrow().describe(session.document()));
    }

    Ok(())
}
