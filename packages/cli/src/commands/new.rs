use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use formic_document::{default_document, Document};
use formic_template::TemplateSetup;

use crate::config::Config;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Template file
    pub template: PathBuf,

    /// Output data file (defaults to <TypeName>.json beside the template)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

pub fn new(args: NewArgs, config: &Config) -> Result<()> {
    let NewArgs {
        template,
        output,
        force,
    } = args;

    let setup = TemplateSetup::load(&template)?;
    let definitions = setup.definition_map()?;
    let root = default_document(&setup.main_object_definition, &definitions);

    let output = output.unwrap_or_else(|| {
        let file = format!("{}.json", setup.main_object_definition.object_type_name);
        match &config.data_dir {
            Some(dir) => PathBuf::from(dir).join(file),
            None => template
                .parent()
                .unwrap_or(Path::new("."))
                .join(file),
        }
    });

    if output.exists() && !force {
        println!("{} {} already exists", "⚠️".yellow(), output.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut document = Document::from_root(root);
    document.save_to(&output)?;

    println!("{} Created {}", "✓".green(), output.display());
    Ok(())
}
