use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use formic_document::Document;
use formic_template::TemplateSetup;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Template file
    pub template: PathBuf,

    /// Data file to check against the template
    pub data: Option<PathBuf>,
}

pub fn check(args: CheckArgs) -> Result<()> {
    let setup = TemplateSetup::load(&args.template)?;
    let definitions = setup.definition_map()?;
    println!(
        "{} Template {} ({} definitions)",
        "✓".green(),
        args.template.display(),
        definitions.len()
    );

    let mut problems = 0;

    for name in setup.unresolved_references() {
        println!("{} Unresolved object type: {}", "⚠️".yellow(), name);
        problems += 1;
    }

    if let Some(data) = &args.data {
        let document = Document::load(data)?;
        let properties = &setup.main_object_definition.properties;
        let keys: Vec<&String> = document.root().keys().collect();

        // Binding is positional: report anything that would bind to the
        // wrong field.
        if keys.len() != properties.len() {
            println!(
                "{} Root has {} keys, template declares {} properties",
                "⚠️".yellow(),
                keys.len(),
                properties.len()
            );
            problems += 1;
        }

        for (index, (key, property)) in keys.iter().zip(properties).enumerate() {
            if **key != property.name {
                println!(
                    "{} Position {}: key {:?} binds to property {:?}",
                    "⚠️".yellow(),
                    index,
                    key,
                    property.name
                );
                problems += 1;
            }
        }

        if problems == 0 {
            println!("{} Data {} binds cleanly", "✓".green(), data.display());
        }
    }

    if problems > 0 {
        bail!("{} problem(s) found", problems);
    }
    Ok(())
}
