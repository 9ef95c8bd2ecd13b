use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_NAME: &str = "formic.config.json";

/// Optional per-directory configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where `formic new` writes data files; defaults to the template's
    /// directory.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Answer the data-loss prompt with "discard" in headless flows.
    #[serde(default)]
    pub auto_discard: bool,
}

impl Config {
    /// Load `formic.config.json` from `cwd`, if present and well-formed.
    pub fn load(cwd: &Path) -> Option<Config> {
        let contents = fs::read_to_string(cwd.join(DEFAULT_CONFIG_NAME)).ok()?;
        serde_json::from_str(&contents).ok()
    }
}
