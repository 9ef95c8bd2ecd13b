//! Template file load/save.
//!
//! Templates are UTF-8 JSON. A read or parse failure is fatal to session
//! start and always carries the offending path.

use std::fs;
use std::path::Path;

use crate::error::{TemplateError, TemplateResult};
use crate::schema::TemplateSetup;

impl TemplateSetup {
    /// Read and deserialize a template file.
    pub fn load(path: impl AsRef<Path>) -> TemplateResult<Self> {
        let path = path.as_ref();

        let contents =
            fs::read_to_string(path).map_err(|e| TemplateError::read(path, e))?;

        serde_json::from_str(&contents).map_err(|e| TemplateError::parse(path, e))
    }

    /// Serialize and write a template file, overwriting any existing
    /// content.
    pub fn save(&self, path: impl AsRef<Path>) -> TemplateResult<()> {
        let path = path.as_ref();

        let json = serde_json::to_string_pretty(self)?;

        fs::write(path, json).map_err(|e| TemplateError::write(path, e))
    }
}
