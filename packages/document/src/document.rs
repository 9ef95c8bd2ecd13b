//! Document handle: an order-preserving JSON object tree plus its backing
//! file, if any.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::errors::DocumentError;

/// The document being edited.
///
/// `path == None` means an unsaved new document; the path is set once by
/// loading from disk or by the first successful save. The session
/// controller owns the document exclusively while mounted and replaces it
/// wholesale on revert/reload, never partially.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: Option<PathBuf>,
    root: Map<String, Value>,
}

impl Document {
    /// In-memory document with no backing file.
    pub fn from_root(root: Map<String, Value>) -> Self {
        Self { path: None, root }
    }

    /// Load a document from disk. Failures are recoverable and carry the
    /// path; the caller decides whether to abort or prompt.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, DocumentError> {
        let path = path.into();

        let contents = fs::read_to_string(&path).map_err(|e| DocumentError::Read {
            path: path.clone(),
            source: e,
        })?;

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| DocumentError::Parse {
                path: path.clone(),
                source: e,
            })?;

        let Value::Object(root) = value else {
            return Err(DocumentError::NotAnObject { path });
        };

        Ok(Self {
            path: Some(path),
            root,
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Root object node. Key order is the binding order.
    pub fn root(&self) -> &Map<String, Value> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.root
    }

    /// Canonical textual form of the tree.
    pub fn to_json_string(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    /// Write to `path`, overwriting existing content. The path becomes the
    /// document's backing file only after the write succeeds.
    pub fn save_to(&mut self, path: impl Into<PathBuf>) -> Result<(), DocumentError> {
        let path = path.into();
        let json = self.to_json_string()?;

        fs::write(&path, json).map_err(|e| DocumentError::Write {
            path: path.clone(),
            source: e,
        })?;

        self.path = Some(path);
        Ok(())
    }

    /// Write to the current backing file.
    pub fn save(&self) -> Result<(), DocumentError> {
        let path = self.path.as_ref().ok_or(DocumentError::NoBackingFile)?;
        let json = self.to_json_string()?;

        fs::write(path, json).map_err(|e| DocumentError::Write {
            path: path.clone(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_root() -> Map<String, Value> {
        let Value::Object(root) = json!({
            "Name": "Arden",
            "Level": 3,
            "Tags": ["scout"]
        }) else {
            unreachable!()
        };
        root
    }

    #[test]
    fn test_serialization_round_trip_preserves_order() {
        let doc = Document::from_root(sample_root());

        let json = doc.to_json_string().unwrap();
        let parsed: Map<String, Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(&parsed, doc.root());
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, ["Name", "Level", "Tags"]);
    }

    #[test]
    fn test_save_to_sets_backing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("arden.json");

        let mut doc = Document::from_root(sample_root());
        assert!(doc.path().is_none());

        doc.save_to(&path).unwrap();
        assert_eq!(doc.path(), Some(path.as_path()));

        let loaded = Document::load(&path).unwrap();
        assert_eq!(loaded.root(), doc.root());
    }

    #[test]
    fn test_save_without_backing_file() {
        let doc = Document::from_root(sample_root());
        assert!(matches!(doc.save(), Err(DocumentError::NoBackingFile)));
    }

    #[test]
    fn test_load_rejects_non_object_root() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = Document::load(&path).unwrap_err();
        assert!(matches!(err, DocumentError::NotAnObject { .. }));
    }

    #[test]
    fn test_load_failure_carries_path() {
        let err = Document::load("/nonexistent/arden.json").unwrap_err();
        assert!(err.to_string().contains("arden.json"));
    }
}
