//! Paths into the document tree.
//!
//! A [`NodePath`] addresses one node as a sequence of object-key and
//! array-index steps from the document root. The empty path denotes the
//! root object itself and never resolves to a `Value`.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::DocumentError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Step {
    Key(String),
    Index(usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct NodePath {
    steps: Vec<Step>,
}

impl NodePath {
    /// The empty path: the document root object.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.steps.push(Step::Key(key.into()));
        self
    }

    pub fn index(mut self, index: usize) -> Self {
        self.steps.push(Step::Index(index));
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// Resolve this path against a document root.
    pub fn resolve<'a>(&self, root: &'a Map<String, Value>) -> Option<&'a Value> {
        let mut steps = self.steps.iter();

        let mut current = match steps.next()? {
            Step::Key(key) => root.get(key)?,
            Step::Index(_) => return None,
        };

        for step in steps {
            current = match (step, current) {
                (Step::Key(key), Value::Object(map)) => map.get(key)?,
                (Step::Index(index), Value::Array(items)) => items.get(*index)?,
                _ => return None,
            };
        }

        Some(current)
    }

    pub fn resolve_mut<'a>(&self, root: &'a mut Map<String, Value>) -> Option<&'a mut Value> {
        let mut steps = self.steps.iter();

        let mut current = match steps.next()? {
            Step::Key(key) => root.get_mut(key)?,
            Step::Index(_) => return None,
        };

        for step in steps {
            current = match (step, current) {
                (Step::Key(key), Value::Object(map)) => map.get_mut(key)?,
                (Step::Index(index), Value::Array(items)) => items.get_mut(*index)?,
                _ => return None,
            };
        }

        Some(current)
    }

    /// Parse the display form back into a path: `Stats.Strength`,
    /// `Inventory[2].Name`, `$` for the root.
    pub fn parse(text: &str) -> Result<Self, DocumentError> {
        let text = text.trim();
        if text.is_empty() || text == "$" {
            return Ok(Self::root());
        }

        let mut path = Self::root();
        for segment in text.split('.') {
            let (name, rest) = match segment.find('[') {
                Some(at) => segment.split_at(at),
                None => (segment, ""),
            };

            if !name.is_empty() {
                path = path.key(name);
            } else if rest.is_empty() {
                return Err(DocumentError::InvalidPath(text.to_string()));
            }

            let mut rest = rest;
            while let Some(stripped) = rest.strip_prefix('[') {
                let Some(close) = stripped.find(']') else {
                    return Err(DocumentError::InvalidPath(text.to_string()));
                };
                let index = stripped[..close]
                    .parse::<usize>()
                    .map_err(|_| DocumentError::InvalidPath(text.to_string()))?;
                path = path.index(index);
                rest = &stripped[close + 1..];
            }

            if !rest.is_empty() {
                return Err(DocumentError::InvalidPath(text.to_string()));
            }
        }

        Ok(path)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.steps.is_empty() {
            return write!(f, "$");
        }

        let mut first = true;
        for step in &self.steps {
            match step {
                Step::Key(key) => {
                    if !first {
                        write!(f, ".")?;
                    }
                    write!(f, "{}", key)?;
                }
                Step::Index(index) => write!(f, "[{}]", index)?,
            }
            first = false;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_root() -> Map<String, Value> {
        let Value::Object(root) = json!({
            "Name": "Arden",
            "Stats": { "Strength": 12.5 },
            "Inventory": [ { "Name": "Rope" }, { "Name": "Lantern" } ]
        }) else {
            unreachable!()
        };
        root
    }

    #[test]
    fn test_resolve_key_and_index_steps() {
        let root = sample_root();

        let path = NodePath::root().key("Inventory").index(1).key("Name");
        assert_eq!(path.resolve(&root), Some(&Value::String("Lantern".into())));

        let path = NodePath::root().key("Stats").key("Strength");
        assert_eq!(path.resolve(&root), Some(&json!(12.5)));
    }

    #[test]
    fn test_resolve_mismatched_step_kind() {
        let root = sample_root();

        // Index step into an object node
        assert_eq!(NodePath::root().key("Stats").index(0).resolve(&root), None);
        // Key step into an array node
        assert_eq!(
            NodePath::root().key("Inventory").key("Name").resolve(&root),
            None
        );
    }

    #[test]
    fn test_root_path_never_resolves() {
        let root = sample_root();
        assert!(NodePath::root().resolve(&root).is_none());
        assert!(NodePath::root().is_root());
    }

    #[test]
    fn test_display_and_parse_round_trip() {
        let path = NodePath::root().key("Inventory").index(2).key("Name");
        assert_eq!(path.to_string(), "Inventory[2].Name");
        assert_eq!(NodePath::parse("Inventory[2].Name").unwrap(), path);

        assert_eq!(NodePath::parse("$").unwrap(), NodePath::root());
        assert_eq!(NodePath::root().to_string(), "$");
    }

    #[test]
    fn test_parse_rejects_malformed_paths() {
        assert!(NodePath::parse("Inventory[").is_err());
        assert!(NodePath::parse("Inventory[x]").is_err());
        assert!(NodePath::parse("Inventory[1]x").is_err());
    }
}
