//! Inspector and spawner contracts.
//!
//! Concrete widgets live in the UI layer; the editor core only sees these
//! capabilities. One inspector edits exactly one document node, reached
//! through a (parent node, key) binding.

use formic_document::{Document, NodePath, Value};
use formic_template::PropertyInfo;

use crate::changes::ChangeTracker;

/// One property-editing widget.
///
/// Implementations own their visual representation; the session only
/// drives the binding lifecycle. For array elements the key is the
/// stringified element index.
pub trait InspectorNode {
    /// Bind to the node identified by `key` under the node at `parent`.
    fn bind_node(&mut self, parent: NodePath, key: &str);

    fn backing_key(&self) -> String;

    /// Re-key the binding in place, without a full rebind. Used by the
    /// owning collection when sibling removal shifts element positions.
    fn set_backing_key(&mut self, key: &str);

    fn display_name(&self) -> String;

    fn set_display_name(&mut self, name: &str);

    /// Release from the visual parent. Called once per mount generation
    /// during teardown; dropping the box completes the release.
    fn detach(&mut self);
}

/// Widget factory. Must be deterministic per property shape.
pub trait InspectorSpawner {
    /// Create an inspector structurally matching `property`, not yet bound
    /// to data. The tracker clone is the widget's route to the session's
    /// dirty flag.
    fn create(&self, property: &PropertyInfo, changes: ChangeTracker) -> Box<dyn InspectorNode>;
}

/// A (parent node, key) pair, the unit of inspector binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeBinding {
    pub parent: NodePath,
    pub key: String,
}

impl NodeBinding {
    pub fn new(parent: NodePath, key: impl Into<String>) -> Self {
        Self {
            parent,
            key: key.into(),
        }
    }

    /// Resolve the bound node in `document`. For array parents the key is
    /// interpreted as an element index.
    pub fn resolve<'a>(&self, document: &'a Document) -> Option<&'a Value> {
        if self.parent.is_root() {
            return document.root().get(&self.key);
        }

        match self.parent.resolve(document.root())? {
            Value::Object(map) => map.get(&self.key),
            Value::Array(items) => items.get(self.key.parse::<usize>().ok()?),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_document() -> Document {
        let Value::Object(root) = json!({
            "Name": "Arden",
            "Tags": ["scout", "ranger"]
        }) else {
            unreachable!()
        };
        Document::from_root(root)
    }

    #[test]
    fn test_resolve_root_field() {
        let doc = sample_document();
        let binding = NodeBinding::new(NodePath::root(), "Name");

        assert_eq!(binding.resolve(&doc), Some(&json!("Arden")));
    }

    #[test]
    fn test_resolve_array_element_by_index_key() {
        let doc = sample_document();
        let binding = NodeBinding::new(NodePath::root().key("Tags"), "1");

        assert_eq!(binding.resolve(&doc), Some(&json!("ranger")));
    }

    #[test]
    fn test_resolve_non_numeric_key_into_array() {
        let doc = sample_document();
        let binding = NodeBinding::new(NodePath::root().key("Tags"), "first");

        assert_eq!(binding.resolve(&doc), None);
    }
}
