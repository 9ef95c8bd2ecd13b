//! Template schema model.
//!
//! Definitions are immutable after load. Property order is the binding
//! order: the editor associates inspector `i` with document root key `i`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{TemplateError, TemplateResult};

/// The on-disk template file: one main definition plus the flat list of
/// object definitions it references (directly or transitively).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSetup {
    pub main_object_definition: ObjectDefinition,

    #[serde(default)]
    pub referenced_object_definitions: Vec<ObjectDefinition>,
}

/// Declared shape of one editable object type. Identity is by
/// `object_type_name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectDefinition {
    pub object_type_name: String,

    #[serde(default)]
    pub properties: Vec<PropertyInfo>,
}

/// One named property of an object definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyInfo {
    pub name: String,

    #[serde(flatten)]
    pub kind: PropertyKind,
}

/// Property type descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum PropertyKind {
    /// Primitive text value.
    String,

    /// Primitive numeric value. `int` selects integral editing.
    Number {
        #[serde(default)]
        int: bool,
    },

    /// Primitive flag.
    Bool,

    /// Nested object, referenced by type name.
    Object { object_type_name: String },

    /// Ordered collection of one element shape.
    Array { element: Box<PropertyKind> },
}

impl TemplateSetup {
    /// Build the `object_type_name -> ObjectDefinition` map over the main
    /// and referenced definitions. Duplicate type names are a load-time
    /// error.
    pub fn definition_map(&self) -> TemplateResult<HashMap<String, ObjectDefinition>> {
        let mut map = HashMap::new();

        for definition in std::iter::once(&self.main_object_definition)
            .chain(self.referenced_object_definitions.iter())
        {
            let name = definition.object_type_name.clone();
            if map.insert(name.clone(), definition.clone()).is_some() {
                return Err(TemplateError::DuplicateTypeName(name));
            }
        }

        Ok(map)
    }

    /// Collect object type names referenced by any property (at any depth
    /// of array nesting) that have no definition in this setup.
    pub fn unresolved_references(&self) -> Vec<String> {
        let known: Vec<&str> = std::iter::once(&self.main_object_definition)
            .chain(self.referenced_object_definitions.iter())
            .map(|d| d.object_type_name.as_str())
            .collect();

        let mut missing = Vec::new();
        for definition in std::iter::once(&self.main_object_definition)
            .chain(self.referenced_object_definitions.iter())
        {
            for property in &definition.properties {
                collect_unresolved(&property.kind, &known, &mut missing);
            }
        }

        missing.dedup();
        missing
    }
}

fn collect_unresolved(kind: &PropertyKind, known: &[&str], missing: &mut Vec<String>) {
    match kind {
        PropertyKind::Object { object_type_name } => {
            if !known.contains(&object_type_name.as_str())
                && !missing.contains(object_type_name)
            {
                missing.push(object_type_name.clone());
            }
        }
        PropertyKind::Array { element } => collect_unresolved(element, known, missing),
        PropertyKind::String | PropertyKind::Number { .. } | PropertyKind::Bool => {}
    }
}

impl ObjectDefinition {
    pub fn property(&self, name: &str) -> Option<&PropertyInfo> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_setup() -> TemplateSetup {
        TemplateSetup {
            main_object_definition: ObjectDefinition {
                object_type_name: "Character".to_string(),
                properties: vec![
                    PropertyInfo {
                        name: "Name".to_string(),
                        kind: PropertyKind::String,
                    },
                    PropertyInfo {
                        name: "Level".to_string(),
                        kind: PropertyKind::Number { int: true },
                    },
                    PropertyInfo {
                        name: "Stats".to_string(),
                        kind: PropertyKind::Object {
                            object_type_name: "Stats".to_string(),
                        },
                    },
                    PropertyInfo {
                        name: "Tags".to_string(),
                        kind: PropertyKind::Array {
                            element: Box::new(PropertyKind::String),
                        },
                    },
                ],
            },
            referenced_object_definitions: vec![ObjectDefinition {
                object_type_name: "Stats".to_string(),
                properties: vec![PropertyInfo {
                    name: "Strength".to_string(),
                    kind: PropertyKind::Number { int: false },
                }],
            }],
        }
    }

    #[test]
    fn test_template_serialization_round_trip() {
        let setup = sample_setup();

        let json = serde_json::to_string_pretty(&setup).unwrap();
        let deserialized: TemplateSetup = serde_json::from_str(&json).unwrap();

        assert_eq!(setup, deserialized);
    }

    #[test]
    fn test_property_kind_tags() {
        let json = serde_json::to_value(&PropertyInfo {
            name: "Level".to_string(),
            kind: PropertyKind::Number { int: true },
        })
        .unwrap();

        assert_eq!(json["name"], "Level");
        assert_eq!(json["type"], "number");
        assert_eq!(json["int"], true);
    }

    #[test]
    fn test_definition_map_rejects_duplicates() {
        let mut setup = sample_setup();
        setup
            .referenced_object_definitions
            .push(ObjectDefinition {
                object_type_name: "Stats".to_string(),
                properties: vec![],
            });

        let result = setup.definition_map();
        assert!(matches!(
            result,
            Err(TemplateError::DuplicateTypeName(name)) if name == "Stats"
        ));
    }

    #[test]
    fn test_unresolved_references() {
        let mut setup = sample_setup();
        setup.main_object_definition.properties.push(PropertyInfo {
            name: "Home".to_string(),
            kind: PropertyKind::Object {
                object_type_name: "Location".to_string(),
            },
        });

        assert_eq!(setup.unresolved_references(), vec!["Location".to_string()]);
    }

    #[test]
    fn test_property_lookup() {
        let setup = sample_setup();
        let definition = &setup.main_object_definition;

        assert!(definition.property("Level").is_some());
        assert!(definition.property("Missing").is_none());
    }
}
