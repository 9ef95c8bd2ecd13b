//! Template-default document synthesis.
//!
//! Builds a brand-new document from an object definition: one default node
//! per property, in declared order. Self-referential definitions terminate
//! via the in-progress type set tracked along the current expansion path;
//! re-entering a type yields a `Null` placeholder instead of recursing.

use std::collections::{HashMap, HashSet};

use formic_template::{ObjectDefinition, PropertyKind};
use serde_json::{json, Map, Value};

/// Synthesize a fresh document for `definition`.
pub fn default_document(
    definition: &ObjectDefinition,
    definitions: &HashMap<String, ObjectDefinition>,
) -> Map<String, Value> {
    let mut root = Map::new();

    for property in &definition.properties {
        let mut expanding = HashSet::new();
        root.insert(
            property.name.clone(),
            default_value(&property.kind, definitions, &mut expanding),
        );
    }

    root
}

fn default_value(
    kind: &PropertyKind,
    definitions: &HashMap<String, ObjectDefinition>,
    expanding: &mut HashSet<String>,
) -> Value {
    match kind {
        PropertyKind::String => Value::String(String::new()),
        PropertyKind::Number { int: true } => json!(0),
        PropertyKind::Number { int: false } => json!(0.0),
        PropertyKind::Bool => Value::Bool(false),
        PropertyKind::Array { .. } => Value::Array(Vec::new()),
        PropertyKind::Object { object_type_name } => {
            // Refuse to re-enter a type already being expanded.
            if !expanding.insert(object_type_name.clone()) {
                return Value::Null;
            }

            let value = match definitions.get(object_type_name) {
                Some(nested) => {
                    let mut map = Map::new();
                    for property in &nested.properties {
                        map.insert(
                            property.name.clone(),
                            default_value(&property.kind, definitions, expanding),
                        );
                    }
                    Value::Object(map)
                }
                // Dangling reference; `formic check` reports these.
                None => Value::Null,
            };

            expanding.remove(object_type_name);
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_template::{PropertyInfo, TemplateSetup};

    fn object(name: &str, properties: Vec<PropertyInfo>) -> ObjectDefinition {
        ObjectDefinition {
            object_type_name: name.to_string(),
            properties,
        }
    }

    fn property(name: &str, kind: PropertyKind) -> PropertyInfo {
        PropertyInfo {
            name: name.to_string(),
            kind,
        }
    }

    #[test]
    fn test_primitive_defaults_in_declared_order() {
        let main = object(
            "Character",
            vec![
                property("Name", PropertyKind::String),
                property("Level", PropertyKind::Number { int: true }),
                property("Speed", PropertyKind::Number { int: false }),
                property("Alive", PropertyKind::Bool),
                property(
                    "Tags",
                    PropertyKind::Array {
                        element: Box::new(PropertyKind::String),
                    },
                ),
            ],
        );

        let root = default_document(&main, &HashMap::new());

        let keys: Vec<&String> = root.keys().collect();
        assert_eq!(keys, ["Name", "Level", "Speed", "Alive", "Tags"]);
        assert_eq!(root["Name"], json!(""));
        assert_eq!(root["Level"], json!(0));
        assert_eq!(root["Speed"], json!(0.0));
        assert_eq!(root["Alive"], json!(false));
        assert_eq!(root["Tags"], json!([]));
    }

    #[test]
    fn test_nested_object_skeleton() {
        let main = object(
            "Character",
            vec![property(
                "Stats",
                PropertyKind::Object {
                    object_type_name: "Stats".to_string(),
                },
            )],
        );
        let setup = TemplateSetup {
            main_object_definition: main.clone(),
            referenced_object_definitions: vec![object(
                "Stats",
                vec![property("Strength", PropertyKind::Number { int: true })],
            )],
        };
        let definitions = setup.definition_map().unwrap();

        let root = default_document(&main, &definitions);
        assert_eq!(root["Stats"], json!({ "Strength": 0 }));
    }

    #[test]
    fn test_direct_self_reference_terminates() {
        let main = object(
            "Node",
            vec![
                property("Label", PropertyKind::String),
                property(
                    "Next",
                    PropertyKind::Object {
                        object_type_name: "Node".to_string(),
                    },
                ),
            ],
        );
        let mut definitions = HashMap::new();
        definitions.insert("Node".to_string(), main.clone());

        let root = default_document(&main, &definitions);

        // One level of skeleton, then a placeholder at the recursive point.
        assert_eq!(root["Next"], json!({ "Label": "", "Next": null }));
    }

    #[test]
    fn test_mutual_reference_terminates() {
        let a = object(
            "A",
            vec![property(
                "B",
                PropertyKind::Object {
                    object_type_name: "B".to_string(),
                },
            )],
        );
        let b = object(
            "B",
            vec![property(
                "A",
                PropertyKind::Object {
                    object_type_name: "A".to_string(),
                },
            )],
        );
        let mut definitions = HashMap::new();
        definitions.insert("A".to_string(), a.clone());
        definitions.insert("B".to_string(), b);

        let root = default_document(&a, &definitions);

        assert_eq!(root["B"], json!({ "A": { "B": null } }));
    }

    #[test]
    fn test_unknown_reference_yields_placeholder() {
        let main = object(
            "Character",
            vec![property(
                "Home",
                PropertyKind::Object {
                    object_type_name: "Location".to_string(),
                },
            )],
        );

        let root = default_document(&main, &HashMap::new());
        assert_eq!(root["Home"], Value::Null);
    }
}
