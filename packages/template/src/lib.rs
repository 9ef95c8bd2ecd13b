//! # Formic Template
//!
//! Schema model for Formic documents.
//!
//! A template describes the shape of an editable object type: a named
//! `ObjectDefinition` with an ordered list of properties, each of a
//! primitive, nested-object, or array kind. Templates are loaded once per
//! editing session; property order is significant because the editor binds
//! inspectors to document fields by position.
//!
//! ```rust,ignore
//! use formic_template::TemplateSetup;
//!
//! let setup = TemplateSetup::load("character.template.json")?;
//! let definitions = setup.definition_map()?;
//! for property in &setup.main_object_definition.properties {
//!     println!("{}: {:?}", property.name, property.kind);
//! }
//! ```

pub mod error;
pub mod schema;
pub mod serializer;

pub use error::{TemplateError, TemplateResult};
pub use schema::{ObjectDefinition, PropertyInfo, PropertyKind, TemplateSetup};
