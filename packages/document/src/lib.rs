//! # Formic Document
//!
//! The mutable document tree being edited, plus the operations that may
//! change it.
//!
//! A document is an insertion-ordered JSON object tree. Root key order is
//! load-bearing: the editor binds inspectors to root fields by position, so
//! serialization must round-trip key order exactly (`serde_json` with
//! `preserve_order`).
//!
//! ## Lifecycle
//!
//! ```text
//! Template ──synthesis──▶ Document ──mutations──▶ Document ──save──▶ File
//!     │                      ▲
//!     │                      │ load
//!     └──────────▶ File ─────┘
//! ```
//!
//! All edits are expressed as [`Mutation`]s: validated, intent-preserving
//! operations applied through a single entry point. A failed validation
//! leaves the document untouched.

pub mod document;
pub mod errors;
pub mod mutations;
pub mod path;
pub mod synthesis;

pub use document::Document;
pub use errors::DocumentError;
pub use mutations::{Mutation, MutationError};
pub use path::{NodePath, Step};
pub use synthesis::default_document;

// Re-export the value types documents are made of.
pub use serde_json::{Map, Value};
