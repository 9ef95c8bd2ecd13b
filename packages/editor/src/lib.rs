//! # Formic Editor
//!
//! Session and synchronization core for template-driven data editing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ template: schema file → ObjectDefinition    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: session lifecycle + binding         │
//! │  - Load template + document                 │
//! │  - Mount: teardown, construct, bind by      │
//! │    position                                 │
//! │  - Dirty tracking, revert, save             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: ordered JSON tree + mutations     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Two trees, one order**: the inspector row and the document's root
//!    keys are index-aligned; binding is positional, never by key lookup
//! 2. **Single owner**: one session exclusively owns its document and
//!    inspector row; every mutation flows through a session entry point
//! 3. **Cooperative suspension**: the discard guard and the save prompt
//!    are the only awaits; cancelling either has zero side effects
//! 4. **External widgets**: concrete editors, the windowing layer, and
//!    dialog presentation live behind traits
//!
//! ## Usage
//!
//! ```rust,ignore
//! use formic_editor::EditSession;
//!
//! let mut session = EditSession::start(
//!     spawner,
//!     dialogs,
//!     "character.template.json",
//!     Some("arden.json".into()),
//! )
//! .await?;
//!
//! session.apply_edit(mutation)?;   // marks the session dirty
//! session.save().await?;
//! ```

mod changes;
mod collection;
mod dialogs;
mod errors;
mod inspector;
mod session;

pub use changes::ChangeTracker;
pub use collection::{renumber_slots, ArrayItemSlot, RemoveCallback};
pub use dialogs::DialogHost;
pub use errors::EditorError;
pub use inspector::{InspectorNode, InspectorSpawner, NodeBinding};
pub use session::{EditSession, MountOutcome, SaveOutcome};

// Re-export the types sessions are parameterized over.
pub use formic_document::{Document, Mutation, NodePath, Value};
pub use formic_template::{ObjectDefinition, PropertyInfo, PropertyKind, TemplateSetup};
