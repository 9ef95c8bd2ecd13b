//! # Edit Session
//!
//! Owns the schema, the active document, and the root inspector row, and
//! keeps the two trees index-aligned.
//!
//! The mount protocol is strictly ordered: discard guard, full teardown,
//! construction in declared property order, then positional binding of
//! inspector `i` to root key `i`. The guard is the only suspension point;
//! declining it aborts the mount with zero side effects.
//!
//! All document mutation is serialized through this controller:
//! [`EditSession::apply_edit`], [`EditSession::mount`], or the collection
//! removal contract. No other component touches the tree directly.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use formic_document::{default_document, Document, Map, Mutation, NodePath, Value};
use formic_template::{ObjectDefinition, TemplateSetup};
use tracing::{debug, info};

use crate::changes::ChangeTracker;
use crate::dialogs::DialogHost;
use crate::errors::EditorError;
use crate::inspector::{InspectorNode, InspectorSpawner};

/// How [`EditSession::mount`] resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountOutcome {
    /// The incoming document is now the active document.
    Mounted,
    /// The user declined to discard unsaved changes; nothing happened.
    Declined,
}

/// How [`EditSession::save`] resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Exactly one write to this path.
    Saved(PathBuf),
    /// Destination prompt cancelled; no write, no state change.
    Cancelled,
}

enum MountGuard {
    Guarded,
    Forced,
}

/// One editing session over one template and one document.
pub struct EditSession {
    spawner: Arc<dyn InspectorSpawner>,
    dialogs: Arc<dyn DialogHost>,

    template_path: PathBuf,
    template_dir: PathBuf,

    definitions: HashMap<String, ObjectDefinition>,
    main: ObjectDefinition,

    document: Document,
    roots: Vec<Box<dyn InspectorNode>>,

    tracker: ChangeTracker,
    status: String,
}

impl std::fmt::Debug for EditSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditSession")
            .field("template_path", &self.template_path)
            .field("template_dir", &self.template_dir)
            .field("definitions", &self.definitions.len())
            .field("roots", &self.roots.len())
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

impl EditSession {
    /// Start a session: load the template at `template_path`, then either
    /// load the document at `data_path` or mount a synthesized
    /// template-default document.
    ///
    /// Template failures are fatal and name the template path. Document
    /// failures are recoverable (the session is simply not created, and
    /// the caller may prompt and retry).
    pub async fn start(
        spawner: Arc<dyn InspectorSpawner>,
        dialogs: Arc<dyn DialogHost>,
        template_path: impl Into<PathBuf>,
        data_path: Option<PathBuf>,
    ) -> Result<Self, EditorError> {
        let template_path = template_path.into();

        let setup = TemplateSetup::load(&template_path)?;
        let definitions = setup.definition_map()?;
        let template_dir = template_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        info!(
            template = %template_path.display(),
            main = %setup.main_object_definition.object_type_name,
            "starting session"
        );

        let mut session = Self {
            spawner,
            dialogs,
            template_path,
            template_dir,
            definitions,
            main: setup.main_object_definition,
            document: Document::from_root(Map::new()),
            roots: Vec::new(),
            tracker: ChangeTracker::new(),
            status: String::new(),
        };

        match data_path {
            Some(path) => {
                session.load_from_file(path).await?;
            }
            None => {
                let root = default_document(&session.main, &session.definitions);
                session.mount(Document::from_root(root)).await?;
            }
        }

        Ok(session)
    }

    /// Load a document from disk and mount it. The parse happens before
    /// any teardown, so a failure leaves the current mount untouched.
    pub async fn load_from_file(
        &mut self,
        path: impl Into<PathBuf>,
    ) -> Result<MountOutcome, EditorError> {
        let document = Document::load(path.into())?;
        self.mount(document).await
    }

    /// The binding protocol. Guarded: with unsaved changes present, the
    /// user is asked first, and declining aborts with no observable
    /// effect.
    pub async fn mount(&mut self, document: Document) -> Result<MountOutcome, EditorError> {
        self.mount_with_guard(document, MountGuard::Guarded).await
    }

    async fn mount_with_guard(
        &mut self,
        document: Document,
        guard: MountGuard,
    ) -> Result<MountOutcome, EditorError> {
        if matches!(guard, MountGuard::Guarded) && self.tracker.is_changed() {
            if !self.dialogs.confirm_discard().await {
                debug!("discard declined; keeping mounted document");
                return Ok(MountOutcome::Declined);
            }
        }

        // Teardown fully releases the previous generation before any new
        // inspector exists.
        for mut inspector in self.roots.drain(..) {
            inspector.detach();
        }

        for property in &self.main.properties {
            self.roots
                .push(self.spawner.create(property, self.tracker.clone()));
        }

        // The incoming tree becomes the active document. Inspector i binds
        // to the root key at index i; order, not key names, carries the
        // correspondence.
        let keys: Vec<String> = document.root().keys().cloned().collect();
        debug_assert_eq!(
            keys.len(),
            self.roots.len(),
            "document root key count must match schema property count"
        );
        self.document = document;

        for (inspector, key) in self.roots.iter_mut().zip(&keys) {
            inspector.bind_node(NodePath::root(), key);
        }

        self.status = format!(
            "Current Template:\n\"{}\"\nCurrent Data:\n\"{}\"",
            self.template_path.display(),
            match self.document.path() {
                Some(path) => path.display().to_string(),
                None => "New Data".to_string(),
            }
        );

        info!(
            inspectors = self.roots.len(),
            data = ?self.document.path(),
            "mounted document"
        );
        Ok(MountOutcome::Mounted)
    }

    /// Discard in-memory edits: reload from the backing file, or remount a
    /// fresh template default when the document was never saved. Never
    /// prompts (force revert), and always leaves the session clean.
    pub async fn revert(&mut self) -> Result<(), EditorError> {
        let document = match self.document.path() {
            Some(path) => Document::load(path.to_path_buf())?,
            None => Document::from_root(default_document(&self.main, &self.definitions)),
        };

        self.mount_with_guard(document, MountGuard::Forced).await?;
        self.tracker.reset();
        info!("reverted session");
        Ok(())
    }

    /// Persist the current document. Without a backing file the user picks
    /// a destination (defaulting to the template's directory); cancelling
    /// writes nothing and changes nothing. Saving clears the dirty flag.
    pub async fn save(&mut self) -> Result<SaveOutcome, EditorError> {
        let target = match self.document.path() {
            Some(path) => path.to_path_buf(),
            None => match self.dialogs.pick_save_path(&self.template_dir).await {
                Some(path) => path,
                None => {
                    debug!("save cancelled");
                    return Ok(SaveOutcome::Cancelled);
                }
            },
        };

        self.document.save_to(target.clone())?;
        self.tracker.reset();
        info!(data = %target.display(), "saved document");
        Ok(SaveOutcome::Saved(target))
    }

    /// Apply one edit to the active document and mark the session dirty.
    /// The single document-write entry point for widgets.
    pub fn apply_edit(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        mutation.apply(&mut self.document)?;
        self.mark_changed();
        Ok(())
    }

    /// Record an unsaved edit. Idempotent between save/revert boundaries;
    /// reachable from any inspector depth via [`ChangeTracker`].
    pub fn mark_changed(&self) {
        if self.tracker.mark() {
            debug!(session = %self.main.object_type_name, "session marked dirty");
        }
    }

    pub fn changed(&self) -> bool {
        self.tracker.is_changed()
    }

    /// Display identity: the main type name, `(*)`-suffixed while dirty.
    pub fn title(&self) -> String {
        if self.tracker.is_changed() {
            format!("{} (*)", self.main.object_type_name)
        } else {
            self.main.object_type_name.clone()
        }
    }

    /// Template path plus data path (or the new-data sentinel).
    pub fn status_line(&self) -> &str {
        &self.status
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }

    /// Default save location: the template's containing directory.
    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// The persisted location; `None` until first saved.
    pub fn data_path(&self) -> Option<&Path> {
        self.document.path()
    }

    pub fn main_definition(&self) -> &ObjectDefinition {
        &self.main
    }

    pub fn definitions(&self) -> &HashMap<String, ObjectDefinition> {
        &self.definitions
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Root inspector row, index-aligned with the document's root keys.
    pub fn root_inspectors(&self) -> &[Box<dyn InspectorNode>] {
        &self.roots
    }

    /// Value currently bound at root position `index`.
    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.document.root().values().nth(index)
    }
}
