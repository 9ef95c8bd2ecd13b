//! Headless collaborator implementations.
//!
//! The editor core talks to widgets and dialogs through traits; in a
//! terminal there is nothing to render, so these record their bindings and
//! answer dialogs from pre-seeded decisions.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use async_trait::async_trait;
use formic_editor::{
    ChangeTracker, DialogHost, Document, InspectorNode, InspectorSpawner, NodeBinding,
    NodePath, PropertyInfo, PropertyKind, Value,
};

/// Binding record for one property, shared between the boxed node handed
/// to the session and the command that prints it.
pub struct HeadlessInspector {
    property: PropertyInfo,
    binding: Option<NodeBinding>,
    display_name: String,
}

impl HeadlessInspector {
    fn new(property: PropertyInfo) -> Self {
        let display_name = property.name.clone();
        Self {
            property,
            binding: None,
            display_name,
        }
    }

    /// One line per property: label, kind, and the bound value.
    pub fn describe(&self, document: &Document) -> String {
        let kind = kind_label(&self.property.kind);
        match self.binding.as_ref().and_then(|b| b.resolve(document)) {
            Some(value) => format!("{} ({}) = {}", self.display_name, kind, render(value)),
            None => format!("{} ({}) = <unbound>", self.display_name, kind),
        }
    }
}

fn kind_label(kind: &PropertyKind) -> String {
    match kind {
        PropertyKind::String => "string".to_string(),
        PropertyKind::Number { int: true } => "int".to_string(),
        PropertyKind::Number { int: false } => "float".to_string(),
        PropertyKind::Bool => "bool".to_string(),
        PropertyKind::Object { object_type_name } => format!("object<{}>", object_type_name),
        PropertyKind::Array { element } => format!("array<{}>", kind_label(element)),
    }
}

fn render(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "<unprintable>".to_string())
}

struct HeadlessNode(Rc<RefCell<HeadlessInspector>>);

impl InspectorNode for HeadlessNode {
    fn bind_node(&mut self, parent: NodePath, key: &str) {
        self.0.borrow_mut().binding = Some(NodeBinding::new(parent, key));
    }

    fn backing_key(&self) -> String {
        self.0
            .borrow()
            .binding
            .as_ref()
            .map(|b| b.key.clone())
            .unwrap_or_default()
    }

    fn set_backing_key(&mut self, key: &str) {
        if let Some(binding) = &mut self.0.borrow_mut().binding {
            binding.key = key.to_string();
        }
    }

    fn display_name(&self) -> String {
        self.0.borrow().display_name.clone()
    }

    fn set_display_name(&mut self, name: &str) {
        self.0.borrow_mut().display_name = name.to_string();
    }

    fn detach(&mut self) {}
}

/// Records every inspector it creates so commands can print the row the
/// session mounted.
#[derive(Default)]
pub struct HeadlessSpawner {
    created: RefCell<Vec<Rc<RefCell<HeadlessInspector>>>>,
}

impl HeadlessSpawner {
    pub fn created(&self) -> Vec<Rc<RefCell<HeadlessInspector>>> {
        self.created.borrow().clone()
    }
}

impl InspectorSpawner for HeadlessSpawner {
    fn create(&self, property: &PropertyInfo, _changes: ChangeTracker) -> Box<dyn InspectorNode> {
        let inspector = Rc::new(RefCell::new(HeadlessInspector::new(property.clone())));
        self.created.borrow_mut().push(inspector.clone());
        Box::new(HeadlessNode(inspector))
    }
}

/// Dialog decisions supplied up front; no modal presentation exists in a
/// terminal.
pub struct AutoDialogs {
    pub discard: bool,
    pub save_path: Option<PathBuf>,
}

#[async_trait]
impl DialogHost for AutoDialogs {
    async fn confirm_discard(&self) -> bool {
        self.discard
    }

    async fn pick_save_path(&self, _default_dir: &Path) -> Option<PathBuf> {
        self.save_path.clone()
    }
}
