//! Collection item wrapper.
//!
//! Structural adapter for array-typed properties: wraps one element's
//! inspector with positional identity and a one-shot removal affordance.
//! Array elements are keyed by their stringified index, so re-indexing a
//! slot re-keys its inspector and relabels it in one step.

use crate::inspector::InspectorNode;

/// Invoked with the wrapped inspector and its index when the removal
/// affordance fires. The owning collection removes the document element
/// and renumbers the survivors.
pub type RemoveCallback = Box<dyn FnOnce(Box<dyn InspectorNode>, usize)>;

pub struct ArrayItemSlot {
    index: usize,
    inspector: Option<Box<dyn InspectorNode>>,
    on_remove: Option<RemoveCallback>,
}

impl ArrayItemSlot {
    pub fn new(
        inspector: Box<dyn InspectorNode>,
        index: usize,
        on_remove: RemoveCallback,
    ) -> Self {
        let mut slot = Self {
            index: 0,
            inspector: Some(inspector),
            on_remove: Some(on_remove),
        };
        slot.set_index(index);
        slot
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Store the new index, re-key the wrapped inspector to its string
    /// form, and relabel it — one call, no intermediate state where key
    /// and label disagree. Inert after removal.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
        if let Some(inspector) = &mut self.inspector {
            inspector.set_backing_key(&index.to_string());
            inspector.set_display_name(&format!("Item {}", index));
        }
    }

    pub fn inspector(&self) -> Option<&dyn InspectorNode> {
        self.inspector.as_deref()
    }

    /// Fire the removal affordance. One-shot: the first call hands the
    /// inspector and current index to the owning collection's callback and
    /// detaches it; later calls are no-ops returning `false`.
    pub fn remove(&mut self) -> bool {
        match (self.on_remove.take(), self.inspector.take()) {
            (Some(callback), Some(inspector)) => {
                callback(inspector, self.index);
                true
            }
            _ => false,
        }
    }
}

/// Owning-collection helper: after removing the slot at `removed_index`,
/// shift every later slot down by one.
pub fn renumber_slots(slots: &mut [ArrayItemSlot], removed_index: usize) {
    for slot in slots {
        if slot.index() > removed_index {
            slot.set_index(slot.index() - 1);
        }
    }
}
