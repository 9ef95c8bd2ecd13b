//! # Document Mutations
//!
//! Intent-preserving operations on the document tree.
//!
//! ## Semantics
//!
//! ### SetValue
//! - Atomic replacement of the node at `path`
//! - Fails if the target does not exist (never creates nodes)
//!
//! ### InsertItem
//! - Inserts into the array node at `path`; index is clamped to the length
//! - Positional identity of array elements lives in the inspector binding
//!   key, so siblings need no document-side re-keying
//!
//! ### RemoveItem
//! - Removes one array element; out-of-bounds is an error, not a clamp
//!
//! Every mutation validates before applying; a failed validation leaves
//! the document untouched.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::document::Document;
use crate::path::NodePath;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Replace the node at `path` with `value`.
    SetValue { path: NodePath, value: Value },

    /// Insert `value` into the array at `path` at `index`.
    InsertItem {
        path: NodePath,
        index: usize,
        value: Value,
    },

    /// Remove the element at `index` from the array at `path`.
    RemoveItem { path: NodePath, index: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Node not found: {0}")]
    PathNotFound(String),

    #[error("Not an array: {0}")]
    NotAnArray(String),

    #[error("Index {index} out of bounds for array {path} of length {len}")]
    IndexOutOfBounds {
        path: String,
        index: usize,
        len: usize,
    },
}

impl Mutation {
    /// Apply with validation.
    pub fn apply(&self, document: &mut Document) -> Result<(), MutationError> {
        self.validate(document)?;

        match self {
            Mutation::SetValue { path, value } => {
                let target = path
                    .resolve_mut(document.root_mut())
                    .ok_or_else(|| MutationError::PathNotFound(path.to_string()))?;
                *target = value.clone();
                Ok(())
            }

            Mutation::InsertItem { path, index, value } => {
                let items = resolve_array_mut(document, path)?;
                let insert_index = (*index).min(items.len());
                items.insert(insert_index, value.clone());
                Ok(())
            }

            Mutation::RemoveItem { path, index } => {
                let items = resolve_array_mut(document, path)?;
                if *index >= items.len() {
                    return Err(MutationError::IndexOutOfBounds {
                        path: path.to_string(),
                        index: *index,
                        len: items.len(),
                    });
                }
                items.remove(*index);
                Ok(())
            }
        }
    }

    /// Validate without applying.
    pub fn validate(&self, document: &Document) -> Result<(), MutationError> {
        match self {
            Mutation::SetValue { path, .. } => {
                path.resolve(document.root())
                    .ok_or_else(|| MutationError::PathNotFound(path.to_string()))?;
                Ok(())
            }

            Mutation::InsertItem { path, .. } => {
                resolve_array(document, path)?;
                Ok(())
            }

            Mutation::RemoveItem { path, index } => {
                let items = resolve_array(document, path)?;
                if *index >= items.len() {
                    return Err(MutationError::IndexOutOfBounds {
                        path: path.to_string(),
                        index: *index,
                        len: items.len(),
                    });
                }
                Ok(())
            }
        }
    }
}

fn resolve_array<'a>(
    document: &'a Document,
    path: &NodePath,
) -> Result<&'a Vec<Value>, MutationError> {
    match path.resolve(document.root()) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(MutationError::NotAnArray(path.to_string())),
        None => Err(MutationError::PathNotFound(path.to_string())),
    }
}

fn resolve_array_mut<'a>(
    document: &'a mut Document,
    path: &NodePath,
) -> Result<&'a mut Vec<Value>, MutationError> {
    match path.resolve_mut(document.root_mut()) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(MutationError::NotAnArray(path.to_string())),
        None => Err(MutationError::PathNotFound(path.to_string())),
    }
}
