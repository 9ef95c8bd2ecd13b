//! Error types for the editor

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Template error: {0}")]
    Template(#[from] formic_template::TemplateError),

    #[error("Document error: {0}")]
    Document(#[from] formic_document::DocumentError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] formic_document::MutationError),
}
