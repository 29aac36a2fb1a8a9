//! Error types for the editor

use folio_document::{DocumentError, PageId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Mutation error: {0}")]
    Mutation(#[from] crate::mutations::MutationError),

    #[error("Page not found: {0}")]
    PageNotFound(PageId),
}
