//! Error types for loading and validating projects

use crate::element::ElementId;
use crate::page::{PageId, PageKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Project has no `pages` array")]
    MissingPages,

    #[error("Project must contain at least one page")]
    NoPages,

    #[error("Page id used twice: {0}")]
    DuplicatePageId(PageId),

    #[error("More than one {0:?} page")]
    DuplicateStructuralPage(PageKind),

    #[error("Element id used twice: {0}")]
    DuplicateElementId(ElementId),
}
