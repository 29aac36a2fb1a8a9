pub mod inspect;
pub mod new;
pub mod normalize;
pub mod validate;

pub use inspect::{inspect, InspectArgs};
pub use new::{new, NewArgs};
pub use normalize::{normalize, NormalizeArgs};
pub use validate::{validate, ValidateArgs};

use anyhow::{Context, Result};
use folio_document::Project;
use std::fs;
use std::path::Path;

/// Read and validate a project file.
pub(crate) fn read_project(path: &Path) -> Result<Project> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    Project::from_json(&source).with_context(|| format!("Invalid project {}", path.display()))
}
