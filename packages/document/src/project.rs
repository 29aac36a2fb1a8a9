//! # Project
//!
//! Root persisted unit: `{ id, name, version, pages, updatedAt }`.
//!
//! ## Loading
//!
//! ```text
//! JSON text → Value → `pages` must be an array → Project → validate
//! ```
//!
//! A load either yields a fully valid project or an error; there is no
//! partially loaded state. Missing optional fields fall back to defaults, and
//! a page whose `elements` is missing or malformed loads with no elements.

use crate::element::ElementId;
use crate::error::DocumentError;
use crate::factory::PageDefaults;
use crate::ids::IdSource;
use crate::page::{Page, PageKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    pub pages: Vec<Page>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub updated_at: i64,
}

impl Project {
    pub const FORMAT_VERSION: &'static str = "2.0";

    pub fn new(id: impl Into<String>, name: impl Into<String>, pages: Vec<Page>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: Self::FORMAT_VERSION.to_string(),
            pages,
            updated_at: chrono::Utc::now().timestamp_millis(),
        }
    }

    /// Fresh project: cover, flyleaf, summary, one standard page, back cover.
    pub fn starter(ids: &mut dyn IdSource, defaults: &PageDefaults) -> Self {
        let pages = vec![
            Page::new(ids.next_id(), PageKind::Cover),
            Page::new(ids.next_id(), PageKind::Flyleaf),
            Page::summary(ids.next_id(), ids.next_id()),
            Page::standard(ids.next_id(), defaults),
            Page::new(ids.next_id(), PageKind::BackCover),
        ];
        Self::new(ids.next_id(), "", pages)
    }

    /// Parse and validate a project file.
    pub fn from_json(source: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(source)?;
        if !value.get("pages").is_some_and(|pages| pages.is_array()) {
            return Err(DocumentError::MissingPages);
        }

        let project: Project = serde_json::from_value(value)?;
        project.validate()?;

        info!(
            project_id = %project.id,
            pages = project.pages.len(),
            elements = project.element_count(),
            "Project loaded"
        );
        Ok(project)
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the structural invariants: at least one page, at most one page
    /// per structural kind, project-wide unique element ids.
    pub fn validate(&self) -> Result<(), DocumentError> {
        validate_pages(&self.pages)
    }

    /// Stamp `updated_at` with the current time.
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now().timestamp_millis();
        debug!(updated_at = self.updated_at, "Project touched");
    }

    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == id)
    }

    pub fn element_count(&self) -> usize {
        self.pages.iter().map(|page| page.elements.len()).sum()
    }

    pub fn element_ids(&self) -> HashSet<&ElementId> {
        self.pages.iter().flat_map(|page| page.element_ids()).collect()
    }
}

/// Invariants every page list must satisfy, checked on load and by the
/// editor before it adopts a page list from outside.
pub fn validate_pages(pages: &[Page]) -> Result<(), DocumentError> {
    if pages.is_empty() {
        return Err(DocumentError::NoPages);
    }

    let mut page_ids = HashSet::new();
    for page in pages {
        if !page_ids.insert(page.id.as_str()) {
            return Err(DocumentError::DuplicatePageId(page.id.clone()));
        }
    }

    let mut kinds = HashSet::new();
    for page in pages.iter().filter(|page| page.kind.is_structural()) {
        if !kinds.insert(page.kind) {
            return Err(DocumentError::DuplicateStructuralPage(page.kind));
        }
    }

    let mut seen = HashSet::new();
    for id in pages.iter().flat_map(|page| page.element_ids()) {
        if !seen.insert(id) {
            return Err(DocumentError::DuplicateElementId(id.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    #[test]
    fn test_starter_project_shape() {
        let mut ids = SequentialIds::new("starter");
        let project = Project::starter(&mut ids, &PageDefaults::default());

        let kinds: Vec<PageKind> = project.pages.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PageKind::Cover,
                PageKind::Flyleaf,
                PageKind::Summary,
                PageKind::Standard,
                PageKind::BackCover,
            ]
        );
        assert_eq!(project.version, "2.0");
        assert!(project.validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_pages() {
        let err = Project::from_json(r#"{"id":"x","name":"n"}"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingPages));

        let err = Project::from_json(r#"{"id":"x","pages":{}}"#).unwrap_err();
        assert!(matches!(err, DocumentError::MissingPages));
    }

    #[test]
    fn test_rejects_empty_pages() {
        let err = Project::from_json(r#"{"pages":[]}"#).unwrap_err();
        assert!(matches!(err, DocumentError::NoPages));
    }

    #[test]
    fn test_rejects_two_covers() {
        let json = r#"{"pages":[{"id":"a","type":"cover"},{"id":"b","type":"cover"}]}"#;
        let err = Project::from_json(json).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateStructuralPage(PageKind::Cover)));
    }

    #[test]
    fn test_rejects_duplicate_element_ids_across_pages() {
        let json = r#"{"pages":[
            {"id":"a","type":"standard","elements":[{"id":"e","type":"TEXT","x":0,"y":0,"width":1,"height":1}]},
            {"id":"b","type":"standard","elements":[{"id":"e","type":"TEXT","x":0,"y":0,"width":1,"height":1}]}
        ]}"#;
        let err = Project::from_json(json).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicateElementId(id) if id == "e"));
    }

    #[test]
    fn test_rejects_duplicate_page_ids() {
        let json = r#"{"pages":[
            {"id":"x","type":"standard","elements":[{"id":"e","type":"TEXT","x":0,"y":0,"width":1,"height":1}]},
            {"id":"x","type":"standard","elements":[]}
        ]}"#;
        let err = Project::from_json(json).unwrap_err();
        assert!(matches!(err, DocumentError::DuplicatePageId(id) if id == "x"));
    }

    #[test]
    fn test_optional_fields_default() {
        let project = Project::from_json(r#"{"pages":[{"id":"a","type":"standard"}]}"#).unwrap();
        assert_eq!(project.name, "");
        assert_eq!(project.updated_at, 0);
        assert!(project.pages[0].elements.is_empty());
    }
}
