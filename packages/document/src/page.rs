//! Pages.
//!
//! # Invariants
//! - At most one page of each structural kind (cover, flyleaf, summary,
//!   back cover) exists in a project; standard pages are unbounded.
//! - Element order is insertion order. It carries no rendering meaning since
//!   every element has explicit geometry and stacking order.

use crate::element::{Element, ElementId};
use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a page.
pub type PageId = String;

/// Structural role of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Cover,
    /// Blank sheet following the cover.
    #[serde(rename = "white")]
    Flyleaf,
    Summary,
    Standard,
    BackCover,
}

impl PageKind {
    /// Kinds limited to a single page per project.
    pub const STRUCTURAL: [PageKind; 4] = [
        PageKind::Cover,
        PageKind::Flyleaf,
        PageKind::Summary,
        PageKind::BackCover,
    ];

    pub fn is_structural(&self) -> bool {
        !matches!(self, PageKind::Standard)
    }
}

/// Named ruled/grid/dotted background pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPattern {
    #[default]
    None,
    Lines,
    Grid,
    /// French ruled paper.
    Seyes,
    Dots,
}

/// One document sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    #[serde(rename = "type")]
    pub kind: PageKind,
    #[serde(default, deserialize_with = "lenient_elements")]
    pub elements: Vec<Element>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundPattern>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl Page {
    pub fn new(id: impl Into<PageId>, kind: PageKind) -> Self {
        Self {
            id: id.into(),
            kind,
            elements: Vec::new(),
            background: None,
            background_color: None,
            background_image: None,
        }
    }

    pub fn with_elements(mut self, elements: Vec<Element>) -> Self {
        self.elements = elements;
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.element(id).is_some()
    }

    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(|el| &el.id)
    }
}

/// `elements` that is absent, `null` or not an array reads as empty.
fn lenient_elements<'de, D>(deserializer: D) -> Result<Vec<Element>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => {
            serde_json::from_value(value).map_err(serde::de::Error::custom)
        }
        _ => Ok(Vec::new()),
    }
}
