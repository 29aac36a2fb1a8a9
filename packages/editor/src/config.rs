//! Editor configuration.
//!
//! Built explicitly by the host and handed to [`crate::Editor`]. Loading it
//! from disk is the host's job.

use crate::history::DEFAULT_HISTORY_LIMIT;
use folio_document::{ElementKind, ElementStyle, PageDefaults};
use folio_layout::Grid;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Snapping applied to dragged positions and resized extents.
    pub grid: Grid,
    pub history_limit: usize,
    /// Background of newly added standard pages.
    pub default_page: PageDefaults,
    /// Style overrides applied on top of the base style of new elements.
    pub element_defaults: BTreeMap<ElementKind, ElementStyle>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid: Grid::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_page: PageDefaults::default(),
            element_defaults: default_element_styles(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    pub fn element_style(&self, kind: ElementKind) -> Option<&ElementStyle> {
        self.element_defaults.get(&kind)
    }
}

fn color(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn default_element_styles() -> BTreeMap<ElementKind, ElementStyle> {
    let inter = || Some("Inter".to_string());
    BTreeMap::from([
        (
            ElementKind::Text,
            ElementStyle {
                font_size: Some(16.0),
                color: color("#000000"),
                font_family: inter(),
                background_color: color("transparent"),
                ..Default::default()
            },
        ),
        (
            ElementKind::Shape,
            ElementStyle {
                background_color: color("#cbd5e1"),
                border_width: Some(0.0),
                border_radius: Some(0.0),
                ..Default::default()
            },
        ),
        (
            ElementKind::Section,
            ElementStyle {
                border_radius: Some(12.0),
                border_width: Some(2.0),
                border_color: color("#cbd5e1"),
                background_color: color("transparent"),
                ..Default::default()
            },
        ),
        (
            ElementKind::Audio,
            ElementStyle {
                background_color: color("#ffffff"),
                border_radius: Some(12.0),
                border_width: Some(1.0),
                border_color: color("#e2e8f0"),
                box_shadow: Some("0 1px 3px 0 rgb(0 0 0 / 0.1)".to_string()),
                ..Default::default()
            },
        ),
        (
            ElementKind::SequenceTitle,
            ElementStyle {
                color: color("#ffffff"),
                background_color: color("#4f46e5"),
                font_family: inter(),
                ..Default::default()
            },
        ),
        (
            ElementKind::PartTitle,
            ElementStyle {
                color: color("#1e293b"),
                background_color: color("#f8fafc"),
                border_color: color("#4f46e5"),
                font_family: inter(),
                ..Default::default()
            },
        ),
        (
            ElementKind::H3Title,
            ElementStyle {
                color: color("#334155"),
                font_family: inter(),
                font_size: Some(18.0),
                font_weight: Some("bold".to_string()),
                ..Default::default()
            },
        ),
        (
            ElementKind::H4Title,
            ElementStyle {
                color: color("#475569"),
                font_family: inter(),
                font_size: Some(16.0),
                font_weight: Some("bold".to_string()),
                ..Default::default()
            },
        ),
        (
            ElementKind::Toc,
            ElementStyle {
                background_color: color("#ffffff"),
                ..Default::default()
            },
        ),
    ])
}
