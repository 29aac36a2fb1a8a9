//! Pure constructors for new pages and elements.
//!
//! Every element type has its own default size, placement rule and
//! placeholder content. Nothing here mutates an existing page: callers get a
//! fresh value and insert it themselves.

use crate::element::{Element, ElementId, ElementKind};
use crate::geometry::{Rect, PAGE_WIDTH};
use crate::page::{BackgroundPattern, Page, PageId, PageKind};
use crate::style::{ElementStyle, TextAlign};
use serde::{Deserialize, Serialize};

const MARGIN: f64 = 40.0;
const STACK_GAP: f64 = 20.0;

/// Defaults applied to newly created standard pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDefaults {
    pub background_color: String,
    pub background: BackgroundPattern,
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self {
            background_color: "#ffffff".to_string(),
            background: BackgroundPattern::None,
        }
    }
}

/// Where a new element lands on its page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Placement {
    /// Left margin, below the lowest existing element.
    Flow,
    /// Flush left and slightly raised, spanning the page.
    FullBleed,
    /// Fixed coordinates.
    At(f64, f64),
}

/// Default geometry and content for one element type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTemplate {
    pub width: f64,
    pub height: f64,
    pub placement: Placement,
    pub placeholder: Option<&'static str>,
}

impl ElementTemplate {
    const fn sized(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            placement: Placement::Flow,
            placeholder: None,
        }
    }

    const fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }
}

impl ElementKind {
    pub fn template(&self) -> ElementTemplate {
        match self {
            ElementKind::Text => ElementTemplate::sized(300.0, 100.0).with_placeholder("Texte..."),
            ElementKind::Section => ElementTemplate::sized(400.0, 300.0),
            ElementKind::Quiz => ElementTemplate::sized(400.0, 350.0),
            ElementKind::Video => ElementTemplate::sized(400.0, 225.0),
            ElementKind::QrCode => {
                ElementTemplate::sized(150.0, 150.0).with_placeholder("https://www.google.com")
            }
            ElementKind::ConnectDots => ElementTemplate::sized(400.0, 400.0),
            ElementKind::Audio => ElementTemplate::sized(300.0, 60.0),
            ElementKind::SequenceTitle => ElementTemplate {
                placement: Placement::FullBleed,
                ..ElementTemplate::sized(PAGE_WIDTH, 150.0).with_placeholder("TITRE SÉQUENCE")
            },
            ElementKind::PartTitle => {
                ElementTemplate::sized(500.0, 60.0).with_placeholder("TITRE PARTIE")
            }
            ElementKind::H3Title => {
                ElementTemplate::sized(400.0, 50.0).with_placeholder("Sous-titre H3")
            }
            ElementKind::H4Title => {
                ElementTemplate::sized(300.0, 40.0).with_placeholder("Sous-titre H4")
            }
            ElementKind::Toc => ElementTemplate {
                placement: Placement::At(MARGIN, MARGIN),
                ..ElementTemplate::sized(PAGE_WIDTH - 2.0 * MARGIN, 800.0)
            },
            ElementKind::Image
            | ElementKind::Shape
            | ElementKind::Html
            | ElementKind::Svg
            | ElementKind::FillInTheBlanks
            | ElementKind::Matching
            | ElementKind::Timeline
            | ElementKind::Flashcards
            | ElementKind::TrueFalse
            | ElementKind::MindMap
            | ElementKind::ThreeDModel => ElementTemplate::sized(200.0, 200.0),
        }
    }
}

/// Top edge for a flow-placed element: one gap below the lowest existing
/// element, or below the top margin on an empty page.
pub fn next_free_top(elements: &[Element]) -> f64 {
    let lowest = elements
        .iter()
        .map(|el| el.y + el.height)
        .fold(None, |acc: Option<f64>, bottom| {
            Some(acc.map_or(bottom, |a| a.max(bottom)))
        })
        .unwrap_or(MARGIN);
    lowest + STACK_GAP
}

/// Style every new element starts from before per-type overrides.
pub fn base_style(z_index: i64) -> ElementStyle {
    ElementStyle {
        font_size: Some(16.0),
        font_weight: None,
        color: Some("#000000".to_string()),
        background_color: Some("transparent".to_string()),
        font_family: Some("Inter".to_string()),
        text_align: Some(TextAlign::Left),
        border_radius: Some(0.0),
        border_width: Some(0.0),
        border_color: Some("#cbd5e1".to_string()),
        z_index,
        box_shadow: Some("none".to_string()),
    }
}

impl Element {
    /// New element of `kind` for a page currently holding `siblings`.
    ///
    /// Empty `content` falls back to the type's placeholder. The element
    /// stacks above all siblings.
    pub fn create(
        id: impl Into<ElementId>,
        kind: ElementKind,
        content: impl Into<String>,
        siblings: &[Element],
        overrides: Option<&ElementStyle>,
    ) -> Element {
        let template = kind.template();
        let top = next_free_top(siblings);
        let (x, y) = match template.placement {
            Placement::Flow => (MARGIN, top),
            Placement::FullBleed => (0.0, (top - STACK_GAP).max(0.0)),
            Placement::At(x, y) => (x, y),
        };

        let mut content = content.into();
        if content.is_empty() {
            if let Some(placeholder) = template.placeholder {
                content = placeholder.to_string();
            }
        }

        let mut style = base_style(siblings.len() as i64 + 1);
        if let Some(overrides) = overrides {
            style = style.merged(overrides);
        }

        Element::new(id, kind, Rect::new(x, y, template.width, template.height))
            .with_content(content)
            .with_style(style)
    }

    /// Table of contents element placed on a fresh summary page.
    pub fn summary_toc(id: impl Into<ElementId>) -> Element {
        let template = ElementKind::Toc.template();
        Element::new(
            id,
            ElementKind::Toc,
            Rect::new(MARGIN, MARGIN, template.width, template.height),
        )
        .with_style(ElementStyle {
            z_index: 1,
            background_color: Some("transparent".to_string()),
            border_width: Some(0.0),
            border_color: Some("transparent".to_string()),
            box_shadow: Some("none".to_string()),
            ..Default::default()
        })
    }
}

impl Page {
    /// Empty standard page carrying the configured background.
    pub fn standard(id: impl Into<PageId>, defaults: &PageDefaults) -> Page {
        let mut page = Page::new(id, PageKind::Standard);
        page.background_color = Some(defaults.background_color.clone());
        page.background = Some(defaults.background);
        page
    }

    /// Summary page with its table of contents.
    pub fn summary(id: impl Into<PageId>, toc_id: impl Into<ElementId>) -> Page {
        Page::new(id, PageKind::Summary).with_elements(vec![Element::summary_toc(toc_id)])
    }
}
