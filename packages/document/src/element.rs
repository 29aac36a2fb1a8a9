//! Page elements.
//!
//! # Invariants
//! - `id` is unique across the whole project, not just the page.
//! - `content` is stored verbatim; its format is given by
//!   [`ElementKind::content_format`] but is never validated here.

use crate::geometry::Rect;
use crate::style::ElementStyle;
use serde::{Deserialize, Serialize};

/// Stable identifier of an element.
pub type ElementId = String;

/// Closed set of element types.
///
/// Serialized with the tags used by persisted project files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ElementKind {
    Text,
    Image,
    Shape,
    /// Empty placeholder that generated content may later replace.
    Section,
    /// Raw HTML embed.
    Html,
    Svg,
    #[serde(rename = "QCM")]
    Quiz,
    SequenceTitle,
    PartTitle,
    H3Title,
    H4Title,
    /// Table of contents.
    Toc,
    FillInTheBlanks,
    Matching,
    Timeline,
    Flashcards,
    TrueFalse,
    MindMap,
    #[serde(rename = "THREED_MODEL")]
    ThreeDModel,
    Video,
    QrCode,
    ConnectDots,
    Audio,
}

/// Format of an element's `content` payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentFormat {
    /// Plain text.
    Text,
    /// Image data URI or URL.
    DataUri,
    /// Media or link URL.
    Url,
    /// JSON-encoded structured data.
    Json,
    /// HTML or SVG markup.
    Markup,
    /// ASCII STL mesh.
    Stl,
    /// No content.
    Empty,
}

impl ElementKind {
    pub const ALL: [ElementKind; 23] = [
        ElementKind::Text,
        ElementKind::Image,
        ElementKind::Shape,
        ElementKind::Section,
        ElementKind::Html,
        ElementKind::Svg,
        ElementKind::Quiz,
        ElementKind::SequenceTitle,
        ElementKind::PartTitle,
        ElementKind::H3Title,
        ElementKind::H4Title,
        ElementKind::Toc,
        ElementKind::FillInTheBlanks,
        ElementKind::Matching,
        ElementKind::Timeline,
        ElementKind::Flashcards,
        ElementKind::TrueFalse,
        ElementKind::MindMap,
        ElementKind::ThreeDModel,
        ElementKind::Video,
        ElementKind::QrCode,
        ElementKind::ConnectDots,
        ElementKind::Audio,
    ];

    pub fn content_format(&self) -> ContentFormat {
        match self {
            ElementKind::Text
            | ElementKind::SequenceTitle
            | ElementKind::PartTitle
            | ElementKind::H3Title
            | ElementKind::H4Title => ContentFormat::Text,
            ElementKind::Image => ContentFormat::DataUri,
            ElementKind::Video | ElementKind::Audio | ElementKind::QrCode => ContentFormat::Url,
            ElementKind::Quiz | ElementKind::ConnectDots => ContentFormat::Json,
            ElementKind::Html
            | ElementKind::Svg
            | ElementKind::FillInTheBlanks
            | ElementKind::Matching
            | ElementKind::Timeline
            | ElementKind::Flashcards
            | ElementKind::TrueFalse
            | ElementKind::MindMap => ContentFormat::Markup,
            ElementKind::ThreeDModel => ContentFormat::Stl,
            ElementKind::Shape | ElementKind::Section | ElementKind::Toc => ContentFormat::Empty,
        }
    }

    /// Types whose embedded content can take pointer input after a
    /// double-click.
    pub fn is_interactive(&self) -> bool {
        match self {
            ElementKind::Html
            | ElementKind::Quiz
            | ElementKind::Video
            | ElementKind::ThreeDModel
            | ElementKind::MindMap
            | ElementKind::ConnectDots
            | ElementKind::Audio => true,
            ElementKind::Text
            | ElementKind::Image
            | ElementKind::Shape
            | ElementKind::Section
            | ElementKind::Svg
            | ElementKind::SequenceTitle
            | ElementKind::PartTitle
            | ElementKind::H3Title
            | ElementKind::H4Title
            | ElementKind::Toc
            | ElementKind::FillInTheBlanks
            | ElementKind::Matching
            | ElementKind::Timeline
            | ElementKind::Flashcards
            | ElementKind::TrueFalse
            | ElementKind::QrCode => false,
        }
    }

    /// Types that receive a sequence/part label.
    pub fn is_numbered(&self) -> bool {
        matches!(self, ElementKind::SequenceTitle | ElementKind::PartTitle)
    }
}

/// A positioned, typed content block on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub style: ElementStyle,
}

impl Element {
    pub fn new(id: impl Into<ElementId>, kind: ElementKind, rect: Rect) -> Self {
        Self {
            id: id.into(),
            kind,
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            content: String::new(),
            style: ElementStyle::default(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x;
        self.y = rect.y;
        self.width = rect.width;
        self.height = rect.height;
    }

    /// Copy with a different identity; everything else is kept by value.
    pub fn clone_with_id(&self, id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }
}
