//! Intake of externally generated content.
//!
//! A content generator hands back an opaque payload together with the kind
//! it was asked for. This module only decides where the payload goes; the
//! payload itself is stored verbatim.

use crate::mutations::{ElementPatch, Mutation, MutationError, PagePatch};
use folio_document::{ElementId, ElementKind, Page};
use serde::{Deserialize, Serialize};

/// Kind of content a generator was asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratedKind {
    Text,
    Image,
    Html,
    Svg,
    #[serde(rename = "qcm")]
    Quiz,
    /// Full-page markup for the cover.
    Cover,
    FillInTheBlanks,
    Matching,
    Timeline,
    Flashcards,
    TrueFalse,
    MindMap,
    #[serde(rename = "threed_model")]
    ThreeDModel,
    Video,
    ConnectDots,
    /// Background image of the displayed page.
    Texture,
    Audio,
}

/// Where a generated payload lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Cover,
    PageBackground,
    Element(ElementKind),
}

impl GeneratedKind {
    pub fn destination(&self) -> Destination {
        match self {
            GeneratedKind::Cover => Destination::Cover,
            GeneratedKind::Texture => Destination::PageBackground,
            GeneratedKind::Image => Destination::Element(ElementKind::Image),
            GeneratedKind::Video => Destination::Element(ElementKind::Video),
            GeneratedKind::Svg => Destination::Element(ElementKind::Svg),
            GeneratedKind::MindMap => Destination::Element(ElementKind::MindMap),
            GeneratedKind::Quiz => Destination::Element(ElementKind::Quiz),
            GeneratedKind::ThreeDModel => Destination::Element(ElementKind::ThreeDModel),
            GeneratedKind::ConnectDots => Destination::Element(ElementKind::ConnectDots),
            GeneratedKind::Audio => Destination::Element(ElementKind::Audio),
            // Exercise widgets arrive as self-contained markup
            GeneratedKind::Html
            | GeneratedKind::FillInTheBlanks
            | GeneratedKind::Matching
            | GeneratedKind::Timeline
            | GeneratedKind::Flashcards
            | GeneratedKind::TrueFalse => Destination::Element(ElementKind::Html),
            GeneratedKind::Text => Destination::Element(ElementKind::Text),
        }
    }
}

/// A generator's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub kind: GeneratedKind,
    pub content: String,
    /// Existing element to fill in place; `None` appends a new element.
    #[serde(default)]
    pub target: Option<ElementId>,
}

impl GeneratedContent {
    pub fn new(kind: GeneratedKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            target: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<ElementId>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Mutation that stores this payload, given the displayed page.
    ///
    /// An in-place fill retypes the target and strips its background and
    /// border so the generated content shows through.
    pub fn to_mutation(&self, page: &Page) -> Result<Mutation, MutationError> {
        match self.kind.destination() {
            Destination::Cover => Ok(Mutation::ReplaceCover {
                content: self.content.clone(),
            }),

            Destination::PageBackground => Ok(Mutation::UpdatePage {
                page_id: page.id.clone(),
                patch: PagePatch {
                    background_image: Some(self.content.clone()),
                    ..Default::default()
                },
            }),

            Destination::Element(kind) => match &self.target {
                Some(target) => {
                    let element = page
                        .element(target)
                        .ok_or_else(|| MutationError::ElementNotFound(target.clone()))?;
                    let mut style = element.style.clone();
                    style.background_color = Some("transparent".to_string());
                    style.border_width = Some(0.0);

                    Ok(Mutation::UpdateElement {
                        page_id: page.id.clone(),
                        element_id: target.clone(),
                        patch: ElementPatch {
                            kind: Some(kind),
                            content: Some(self.content.clone()),
                            style: Some(style),
                            ..Default::default()
                        },
                    })
                }
                None => Ok(Mutation::AddElement {
                    page_id: page.id.clone(),
                    kind,
                    content: self.content.clone(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_document::{Element, PageKind, Rect};

    fn page_with_section() -> Page {
        let section = Element::new("slot", ElementKind::Section, Rect::new(40.0, 60.0, 400.0, 300.0));
        let mut page = Page::new("p", PageKind::Standard).with_elements(vec![section]);
        page.elements[0].style.border_width = Some(2.0);
        page.elements[0].style.color = Some("#111111".to_string());
        page
    }

    #[test]
    fn test_exercise_kinds_become_markup() {
        for kind in [
            GeneratedKind::FillInTheBlanks,
            GeneratedKind::Matching,
            GeneratedKind::Timeline,
            GeneratedKind::Flashcards,
            GeneratedKind::TrueFalse,
        ] {
            assert_eq!(kind.destination(), Destination::Element(ElementKind::Html));
        }
        assert_eq!(
            GeneratedKind::Quiz.destination(),
            Destination::Element(ElementKind::Quiz)
        );
    }

    #[test]
    fn test_kind_names() {
        let kind: GeneratedKind = serde_json::from_str("\"threed_model\"").unwrap();
        assert_eq!(kind, GeneratedKind::ThreeDModel);
        let kind: GeneratedKind = serde_json::from_str("\"qcm\"").unwrap();
        assert_eq!(kind, GeneratedKind::Quiz);
    }

    #[test]
    fn test_without_target_appends() {
        let page = page_with_section();
        let mutation = GeneratedContent::new(GeneratedKind::Video, "https://v").to_mutation(&page);
        assert_eq!(
            mutation,
            Ok(Mutation::AddElement {
                page_id: "p".into(),
                kind: ElementKind::Video,
                content: "https://v".into(),
            })
        );
    }

    #[test]
    fn test_with_target_replaces_in_place() {
        let page = page_with_section();
        let mutation = GeneratedContent::new(GeneratedKind::Matching, "<div/>")
            .with_target("slot")
            .to_mutation(&page)
            .unwrap();

        let Mutation::UpdateElement { element_id, patch, .. } = mutation else {
            panic!("expected an in-place update");
        };
        assert_eq!(element_id, "slot");
        assert_eq!(patch.kind, Some(ElementKind::Html));
        let style = patch.style.unwrap();
        assert_eq!(style.border_width, Some(0.0));
        assert_eq!(style.background_color.as_deref(), Some("transparent"));
        assert_eq!(style.color.as_deref(), Some("#111111"));
    }

    #[test]
    fn test_missing_target_rejected() {
        let page = page_with_section();
        let err = GeneratedContent::new(GeneratedKind::Text, "hi")
            .with_target("ghost")
            .to_mutation(&page);
        assert_eq!(err, Err(MutationError::ElementNotFound("ghost".into())));
    }

    #[test]
    fn test_texture_sets_background_image() {
        let page = page_with_section();
        let mutation = GeneratedContent::new(GeneratedKind::Texture, "data:image/png;base64,AA")
            .to_mutation(&page)
            .unwrap();
        let Mutation::UpdatePage { page_id, patch } = mutation else {
            panic!("expected a page update");
        };
        assert_eq!(page_id, "p");
        assert_eq!(patch.background_image.as_deref(), Some("data:image/png;base64,AA"));
    }
}
