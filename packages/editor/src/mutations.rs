//! # Page and Element Mutations
//!
//! Semantic edits on the page list of a project.
//!
//! ## Design Principles
//!
//! 1. **Pure**: `apply` reads the current pages and returns a new list; the
//!    caller decides whether to commit it
//! 2. **Validated**: unknown pages/elements and structural violations are
//!    rejected before anything is produced
//! 3. **Fresh identities**: every page or element a mutation creates gets an
//!    id that is not present anywhere in the project
//!
//! ## Mutation Semantics
//!
//! ### AddPage
//! - Standard page inserted after the given page, never after the back cover
//!
//! ### DeletePage
//! - Rejected when it would leave the project without pages
//!
//! ### ToggleStructure
//! - Removes the page of that kind, or inserts one in its canonical slot
//!
//! ### AddElement / PasteElements
//! - The page is passed through collision resolution afterwards

use crate::config::EditorConfig;
use folio_document::{
    BackgroundPattern, Element, ElementId, ElementKind, ElementStyle, IdSource, Page, PageId,
    PageKind, Rect, PAGE_HEIGHT, PAGE_WIDTH,
};
use folio_layout::resolve_in_place;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Offset applied to pasted copies relative to their originals.
pub const PASTE_OFFSET: f64 = 20.0;

/// Page fields to overwrite; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PagePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
}

impl PagePatch {
    fn apply_to(&self, page: &mut Page) {
        if let Some(background) = self.background {
            page.background = Some(background);
        }
        if let Some(color) = &self.background_color {
            page.background_color = Some(color.clone());
        }
        if let Some(image) = &self.background_image {
            page.background_image = Some(image.clone());
        }
    }
}

/// Element fields to overwrite; `None` leaves a field alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ElementKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Replaces the whole style record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ElementStyle>,
}

impl ElementPatch {
    pub fn geometry(rect: Rect) -> Self {
        Self {
            x: Some(rect.x),
            y: Some(rect.y),
            width: Some(rect.width),
            height: Some(rect.height),
            ..Default::default()
        }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    fn apply_to(&self, element: &mut Element) {
        if let Some(kind) = self.kind {
            element.kind = kind;
        }
        if let Some(x) = self.x {
            element.x = x;
        }
        if let Some(y) = self.y {
            element.y = y;
        }
        if let Some(width) = self.width {
            element.width = width;
        }
        if let Some(height) = self.height {
            element.height = height;
        }
        if let Some(content) = &self.content {
            element.content = content.clone();
        }
        if let Some(style) = &self.style {
            element.style = style.clone();
        }
    }
}

/// Semantic edits on the page list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert an empty standard page after `after` (or at the end)
    AddPage { after: Option<PageId> },

    DeletePage { page_id: PageId },

    /// Copy a standard page with fresh page and element ids
    DuplicatePage { page_id: PageId },

    /// Remove the page of a structural kind, or create it
    ToggleStructure { kind: PageKind },

    UpdatePage { page_id: PageId, patch: PagePatch },

    /// New element with the type's default geometry and configured style
    AddElement {
        page_id: PageId,
        kind: ElementKind,
        content: String,
    },

    UpdateElement {
        page_id: PageId,
        element_id: ElementId,
        patch: ElementPatch,
    },

    /// Remove elements; ids not on the page are ignored
    DeleteElements {
        page_id: PageId,
        element_ids: Vec<ElementId>,
    },

    /// Append copies of `elements` with fresh ids, offset by [`PASTE_OFFSET`]
    PasteElements {
        page_id: PageId,
        elements: Vec<Element>,
    },

    /// Make the cover a single full-page markup element, creating the cover
    /// page when missing
    ReplaceCover { content: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Page not found: {0}")]
    PageNotFound(PageId),

    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    #[error("Cannot delete the last page")]
    LastPage,

    #[error("{0:?} pages cannot be duplicated")]
    StructuralDuplicate(PageKind),

    #[error("Standard pages cannot be toggled")]
    NotStructural,
}

/// Page the editor should display after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum Focus {
    Unchanged,
    /// Switch to this page.
    Page(PageId),
    /// Switch to this page only if the displayed page no longer exists.
    Fallback(PageId),
}

/// Outcome of a successful mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    pub pages: Vec<Page>,
    pub focus: Focus,
    /// Replacement selection, when the mutation created elements.
    pub select: Option<Vec<ElementId>>,
}

impl MutationResult {
    fn unchanged_focus(pages: Vec<Page>) -> Self {
        Self {
            pages,
            focus: Focus::Unchanged,
            select: None,
        }
    }
}

impl Mutation {
    /// Apply to `pages`, producing the next page list.
    pub fn apply(
        &self,
        pages: &[Page],
        ids: &mut dyn IdSource,
        config: &EditorConfig,
    ) -> Result<MutationResult, MutationError> {
        let mut minter = Minter::new(ids, pages);
        let pages = pages.to_vec();

        match self {
            Mutation::AddPage { after } => {
                Self::apply_add_page(pages, after.as_deref(), &mut minter, config)
            }

            Mutation::DeletePage { page_id } => Self::apply_delete_page(pages, page_id),

            Mutation::DuplicatePage { page_id } => {
                Self::apply_duplicate_page(pages, page_id, &mut minter)
            }

            Mutation::ToggleStructure { kind } => {
                Self::apply_toggle_structure(pages, *kind, &mut minter)
            }

            Mutation::UpdatePage { page_id, patch } => {
                let mut pages = pages;
                let index = page_index(&pages, page_id)?;
                patch.apply_to(&mut pages[index]);
                Ok(MutationResult::unchanged_focus(pages))
            }

            Mutation::AddElement { page_id, kind, content } => {
                Self::apply_add_element(pages, page_id, *kind, content, &mut minter, config)
            }

            Mutation::UpdateElement { page_id, element_id, patch } => {
                let mut pages = pages;
                let index = page_index(&pages, page_id)?;
                let element = pages[index]
                    .element_mut(element_id)
                    .ok_or_else(|| MutationError::ElementNotFound(element_id.clone()))?;
                patch.apply_to(element);
                Ok(MutationResult::unchanged_focus(pages))
            }

            Mutation::DeleteElements { page_id, element_ids } => {
                let mut pages = pages;
                let index = page_index(&pages, page_id)?;
                let doomed: HashSet<&ElementId> = element_ids.iter().collect();
                pages[index].elements.retain(|el| !doomed.contains(&el.id));
                Ok(MutationResult::unchanged_focus(pages))
            }

            Mutation::PasteElements { page_id, elements } => {
                Self::apply_paste(pages, page_id, elements, &mut minter)
            }

            Mutation::ReplaceCover { content } => {
                Self::apply_replace_cover(pages, content, &mut minter)
            }
        }
    }

    /// Short description recorded with the history entry.
    pub fn label(&self) -> &'static str {
        match self {
            Mutation::AddPage { .. } => "Add page",
            Mutation::DeletePage { .. } => "Delete page",
            Mutation::DuplicatePage { .. } => "Duplicate page",
            Mutation::ToggleStructure { .. } => "Toggle structure page",
            Mutation::UpdatePage { .. } => "Update page",
            Mutation::AddElement { .. } => "Add element",
            Mutation::UpdateElement { .. } => "Update element",
            Mutation::DeleteElements { .. } => "Delete elements",
            Mutation::PasteElements { .. } => "Paste",
            Mutation::ReplaceCover { .. } => "Replace cover",
        }
    }

    fn apply_add_page(
        mut pages: Vec<Page>,
        after: Option<&str>,
        minter: &mut Minter<'_>,
        config: &EditorConfig,
    ) -> Result<MutationResult, MutationError> {
        let mut index = after
            .and_then(|id| pages.iter().position(|page| page.id == id))
            .map_or(pages.len(), |i| i + 1);

        // The back cover stays last
        if let Some(back) = pages.iter().position(|page| page.kind == PageKind::BackCover) {
            index = index.min(back);
        }

        let page = Page::standard(minter.mint(), &config.default_page);
        let page_id = page.id.clone();
        pages.insert(index, page);

        Ok(MutationResult {
            pages,
            focus: Focus::Page(page_id),
            select: None,
        })
    }

    fn apply_delete_page(
        mut pages: Vec<Page>,
        page_id: &str,
    ) -> Result<MutationResult, MutationError> {
        let index = page_index(&pages, page_id)?;
        if pages.len() <= 1 {
            return Err(MutationError::LastPage);
        }

        pages.remove(index);
        let fallback = pages[index.saturating_sub(1)].id.clone();

        Ok(MutationResult {
            pages,
            focus: Focus::Fallback(fallback),
            select: None,
        })
    }

    fn apply_duplicate_page(
        mut pages: Vec<Page>,
        page_id: &str,
        minter: &mut Minter<'_>,
    ) -> Result<MutationResult, MutationError> {
        let index = page_index(&pages, page_id)?;
        let kind = pages[index].kind;
        if kind.is_structural() {
            return Err(MutationError::StructuralDuplicate(kind));
        }

        let mut copy = pages[index].clone();
        copy.id = minter.mint();
        for element in &mut copy.elements {
            element.id = minter.mint();
        }

        let copy_id = copy.id.clone();
        pages.insert(index + 1, copy);

        Ok(MutationResult {
            pages,
            focus: Focus::Page(copy_id),
            select: None,
        })
    }

    fn apply_toggle_structure(
        mut pages: Vec<Page>,
        kind: PageKind,
        minter: &mut Minter<'_>,
    ) -> Result<MutationResult, MutationError> {
        if !kind.is_structural() {
            return Err(MutationError::NotStructural);
        }

        if let Some(index) = pages.iter().position(|page| page.kind == kind) {
            if pages.len() <= 1 {
                return Err(MutationError::LastPage);
            }
            pages.remove(index);
            let fallback = pages[0].id.clone();
            return Ok(MutationResult {
                pages,
                focus: Focus::Fallback(fallback),
                select: None,
            });
        }

        let page = match kind {
            PageKind::Summary => Page::summary(minter.mint(), minter.mint()),
            _ => Page::new(minter.mint(), kind),
        };

        let position = |kind: PageKind| pages.iter().position(|page| page.kind == kind);
        let index = match kind {
            PageKind::Cover => 0,
            PageKind::Flyleaf => position(PageKind::Cover).map_or(0, |i| i + 1),
            PageKind::Summary => position(PageKind::Flyleaf)
                .or_else(|| position(PageKind::Cover))
                .map_or(0, |i| i + 1),
            PageKind::BackCover | PageKind::Standard => pages.len(),
        };

        let page_id = page.id.clone();
        pages.insert(index, page);

        Ok(MutationResult {
            pages,
            focus: Focus::Page(page_id),
            select: None,
        })
    }

    fn apply_add_element(
        mut pages: Vec<Page>,
        page_id: &str,
        kind: ElementKind,
        content: &str,
        minter: &mut Minter<'_>,
        config: &EditorConfig,
    ) -> Result<MutationResult, MutationError> {
        let index = page_index(&pages, page_id)?;
        let page = &mut pages[index];

        let element = Element::create(
            minter.mint(),
            kind,
            content,
            &page.elements,
            config.element_style(kind),
        );
        let element_id = element.id.clone();
        page.elements.push(element);
        resolve_in_place(&mut page.elements);

        Ok(MutationResult {
            pages,
            focus: Focus::Unchanged,
            select: Some(vec![element_id]),
        })
    }

    fn apply_paste(
        mut pages: Vec<Page>,
        page_id: &str,
        elements: &[Element],
        minter: &mut Minter<'_>,
    ) -> Result<MutationResult, MutationError> {
        let index = page_index(&pages, page_id)?;

        let copies: Vec<Element> = elements
            .iter()
            .map(|original| {
                let mut copy = original.clone_with_id(minter.mint());
                copy.x += PASTE_OFFSET;
                copy.y += PASTE_OFFSET;
                copy
            })
            .collect();
        let pasted: Vec<ElementId> = copies.iter().map(|el| el.id.clone()).collect();

        let page = &mut pages[index];
        page.elements.extend(copies);
        resolve_in_place(&mut page.elements);

        Ok(MutationResult {
            pages,
            focus: Focus::Unchanged,
            select: Some(pasted),
        })
    }

    fn apply_replace_cover(
        mut pages: Vec<Page>,
        content: &str,
        minter: &mut Minter<'_>,
    ) -> Result<MutationResult, MutationError> {
        let cover = Element::new(
            minter.mint(),
            ElementKind::Html,
            Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT),
        )
        .with_content(content)
        .with_style(ElementStyle {
            z_index: 1,
            background_color: Some("white".to_string()),
            border_width: Some(0.0),
            border_color: Some("transparent".to_string()),
            box_shadow: Some("none".to_string()),
            ..Default::default()
        });

        match pages.iter().position(|page| page.kind == PageKind::Cover) {
            Some(index) => pages[index].elements = vec![cover],
            None => {
                let page = Page::new(minter.mint(), PageKind::Cover).with_elements(vec![cover]);
                pages.insert(0, page);
            }
        }

        Ok(MutationResult::unchanged_focus(pages))
    }
}

fn page_index(pages: &[Page], page_id: &str) -> Result<usize, MutationError> {
    pages
        .iter()
        .position(|page| page.id == page_id)
        .ok_or_else(|| MutationError::PageNotFound(page_id.to_string()))
}

/// Draws ids from an [`IdSource`], skipping any already used in the project.
struct Minter<'a> {
    source: &'a mut dyn IdSource,
    taken: HashSet<String>,
}

impl<'a> Minter<'a> {
    fn new(source: &'a mut dyn IdSource, pages: &[Page]) -> Self {
        let taken = pages
            .iter()
            .flat_map(|page| std::iter::once(&page.id).chain(page.element_ids()))
            .cloned()
            .collect();
        Self { source, taken }
    }

    fn mint(&mut self) -> String {
        loop {
            let id = self.source.next_id();
            if self.taken.insert(id.clone()) {
                return id;
            }
        }
    }
}
