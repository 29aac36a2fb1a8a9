//! Read-only views handed to presentation layers.
//!
//! A view borrows the page list and a [`Structure`] derived from the same
//! pages; it adds the computed stacking rank and the derived labels but
//! never changes the document.

use crate::structure::{Structure, TocEntry};
use folio_document::{BackgroundPattern, Element, ElementKind, Page, PageId, PageKind};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementView<'a> {
    #[serde(flatten)]
    pub element: &'a Element,
    /// Paint order on the page: 0 is painted first.
    pub z_order: usize,
    /// Numbering label of a sequence or part title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    /// Table of contents, on table-of-contents elements only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc: Option<&'a [TocEntry]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView<'a> {
    pub id: &'a PageId,
    #[serde(rename = "type")]
    pub kind: PageKind,
    pub background: BackgroundPattern,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<&'a str>,
    /// Footer number; standard pages only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<usize>,
    /// In page order, not paint order.
    pub elements: Vec<ElementView<'a>>,
}

impl<'a> PageView<'a> {
    /// Elements sorted by paint order.
    pub fn painted(&self) -> Vec<&ElementView<'a>> {
        let mut ordered: Vec<&ElementView<'a>> = self.elements.iter().collect();
        ordered.sort_by_key(|view| view.z_order);
        ordered
    }
}

pub fn render_page<'a>(page: &'a Page, structure: &'a Structure) -> PageView<'a> {
    // Rank by zIndex; equal values keep insertion order.
    let mut paint: Vec<usize> = (0..page.elements.len()).collect();
    paint.sort_by_key(|&idx| page.elements[idx].style.z_index);
    let mut ranks = vec![0; page.elements.len()];
    for (rank, idx) in paint.into_iter().enumerate() {
        ranks[idx] = rank;
    }

    let elements = page
        .elements
        .iter()
        .zip(ranks)
        .map(|(element, z_order)| ElementView {
            element,
            z_order,
            label: structure.label(&element.id),
            toc: (element.kind == ElementKind::Toc).then_some(structure.toc.as_slice()),
        })
        .collect();

    PageView {
        id: &page.id,
        kind: page.kind,
        background: page.background.unwrap_or_default(),
        background_color: page.background_color.as_deref(),
        background_image: page.background_image.as_deref(),
        page_number: structure.page_number(&page.id),
        elements,
    }
}

pub fn render_pages<'a>(pages: &'a [Page], structure: &'a Structure) -> Vec<PageView<'a>> {
    pages.iter().map(|page| render_page(page, structure)).collect()
}
