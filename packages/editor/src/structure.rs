//! # Structure Derivation
//!
//! Sequence/part numbering and the table of contents, derived from the page
//! list on every read. Nothing here is stored in the project.
//!
//! ## Rules
//!
//! - Only standard pages count. They are numbered 1, 2, ... in page order.
//! - Within a page, elements are visited top to bottom (stable for equal `y`).
//! - A sequence title gets `SÉQUENCE n` and restarts part numbering.
//! - A part title gets `n.m`, where `n` is the current sequence (0 before the
//!   first one).
//!
//! Any consumer that needs labels (live view, static export) goes through
//! [`derive_structure`] or the serialised [`Structure`], so both agree.

use folio_document::{Element, ElementId, ElementKind, Page, PageId, PageKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One line of the table of contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    /// Ordinal of the standard page holding the title.
    pub page_num: usize,
    /// The title element's content.
    pub title: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub id: ElementId,
    pub target_page_id: PageId,
}

/// Derived numbering of a page list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Structure {
    #[serde(rename = "numberingMap")]
    pub labels: BTreeMap<ElementId, String>,
    #[serde(rename = "tocList")]
    pub toc: Vec<TocEntry>,
    /// Ordinal of every standard page.
    pub page_numbers: BTreeMap<PageId, usize>,
}

impl Structure {
    pub fn label(&self, element_id: &str) -> Option<&str> {
        self.labels.get(element_id).map(String::as_str)
    }

    pub fn page_number(&self, page_id: &str) -> Option<usize> {
        self.page_numbers.get(page_id).copied()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Number every sequence and part title and list them in reading order.
pub fn derive_structure(pages: &[Page]) -> Structure {
    let mut structure = Structure::default();
    let mut sequence = 0usize;
    let mut part = 0usize;
    let mut page_num = 0usize;

    for page in pages.iter().filter(|page| page.kind == PageKind::Standard) {
        page_num += 1;
        structure.page_numbers.insert(page.id.clone(), page_num);

        let mut ordered: Vec<&Element> = page.elements.iter().collect();
        ordered.sort_by(|a, b| a.y.total_cmp(&b.y));

        for element in ordered {
            let label = match element.kind {
                ElementKind::SequenceTitle => {
                    sequence += 1;
                    part = 0;
                    format!("SÉQUENCE {sequence}")
                }
                ElementKind::PartTitle => {
                    part += 1;
                    format!("{sequence}.{part}")
                }
                _ => continue,
            };

            structure.labels.insert(element.id.clone(), label.clone());
            structure.toc.push(TocEntry {
                page_num,
                title: element.content.clone(),
                label,
                kind: element.kind,
                id: element.id.clone(),
                target_page_id: page.id.clone(),
            });
        }
    }

    structure
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_document::Rect;

    fn title(id: &str, kind: ElementKind, y: f64, content: &str) -> Element {
        Element::new(id, kind, Rect::new(0.0, y, 100.0, 40.0)).with_content(content)
    }

    fn labels(structure: &Structure) -> Vec<(&str, &str)> {
        structure
            .toc
            .iter()
            .map(|entry| (entry.id.as_str(), entry.label.as_str()))
            .collect()
    }

    #[test]
    fn test_numbering_follows_vertical_order() {
        let pages = vec![Page::new("p1", PageKind::Standard).with_elements(vec![
            title("part-b", ElementKind::PartTitle, 300.0, "B"),
            title("seq", ElementKind::SequenceTitle, 0.0, "Intro"),
            title("part-a", ElementKind::PartTitle, 100.0, "A"),
            title("text", ElementKind::Text, 50.0, "ignored"),
        ])];

        let structure = derive_structure(&pages);
        assert_eq!(
            labels(&structure),
            vec![("seq", "SÉQUENCE 1"), ("part-a", "1.1"), ("part-b", "1.2")]
        );
        assert_eq!(structure.label("part-b"), Some("1.2"));
        assert_eq!(structure.label("text"), None);
        assert_eq!(structure.toc[0].title, "Intro");
    }

    #[test]
    fn test_part_counter_resets_per_sequence() {
        let pages = vec![
            Page::new("p1", PageKind::Standard).with_elements(vec![
                title("s1", ElementKind::SequenceTitle, 0.0, ""),
                title("p11", ElementKind::PartTitle, 100.0, ""),
            ]),
            Page::new("p2", PageKind::Standard).with_elements(vec![
                title("p12", ElementKind::PartTitle, 0.0, ""),
                title("s2", ElementKind::SequenceTitle, 100.0, ""),
                title("p21", ElementKind::PartTitle, 200.0, ""),
            ]),
        ];

        let structure = derive_structure(&pages);
        assert_eq!(
            labels(&structure),
            vec![
                ("s1", "SÉQUENCE 1"),
                ("p11", "1.1"),
                ("p12", "1.2"),
                ("s2", "SÉQUENCE 2"),
                ("p21", "2.1"),
            ]
        );
        assert_eq!(structure.toc[2].page_num, 2);
        assert_eq!(structure.toc[2].target_page_id, "p2");
    }

    #[test]
    fn test_part_before_any_sequence() {
        let pages = vec![Page::new("p", PageKind::Standard)
            .with_elements(vec![title("orphan", ElementKind::PartTitle, 0.0, "")])];
        assert_eq!(derive_structure(&pages).label("orphan"), Some("0.1"));
    }

    #[test]
    fn test_structural_pages_not_counted() {
        let pages = vec![
            Page::new("cover", PageKind::Cover)
                .with_elements(vec![title("hidden", ElementKind::SequenceTitle, 0.0, "")]),
            Page::new("summary", PageKind::Summary),
            Page::new("p1", PageKind::Standard),
            Page::new("p2", PageKind::Standard)
                .with_elements(vec![title("seq", ElementKind::SequenceTitle, 0.0, "")]),
        ];

        let structure = derive_structure(&pages);
        assert_eq!(structure.label("hidden"), None);
        assert_eq!(structure.label("seq"), Some("SÉQUENCE 1"));
        assert_eq!(structure.toc[0].page_num, 2);
        assert_eq!(structure.page_number("p1"), Some(1));
        assert_eq!(structure.page_number("cover"), None);
    }

    #[test]
    fn test_equal_tops_keep_page_order() {
        let pages = vec![Page::new("p", PageKind::Standard).with_elements(vec![
            title("first", ElementKind::PartTitle, 10.0, ""),
            title("second", ElementKind::PartTitle, 10.0, ""),
        ])];
        let structure = derive_structure(&pages);
        assert_eq!(labels(&structure), vec![("first", "0.1"), ("second", "0.2")]);
    }

    #[test]
    fn test_export_json_names() {
        let pages = vec![Page::new("p", PageKind::Standard)
            .with_elements(vec![title("seq", ElementKind::SequenceTitle, 0.0, "T")])];
        let json: serde_json::Value =
            serde_json::from_str(&derive_structure(&pages).to_json().unwrap()).unwrap();

        assert_eq!(json["numberingMap"]["seq"], "SÉQUENCE 1");
        assert_eq!(json["tocList"][0]["pageNum"], 1);
        assert_eq!(json["tocList"][0]["type"], "SEQUENCE_TITLE");
        assert_eq!(json["tocList"][0]["targetPageId"], "p");
    }
}
