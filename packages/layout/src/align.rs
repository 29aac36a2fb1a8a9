//! Alignment and distribution of a selection.
//!
//! Each operation computes one reference value across the selected elements
//! (min, max or centre) and moves every selected element onto it. Collision
//! resolution is deliberately not applied afterwards.

use folio_document::Element;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
    /// Even spacing of left edges between the leftmost and rightmost.
    #[serde(rename = "distribute-h")]
    DistributeHorizontal,
    /// Even spacing of top edges between the topmost and bottommost.
    /// Element heights are not taken into account.
    #[serde(rename = "distribute-v")]
    DistributeVertical,
}

/// Apply `alignment` to the elements matching `is_selected`.
///
/// Returns `None` when fewer than two elements are selected. Unselected
/// elements and the page order are left as they are.
pub fn align(
    elements: &[Element],
    is_selected: impl Fn(&Element) -> bool,
    alignment: Alignment,
) -> Option<Vec<Element>> {
    let selected: Vec<usize> = (0..elements.len())
        .filter(|&idx| is_selected(&elements[idx]))
        .collect();
    if selected.len() < 2 {
        return None;
    }

    let mut out = elements.to_vec();
    let pick = |f: fn(&Element) -> f64| selected.iter().map(move |&idx| f(&elements[idx]));
    let min = |f: fn(&Element) -> f64| pick(f).fold(f64::INFINITY, f64::min);
    let max = |f: fn(&Element) -> f64| pick(f).fold(f64::NEG_INFINITY, f64::max);

    match alignment {
        Alignment::Left => {
            let left = min(|el| el.x);
            for &idx in &selected {
                out[idx].x = left;
            }
        }
        Alignment::Right => {
            let right = max(|el| el.x + el.width);
            for &idx in &selected {
                out[idx].x = right - out[idx].width;
            }
        }
        Alignment::Center => {
            let center = (min(|el| el.x) + max(|el| el.x + el.width)) / 2.0;
            for &idx in &selected {
                out[idx].x = center - out[idx].width / 2.0;
            }
        }
        Alignment::Top => {
            let top = min(|el| el.y);
            for &idx in &selected {
                out[idx].y = top;
            }
        }
        Alignment::Bottom => {
            let bottom = max(|el| el.y + el.height);
            for &idx in &selected {
                out[idx].y = bottom - out[idx].height;
            }
        }
        Alignment::Middle => {
            let middle = (min(|el| el.y) + max(|el| el.y + el.height)) / 2.0;
            for &idx in &selected {
                out[idx].y = middle - out[idx].height / 2.0;
            }
        }
        Alignment::DistributeHorizontal => {
            distribute(&mut out, &selected, |el| el.x, |el, v| el.x = v);
        }
        Alignment::DistributeVertical => {
            distribute(&mut out, &selected, |el| el.y, |el, v| el.y = v);
        }
    }

    Some(out)
}

fn distribute(
    elements: &mut [Element],
    selected: &[usize],
    get: fn(&Element) -> f64,
    set: fn(&mut Element, f64),
) {
    let mut ordered = selected.to_vec();
    ordered.sort_by(|&a, &b| get(&elements[a]).total_cmp(&get(&elements[b])));

    let start = get(&elements[ordered[0]]);
    let end = get(&elements[ordered[ordered.len() - 1]]);
    let step = (end - start) / (ordered.len() - 1) as f64;

    for (i, &idx) in ordered.iter().enumerate() {
        set(&mut elements[idx], start + step * i as f64);
    }
}
