//! # Collision Resolution
//!
//! Pushes elements down until no two horizontally-overlapping elements sit
//! closer than [`COLLISION_GAP`] vertically.
//!
//! ## Algorithm
//!
//! 1. Stable-sort by top edge.
//! 2. Walk the sorted list once. Each element is compared with every element
//!    before it (using their already-resolved tops); on horizontal overlap it
//!    is moved to at least `prev.bottom + GAP`.
//! 3. Write the resolved tops back into the original positions.
//!
//! A single forward pass: earlier elements are never revisited once a later
//! one moves, so cascades resolve downward only. O(n²) in elements per page.
//! The sort is only a view: element order is document order (it breaks
//! z-index ties when rendering) and is never changed here.
//!
//! ## Guarantees (for non-negative heights)
//!
//! - Idempotent: resolving a resolved list returns it unchanged.
//! - `x`, `width` and `height` are never modified, nor is element order.
//! - An element whose horizontal span overlaps nothing never moves.

use folio_document::Element;
use std::borrow::Cow;
use tracing::debug;

/// Minimum vertical clearance between horizontally-overlapping elements.
pub const COLLISION_GAP: f64 = 20.0;

/// Resolve vertical overlaps.
///
/// Returns the input slice itself when no element moved; otherwise an owned
/// copy in the same order with updated `y` values.
pub fn resolve_collisions(elements: &[Element]) -> Cow<'_, [Element]> {
    let tops = resolved_tops(elements);
    let moved = count_moved(elements, &tops);

    if moved == 0 {
        return Cow::Borrowed(elements);
    }

    debug!(elements = elements.len(), moved, "Resolved collisions");

    Cow::Owned(
        elements
            .iter()
            .zip(tops)
            .map(|(element, top)| {
                let mut element = element.clone();
                element.y = top;
                element
            })
            .collect(),
    )
}

/// Resolve `elements` in place. Returns how many elements moved.
pub fn resolve_in_place(elements: &mut [Element]) -> usize {
    let tops = resolved_tops(elements);
    let moved = count_moved(elements, &tops);

    if moved > 0 {
        for (element, top) in elements.iter_mut().zip(tops) {
            element.y = top;
        }
        debug!(elements = elements.len(), moved, "Resolved collisions in place");
    }

    moved
}

/// Resolved top edge for each element, indexed like the input.
fn resolved_tops(elements: &[Element]) -> Vec<f64> {
    let order = sorted_by_top(elements);
    let mut tops: Vec<f64> = elements.iter().map(|element| element.y).collect();

    for (i, &current_idx) in order.iter().enumerate() {
        let current = &elements[current_idx];
        let mut top = tops[current_idx];

        for &prev_idx in &order[..i] {
            let prev = &elements[prev_idx];
            if current.rect().overlaps_horizontally(&prev.rect()) {
                let required_top = tops[prev_idx] + prev.height + COLLISION_GAP;
                if top < required_top {
                    top = required_top;
                }
            }
        }

        tops[current_idx] = top;
    }

    tops
}

fn count_moved(elements: &[Element], tops: &[f64]) -> usize {
    elements
        .iter()
        .zip(tops)
        .filter(|(element, top)| **top != element.y)
        .count()
}

/// Index pairs `(upper, lower)` that `resolve_collisions` would separate:
/// horizontally overlapping, with `lower` starting less than one gap below
/// the bottom of `upper`. Indices refer to the input slice.
pub fn find_conflicts(elements: &[Element]) -> Vec<(usize, usize)> {
    let order = sorted_by_top(elements);
    let mut conflicts = Vec::new();

    for (i, &upper) in order.iter().enumerate() {
        for &lower in &order[i + 1..] {
            let (a, b) = (&elements[upper], &elements[lower]);
            if a.rect().overlaps_horizontally(&b.rect())
                && b.y < a.y + a.height + COLLISION_GAP
            {
                conflicts.push((upper, lower));
            }
        }
    }

    conflicts
}

fn sorted_by_top(elements: &[Element]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..elements.len()).collect();
    order.sort_by(|&a, &b| elements[a].y.total_cmp(&elements[b].y));
    order
}
