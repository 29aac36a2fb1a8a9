//! # Folio Layout
//!
//! Pure geometry passes over the elements of one page.
//!
//! ```text
//! pointer delta → snap (grid) → live geometry → [interaction end] → resolve_collisions
//! selection     → align / distribute ───────────────────────────→ (no resolution)
//! ```
//!
//! Nothing here owns state: every function takes a slice of elements and
//! hands back new values. Horizontal position is never adjusted by collision
//! resolution, only `y`.

mod align;
mod collision;
mod snap;

pub use align::{align, Alignment};
pub use collision::{find_conflicts, resolve_collisions, resolve_in_place, COLLISION_GAP};
pub use snap::{snap_to, Grid, GRID_PITCH};
