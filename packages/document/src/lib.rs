//! # Folio Document Model
//!
//! Entities of a Folio project: a [`Project`] owns an ordered list of
//! [`Page`]s, and every page owns absolutely-positioned [`Element`]s on a
//! fixed A4 canvas of [`PAGE_WIDTH`] × [`PAGE_HEIGHT`] virtual units.
//!
//! ## Principles
//!
//! 1. **Values, not handles**: pages and elements are plain data. Every edit
//!    produces a new value, so a full copy of the page list can be kept as an
//!    immutable history snapshot.
//! 2. **Content is opaque**: an element's `content` is stored and copied
//!    verbatim. Its format depends on the element type but is never parsed
//!    here.
//! 3. **Identities are global**: element ids are unique across the whole
//!    project and never reused, including by duplication.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_document::{Project, SequentialIds};
//!
//! let mut ids = SequentialIds::new("workbook.json");
//! let project = Project::starter(&mut ids, &PageDefaults::default());
//! let json = project.to_json()?;
//! let restored = Project::from_json(&json)?;
//! assert_eq!(project, restored);
//! ```

mod demo;
mod element;
mod error;
mod factory;
mod geometry;
mod ids;
mod page;
mod project;
mod style;

pub use element::{ContentFormat, Element, ElementId, ElementKind};
pub use error::DocumentError;
pub use factory::{base_style, next_free_top, ElementTemplate, PageDefaults, Placement};
pub use geometry::{Point, Rect, PAGE_HEIGHT, PAGE_WIDTH};
pub use ids::{IdSource, SequentialIds, UuidIds};
pub use page::{BackgroundPattern, Page, PageId, PageKind};
pub use project::{validate_pages, Project};
pub use style::{ElementStyle, TextAlign};
