//! # Folio Editor
//!
//! Editing engine for Folio page documents.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: pages, elements, project format   │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Editor session                      │
//! │  - Pure mutations over a page list          │
//! │  - Snapshot history with undo/redo          │
//! │  - Pointer/keyboard interaction machine     │
//! │  - Derived numbering and contents table     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ render: read-only page views for a host UI  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Pages are the source of truth**: numbering and views are derived
//! 2. **Mutations are pure**: old page list in, new page list out
//! 3. **One commit per gesture**: a drag is a single undo step
//!
//! ## Usage
//!
//! ```rust,ignore
//! use folio_editor::{Editor, EditorConfig, PointerEvent, PointerTarget};
//! use folio_document::ElementKind;
//!
//! let mut editor = Editor::starter(EditorConfig::default());
//! editor.add_element(ElementKind::Text, "Hello")?;
//!
//! let id = editor.selection().iter().next().cloned().unwrap();
//! editor.pointer(PointerEvent::down(PointerTarget::Element(id), 50.0, 50.0));
//! editor.pointer(PointerEvent::moved(50.0, 250.0));
//! editor.pointer(PointerEvent::up(50.0, 250.0));
//!
//! editor.undo();
//! let json = editor.to_project().to_json()?;
//! ```

mod config;
mod controller;
mod errors;
mod generated;
mod history;
mod input;
mod mutations;
mod render;
mod structure;

pub use config::EditorConfig;
pub use controller::{Editor, Mode, MIN_ELEMENT_SIZE};
pub use errors::EditorError;
pub use generated::{Destination, GeneratedContent, GeneratedKind};
pub use history::{History, Snapshot, DEFAULT_HISTORY_LIMIT};
pub use input::{Command, Key, KeyEvent, PointerEvent, PointerTarget};
pub use mutations::{
    ElementPatch, Focus, Mutation, MutationError, MutationResult, PagePatch, PASTE_OFFSET,
};
pub use render::{render_page, render_pages, ElementView, PageView};
pub use structure::{derive_structure, Structure, TocEntry};

pub use folio_layout::{Alignment, Grid};
