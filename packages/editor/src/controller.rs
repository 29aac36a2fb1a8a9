//! # Selection & Interaction Controller
//!
//! [`Editor`] owns the working page list, the history, the selection and
//! the clipboard, and turns input events into edits.
//!
//! ## Interaction states
//!
//! ```text
//!            down(element)            move                 up
//!   Idle ─────────────────→ Selecting ─────→ Dragging ─────────→ Idle
//!     │                         │                               (resolve + commit)
//!     │                         └──────────── up ─────────────→ Idle
//!     │     down(resize handle)            move / up                (resolve + commit)
//!     └──────────────────────→ Resizing ─────────────────────→ Idle
//! ```
//!
//! While dragging or resizing only the working pages change. Every move
//! recomputes geometry from the positions captured at pointer-down, so
//! repeated events never accumulate drift. Pointer-up resolves collisions
//! on the displayed page and commits the result.
//!
//! Double-clicking an interactive element makes it the *interacting*
//! element: pointer-downs on it belong to its embedded content and keyboard
//! shortcuts are suspended until something else is selected or the page
//! changes.

use crate::config::EditorConfig;
use crate::errors::EditorError;
use crate::generated::GeneratedContent;
use crate::history::{History, Snapshot};
use crate::input::{Command, KeyEvent, PointerEvent, PointerTarget};
use crate::mutations::{ElementPatch, Focus, Mutation, PagePatch};
use crate::structure::{derive_structure, Structure};
use folio_document::{
    Element, ElementId, ElementKind, IdSource, Page, PageId, PageKind, Point, Project, UuidIds,
    PAGE_WIDTH,
};
use folio_layout::{resolve_in_place, Alignment};
use std::collections::BTreeSet;
use tracing::{debug, info, warn};

/// Smallest width or height a resize can produce, before snapping.
pub const MIN_ELEMENT_SIZE: f64 = 50.0;

/// Public view of the interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Idle,
    Selecting,
    Dragging,
    Resizing,
}

#[derive(Debug, Clone)]
struct DragState {
    start: Point,
    /// Position of every selected element at pointer-down.
    initial: Vec<(ElementId, Point)>,
}

#[derive(Debug, Clone)]
struct ResizeState {
    start: Point,
    element_id: ElementId,
    initial_width: f64,
    initial_height: f64,
}

#[derive(Debug, Clone, Default)]
enum Interaction {
    #[default]
    Idle,
    Selecting(DragState),
    Dragging(DragState),
    Resizing(ResizeState),
}

/// Single-user editing session over one project.
pub struct Editor {
    config: EditorConfig,
    ids: Box<dyn IdSource>,
    project_id: String,
    project_name: String,
    history: History,
    /// Equal to the history's current snapshot except mid-interaction.
    pages: Vec<Page>,
    current_page: PageId,
    selection: BTreeSet<ElementId>,
    clipboard: Vec<Element>,
    interacting: Option<ElementId>,
    interaction: Interaction,
}

impl Editor {
    /// Edit `project`, minting random ids.
    pub fn new(project: Project, config: EditorConfig) -> Result<Self, EditorError> {
        Self::with_ids(project, config, Box::new(UuidIds))
    }

    pub fn with_ids(
        project: Project,
        config: EditorConfig,
        ids: Box<dyn IdSource>,
    ) -> Result<Self, EditorError> {
        project.validate()?;
        Ok(Self::assemble(project, config, ids))
    }

    /// Edit a fresh starter project.
    pub fn starter(config: EditorConfig) -> Self {
        Self::starter_with_ids(config, Box::new(UuidIds))
    }

    pub fn starter_with_ids(config: EditorConfig, mut ids: Box<dyn IdSource>) -> Self {
        let project = Project::starter(ids.as_mut(), &config.default_page);
        Self::assemble(project, config, ids)
    }

    /// `project` must already be valid.
    fn assemble(project: Project, config: EditorConfig, ids: Box<dyn IdSource>) -> Self {
        let current_page = project
            .pages
            .first()
            .map(|page| page.id.clone())
            .unwrap_or_default();

        Self {
            history: History::with_limit(project.pages.clone(), config.history_limit),
            pages: project.pages,
            project_id: project.id,
            project_name: project.name,
            config,
            ids,
            current_page,
            selection: BTreeSet::new(),
            clipboard: Vec::new(),
            interacting: None,
            interaction: Interaction::Idle,
        }
    }

    // --- Read access -------------------------------------------------------

    /// Working pages, including uncommitted drag/resize geometry.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_page_id(&self) -> &str {
        &self.current_page
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.iter().find(|page| page.id == self.current_page)
    }

    pub fn selection(&self) -> &BTreeSet<ElementId> {
        &self.selection
    }

    pub fn is_selected(&self, element_id: &str) -> bool {
        self.selection.contains(element_id)
    }

    /// Element currently receiving pointer input for its embedded content.
    pub fn interacting(&self) -> Option<&str> {
        self.interacting.as_deref()
    }

    pub fn mode(&self) -> Mode {
        match self.interaction {
            Interaction::Idle => Mode::Idle,
            Interaction::Selecting(_) => Mode::Selecting,
            Interaction::Dragging(_) => Mode::Dragging,
            Interaction::Resizing(_) => Mode::Resizing,
        }
    }

    pub fn clipboard(&self) -> &[Element] {
        &self.clipboard
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Numbering and table of contents of the working pages.
    pub fn structure(&self) -> Structure {
        derive_structure(&self.pages)
    }

    /// Committed state as a saveable project, stamped with the current time.
    pub fn to_project(&self) -> Project {
        Project::new(
            self.project_id.clone(),
            self.project_name.clone(),
            self.history.current().to_vec(),
        )
    }

    // --- Document edits ----------------------------------------------------

    /// Apply `mutation` and commit the result.
    ///
    /// A rejected mutation leaves every piece of editor state untouched. An
    /// unfinished drag or resize is abandoned first.
    pub fn apply(&mut self, mutation: Mutation) -> Result<(), EditorError> {
        self.cancel_interaction();

        let result = match mutation.apply(&self.pages, self.ids.as_mut(), &self.config) {
            Ok(result) => result,
            Err(err) => {
                warn!(error = %err, mutation = mutation.label(), "Mutation rejected");
                return Err(err.into());
            }
        };

        self.commit(result.pages, mutation.label());

        match result.focus {
            Focus::Unchanged => {}
            Focus::Page(page_id) => self.enter_page(page_id),
            Focus::Fallback(page_id) => {
                if self.current_page().is_none() {
                    self.enter_page(page_id);
                }
            }
        }
        if let Some(selected) = result.select {
            self.selection = selected.into_iter().collect();
        }
        self.prune_selection();

        Ok(())
    }

    /// New standard page after the displayed one.
    pub fn add_page(&mut self) -> Result<(), EditorError> {
        self.apply(Mutation::AddPage {
            after: Some(self.current_page.clone()),
        })
    }

    pub fn delete_page(&mut self, page_id: &str) -> Result<(), EditorError> {
        self.apply(Mutation::DeletePage {
            page_id: page_id.to_string(),
        })
    }

    pub fn duplicate_page(&mut self, page_id: &str) -> Result<(), EditorError> {
        self.apply(Mutation::DuplicatePage {
            page_id: page_id.to_string(),
        })
    }

    pub fn toggle_structure(&mut self, kind: PageKind) -> Result<(), EditorError> {
        self.apply(Mutation::ToggleStructure { kind })
    }

    pub fn update_page(&mut self, page_id: &str, patch: PagePatch) -> Result<(), EditorError> {
        self.apply(Mutation::UpdatePage {
            page_id: page_id.to_string(),
            patch,
        })
    }

    /// New element on the displayed page; it becomes the selection.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        content: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::AddElement {
            page_id: self.current_page.clone(),
            kind,
            content: content.into(),
        })
    }

    pub fn update_element(
        &mut self,
        element_id: &str,
        patch: ElementPatch,
    ) -> Result<(), EditorError> {
        self.apply(Mutation::UpdateElement {
            page_id: self.current_page.clone(),
            element_id: element_id.to_string(),
            patch,
        })
    }

    pub fn delete_element(&mut self, element_id: &str) -> Result<(), EditorError> {
        self.apply(Mutation::DeleteElements {
            page_id: self.current_page.clone(),
            element_ids: vec![element_id.to_string()],
        })
    }

    /// Returns `false` when nothing is selected.
    pub fn delete_selection(&mut self) -> Result<bool, EditorError> {
        if self.selection.is_empty() {
            return Ok(false);
        }
        let element_ids = self.selection.iter().cloned().collect();
        self.apply(Mutation::DeleteElements {
            page_id: self.current_page.clone(),
            element_ids,
        })?;
        self.selection.clear();
        Ok(true)
    }

    /// Copy the selected elements by value. An empty selection leaves the
    /// clipboard as it was.
    pub fn copy_selection(&mut self) -> bool {
        let copied: Vec<Element> = match self.current_page() {
            Some(page) => page
                .elements
                .iter()
                .filter(|el| self.selection.contains(&el.id))
                .cloned()
                .collect(),
            None => return false,
        };
        if copied.is_empty() {
            return false;
        }

        debug!(count = copied.len(), "Copied elements");
        self.clipboard = copied;
        true
    }

    /// Paste the clipboard onto the displayed page and select the copies.
    /// Returns `false` when the clipboard is empty.
    pub fn paste(&mut self) -> Result<bool, EditorError> {
        if self.clipboard.is_empty() {
            return Ok(false);
        }
        self.apply(Mutation::PasteElements {
            page_id: self.current_page.clone(),
            elements: self.clipboard.clone(),
        })?;
        Ok(true)
    }

    /// Align or distribute the selection and commit without collision
    /// resolution. Returns `false` when fewer than two elements are selected.
    pub fn align(&mut self, alignment: Alignment) -> bool {
        self.cancel_interaction();
        let Some(index) = self.current_index() else {
            return false;
        };

        let selection = &self.selection;
        let aligned = folio_layout::align(
            &self.pages[index].elements,
            |el| selection.contains(&el.id),
            alignment,
        );
        let Some(aligned) = aligned else {
            return false;
        };

        let mut pages = self.pages.clone();
        pages[index].elements = aligned;
        self.commit(pages, "Align");
        true
    }

    /// Route a generator's payload into the displayed page (or the cover).
    pub fn apply_generated(&mut self, generated: &GeneratedContent) -> Result<(), EditorError> {
        let mutation = match self.current_page() {
            Some(page) => generated.to_mutation(page)?,
            None => return Err(EditorError::PageNotFound(self.current_page.clone())),
        };
        self.apply(mutation)
    }

    /// Replace the document with a project file.
    ///
    /// An invalid file leaves the current document, history and selection
    /// untouched. A valid one is committed like any other edit, so it can be
    /// undone.
    pub fn load_project(&mut self, source: &str) -> Result<(), EditorError> {
        let project = match Project::from_json(source) {
            Ok(project) => project,
            Err(err) => {
                warn!(error = %err, "Project load rejected");
                return Err(err.into());
            }
        };

        self.cancel_interaction();
        self.project_id = project.id;
        self.project_name = project.name;
        let first = project.pages.first().map(|page| page.id.clone());
        self.commit(project.pages, "Load project");
        if let Some(first) = first {
            self.enter_page(first);
        }

        info!(project_id = %self.project_id, pages = self.pages.len(), "Editing loaded project");
        Ok(())
    }

    // --- History -----------------------------------------------------------

    /// Returns `false` at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        self.cancel_interaction();
        match self.history.undo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Returns `false` at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        self.cancel_interaction();
        match self.history.redo() {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    // --- Navigation --------------------------------------------------------

    /// Display another page. Clears the selection and any interaction.
    pub fn show_page(&mut self, page_id: &str) -> Result<(), EditorError> {
        if !self.pages.iter().any(|page| page.id == page_id) {
            return Err(EditorError::PageNotFound(page_id.to_string()));
        }
        self.cancel_interaction();
        if self.current_page != page_id {
            self.enter_page(page_id.to_string());
        }
        Ok(())
    }

    // --- Input -------------------------------------------------------------

    pub fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                target,
                position,
                shift,
            } => self.pointer_down(target, position, shift),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { position } => self.pointer_up(position),
        }
    }

    /// Enter the interacting sub-state on an interactive element. Returns
    /// `false` for any other element.
    pub fn double_click(&mut self, element_id: &str) -> bool {
        let interactive = self
            .current_page()
            .and_then(|page| page.element(element_id))
            .is_some_and(|el| el.kind.is_interactive());
        if interactive {
            self.cancel_interaction();
            self.interacting = Some(element_id.to_string());
        }
        interactive
    }

    /// Run the shortcut bound to `event`. Returns whether anything happened.
    pub fn key(&mut self, event: KeyEvent) -> Result<bool, EditorError> {
        if event.text_focus || self.interacting.is_some() {
            return Ok(false);
        }
        let Some(command) = event.binding() else {
            return Ok(false);
        };

        match command {
            Command::DeleteSelection => self.delete_selection(),
            Command::Undo => Ok(self.undo()),
            Command::Redo => Ok(self.redo()),
            Command::Copy => Ok(self.copy_selection()),
            Command::Paste => self.paste(),
        }
    }

    fn pointer_down(&mut self, target: PointerTarget, position: Point, shift: bool) {
        match target {
            PointerTarget::Canvas => {
                self.cancel_interaction();
                self.selection.clear();
                self.interacting = None;
            }

            PointerTarget::Element(element_id) => {
                // Belongs to the embedded content.
                if self.interacting.as_deref() == Some(element_id.as_str()) {
                    return;
                }
                self.cancel_interaction();
                let Some(index) = self.current_index() else {
                    return;
                };
                if !self.pages[index].contains(&element_id) {
                    return;
                }

                if shift {
                    if !self.selection.remove(&element_id) {
                        self.selection.insert(element_id);
                    }
                } else if !self.selection.contains(&element_id) {
                    self.selection.clear();
                    self.selection.insert(element_id);
                }
                self.interacting = None;

                let initial = self.pages[index]
                    .elements
                    .iter()
                    .filter(|el| self.selection.contains(&el.id))
                    .map(|el| (el.id.clone(), Point::new(el.x, el.y)))
                    .collect();
                self.interaction = Interaction::Selecting(DragState {
                    start: position,
                    initial,
                });
            }

            PointerTarget::ResizeHandle(element_id) => {
                self.cancel_interaction();
                let Some(element) = self
                    .current_page()
                    .and_then(|page| page.element(&element_id))
                else {
                    return;
                };

                let (initial_width, initial_height) = (element.width, element.height);
                self.interacting = None;
                self.interaction = Interaction::Resizing(ResizeState {
                    start: position,
                    element_id,
                    initial_width,
                    initial_height,
                });
            }
        }
    }

    fn pointer_move(&mut self, position: Point) {
        match std::mem::take(&mut self.interaction) {
            Interaction::Selecting(drag) | Interaction::Dragging(drag) => {
                self.drag_to(&drag, position);
                self.interaction = Interaction::Dragging(drag);
            }
            Interaction::Resizing(resize) => {
                self.resize_to(&resize, position);
                self.interaction = Interaction::Resizing(resize);
            }
            Interaction::Idle => {}
        }
    }

    fn pointer_up(&mut self, position: Point) {
        let label = match std::mem::take(&mut self.interaction) {
            Interaction::Idle => return,
            // A click without movement still resolves and commits.
            Interaction::Selecting(_) => "Move elements",
            Interaction::Dragging(drag) => {
                self.drag_to(&drag, position);
                "Move elements"
            }
            Interaction::Resizing(resize) => {
                self.resize_to(&resize, position);
                "Resize element"
            }
        };
        self.settle(label);
    }

    fn drag_to(&mut self, drag: &DragState, position: Point) {
        let Some(index) = self.current_index() else {
            return;
        };
        let delta = position.delta_from(drag.start);
        let grid = self.config.grid;
        let page = &mut self.pages[index];

        for (element_id, origin) in &drag.initial {
            let Some(element) = page.element_mut(element_id) else {
                continue;
            };
            let proposed = grid.snap_point(Point::new(origin.x + delta.x, origin.y + delta.y));
            // Sequence titles span the page and only move vertically.
            element.x = match element.kind {
                ElementKind::SequenceTitle => 0.0,
                _ => proposed.x,
            };
            element.y = proposed.y;
        }
    }

    fn resize_to(&mut self, resize: &ResizeState, position: Point) {
        let Some(index) = self.current_index() else {
            return;
        };
        let delta = position.delta_from(resize.start);
        let grid = self.config.grid;
        let Some(element) = self.pages[index].element_mut(&resize.element_id) else {
            return;
        };

        let width = grid.snap((resize.initial_width + delta.x).max(MIN_ELEMENT_SIZE));
        let height = grid.snap((resize.initial_height + delta.y).max(MIN_ELEMENT_SIZE));

        element.width = match element.kind {
            ElementKind::SequenceTitle => PAGE_WIDTH,
            ElementKind::Toc => width.min(PAGE_WIDTH),
            _ => width,
        };
        element.height = height;
    }

    /// Resolve collisions on the displayed page and commit.
    fn settle(&mut self, label: &str) {
        let Some(index) = self.current_index() else {
            return;
        };
        let mut pages = std::mem::take(&mut self.pages);
        let moved = resolve_in_place(&mut pages[index].elements);
        debug!(page_id = %pages[index].id, moved, label, "Interaction settled");
        self.commit(pages, label);
    }

    // --- Internals ---------------------------------------------------------

    fn commit(&mut self, pages: Vec<Page>, label: &str) {
        self.history.commit(pages.clone(), Some(label));
        self.pages = pages;
    }

    /// Drop an unfinished drag/resize and its working geometry.
    fn cancel_interaction(&mut self) {
        if matches!(self.interaction, Interaction::Idle) {
            return;
        }
        self.interaction = Interaction::Idle;
        self.pages = self.history.current().to_vec();
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.pages = snapshot.to_vec();
        if self.current_page().is_none() {
            if let Some(first) = self.pages.first() {
                let first = first.id.clone();
                self.enter_page(first);
            }
        }
        self.prune_selection();
    }

    fn enter_page(&mut self, page_id: PageId) {
        debug!(page_id = %page_id, "Showing page");
        self.current_page = page_id;
        self.selection.clear();
        self.interacting = None;
        self.interaction = Interaction::Idle;
    }

    /// Keep only selected/interacting ids that exist on the displayed page.
    fn prune_selection(&mut self) {
        let Some(index) = self.current_index() else {
            self.selection.clear();
            self.interacting = None;
            return;
        };
        let page = &self.pages[index];
        self.selection.retain(|id| page.contains(id));
        if let Some(id) = &self.interacting {
            if !page.contains(id) {
                self.interacting = None;
            }
        }
    }

    fn current_index(&self) -> Option<usize> {
        self.pages
            .iter()
            .position(|page| page.id == self.current_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use folio_document::{Rect, SequentialIds};

    fn editor_with(elements: Vec<Element>) -> Editor {
        let page = Page::new("page", PageKind::Standard).with_elements(elements);
        let project = Project::new("project", "Test", vec![page]);
        Editor::with_ids(
            project,
            EditorConfig::default(),
            Box::new(SequentialIds::new("controller")),
        )
        .unwrap()
    }

    fn el(id: &str, kind: ElementKind, x: f64, y: f64, w: f64, h: f64) -> Element {
        Element::new(id, kind, Rect::new(x, y, w, h))
    }

    fn find<'a>(editor: &'a Editor, id: &str) -> &'a Element {
        editor.current_page().unwrap().element(id).unwrap()
    }

    #[test]
    fn test_click_replaces_selection_shift_toggles() {
        let mut editor = editor_with(vec![
            el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0),
            el("b", ElementKind::Shape, 200.0, 0.0, 50.0, 50.0),
        ]);

        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 10.0, 10.0));
        editor.pointer(PointerEvent::up(10.0, 10.0));
        editor.pointer(PointerEvent::shift_down(PointerTarget::Element("b".into()), 210.0, 10.0));
        editor.pointer(PointerEvent::up(210.0, 10.0));
        assert!(editor.is_selected("a") && editor.is_selected("b"));

        editor.pointer(PointerEvent::shift_down(PointerTarget::Element("a".into()), 10.0, 10.0));
        editor.pointer(PointerEvent::up(10.0, 10.0));
        assert!(!editor.is_selected("a"));

        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 10.0, 10.0));
        assert_eq!(editor.selection().len(), 1);
        assert_eq!(editor.mode(), Mode::Selecting);

        editor.pointer(PointerEvent::down(PointerTarget::Canvas, 500.0, 500.0));
        assert!(editor.selection().is_empty());
        assert_eq!(editor.mode(), Mode::Idle);
    }

    #[test]
    fn test_drag_is_live_until_release() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0)]);
        let commits = editor.history().len();

        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 10.0, 10.0));
        editor.pointer(PointerEvent::moved(40.0, 60.0));
        editor.pointer(PointerEvent::moved(110.0, 110.0));
        assert_eq!(editor.mode(), Mode::Dragging);
        assert_eq!(find(&editor, "a").rect(), Rect::new(100.0, 100.0, 50.0, 50.0));
        assert_eq!(editor.history().len(), commits);

        editor.pointer(PointerEvent::up(110.0, 110.0));
        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(editor.history().len(), commits + 1);
        assert_eq!(editor.history().current()[0].elements[0].x, 100.0);
    }

    #[test]
    fn test_group_drag_moves_every_selected_element() {
        let mut editor = editor_with(vec![
            el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0),
            el("b", ElementKind::Shape, 300.0, 0.0, 50.0, 50.0),
        ]);
        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::up(0.0, 0.0));
        editor.pointer(PointerEvent::shift_down(PointerTarget::Element("b".into()), 300.0, 0.0));
        editor.pointer(PointerEvent::moved(300.0, 200.0));
        editor.pointer(PointerEvent::up(300.0, 200.0));

        assert_eq!(find(&editor, "a").y, 200.0);
        assert_eq!(find(&editor, "b").y, 200.0);
    }

    #[test]
    fn test_drag_snaps_to_grid() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0)]);
        editor.config.grid = folio_layout::Grid::enabled(20.0);

        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::moved(29.0, 31.0));
        assert_eq!((find(&editor, "a").x, find(&editor, "a").y), (20.0, 40.0));
    }

    #[test]
    fn test_drop_resolves_collisions() {
        let mut editor = editor_with(vec![
            el("a", ElementKind::Shape, 0.0, 0.0, 100.0, 100.0),
            el("b", ElementKind::Shape, 300.0, 0.0, 100.0, 100.0),
        ]);
        editor.pointer(PointerEvent::down(PointerTarget::Element("b".into()), 300.0, 0.0));
        editor.pointer(PointerEvent::moved(50.0, 50.0));
        assert_eq!(find(&editor, "b").y, 50.0);

        editor.pointer(PointerEvent::up(50.0, 50.0));
        assert_eq!(find(&editor, "b").rect(), Rect::new(50.0, 120.0, 100.0, 100.0));
        assert_eq!(find(&editor, "a").y, 0.0);
    }

    #[test]
    fn test_click_drag_and_add_keep_paint_order() {
        let mut editor = editor_with(vec![
            el("back", ElementKind::Shape, 0.0, 300.0, 100.0, 100.0),
            el("front", ElementKind::Shape, 0.0, 0.0, 100.0, 100.0),
        ]);
        let ids = |editor: &Editor| -> Vec<String> {
            editor.current_page().unwrap().elements.iter().map(|e| e.id.to_string()).collect()
        };

        editor.pointer(PointerEvent::down(PointerTarget::Element("front".into()), 10.0, 10.0));
        editor.pointer(PointerEvent::up(10.0, 10.0));
        assert_eq!(ids(&editor), vec!["back", "front"]);

        editor.pointer(PointerEvent::down(PointerTarget::Element("front".into()), 10.0, 10.0));
        editor.pointer(PointerEvent::moved(10.0, 60.0));
        editor.pointer(PointerEvent::up(10.0, 60.0));
        assert_eq!(find(&editor, "front").y, 50.0);
        assert_eq!(ids(&editor), vec!["back", "front"]);

        editor.add_element(ElementKind::Text, "note").unwrap();
        assert_eq!(&ids(&editor)[..2], &["back", "front"]);

        let structure = editor.structure();
        let view = crate::render_page(editor.current_page().unwrap(), &structure);
        assert!(view.elements[0].z_order < view.elements[1].z_order);
        assert_eq!(view.elements[0].element.id, "back");
    }

    #[test]
    fn test_sequence_title_pinned_left() {
        let mut editor = editor_with(vec![el(
            "seq",
            ElementKind::SequenceTitle,
            0.0,
            0.0,
            PAGE_WIDTH,
            150.0,
        )]);
        editor.pointer(PointerEvent::down(PointerTarget::Element("seq".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::moved(300.0, 300.0));
        assert_eq!((find(&editor, "seq").x, find(&editor, "seq").y), (0.0, 300.0));

        editor.pointer(PointerEvent::up(300.0, 300.0));
        assert_eq!((find(&editor, "seq").x, find(&editor, "seq").y), (0.0, 300.0));
    }

    #[test]
    fn test_resize_minimum_and_kind_rules() {
        let mut editor = editor_with(vec![
            el("box", ElementKind::Shape, 0.0, 0.0, 100.0, 100.0),
            el("toc", ElementKind::Toc, 0.0, 300.0, 700.0, 100.0),
            el("seq", ElementKind::SequenceTitle, 0.0, 600.0, PAGE_WIDTH, 150.0),
        ]);

        editor.pointer(PointerEvent::down(PointerTarget::ResizeHandle("box".into()), 100.0, 100.0));
        assert_eq!(editor.mode(), Mode::Resizing);
        editor.pointer(PointerEvent::moved(0.0, 130.0));
        assert_eq!((find(&editor, "box").width, find(&editor, "box").height), (50.0, 130.0));
        editor.pointer(PointerEvent::up(0.0, 130.0));

        editor.pointer(PointerEvent::down(PointerTarget::ResizeHandle("toc".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::moved(500.0, 0.0));
        editor.pointer(PointerEvent::up(500.0, 0.0));
        assert_eq!(find(&editor, "toc").width, PAGE_WIDTH);

        editor.pointer(PointerEvent::down(PointerTarget::ResizeHandle("seq".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::moved(-400.0, 10.0));
        editor.pointer(PointerEvent::up(-400.0, 10.0));
        assert_eq!(find(&editor, "seq").width, PAGE_WIDTH);
        assert_eq!(find(&editor, "seq").height, 160.0);
    }

    #[test]
    fn test_double_click_interacting_state() {
        let mut editor = editor_with(vec![
            el("quiz", ElementKind::Quiz, 0.0, 0.0, 400.0, 350.0),
            el("text", ElementKind::Text, 0.0, 400.0, 300.0, 100.0),
        ]);
        assert!(!editor.double_click("text"));
        assert!(editor.double_click("quiz"));
        assert_eq!(editor.interacting(), Some("quiz"));

        // Forwarded to the embedded content.
        editor.pointer(PointerEvent::down(PointerTarget::Element("quiz".into()), 5.0, 5.0));
        assert_eq!(editor.mode(), Mode::Idle);

        // Shortcuts are suspended.
        editor.selection.insert("text".into());
        assert!(!editor.key(KeyEvent::plain(Key::Delete)).unwrap());

        editor.pointer(PointerEvent::down(PointerTarget::Element("text".into()), 5.0, 405.0));
        assert_eq!(editor.interacting(), None);
    }

    #[test]
    fn test_keyboard_delete_undo_redo() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0)]);
        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::up(0.0, 0.0));

        assert!(!editor.key(KeyEvent::plain(Key::Delete).in_text_field()).unwrap());
        assert!(editor.key(KeyEvent::plain(Key::Backspace)).unwrap());
        assert!(editor.current_page().unwrap().elements.is_empty());
        assert!(editor.selection().is_empty());

        assert!(editor.key(KeyEvent::shortcut('z')).unwrap());
        assert!(editor.current_page().unwrap().contains("a"));
        assert!(editor.key(KeyEvent::shortcut('y')).unwrap());
        assert!(!editor.current_page().unwrap().contains("a"));
        assert!(!editor.key(KeyEvent::shortcut('y')).unwrap());
    }

    #[test]
    fn test_copy_paste() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 100.0, 100.0, 50.0, 50.0)]);
        assert!(!editor.paste().unwrap());
        assert!(!editor.copy_selection());

        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 100.0, 100.0));
        editor.pointer(PointerEvent::up(100.0, 100.0));
        assert!(editor.key(KeyEvent::shortcut('c')).unwrap());
        assert!(editor.key(KeyEvent::shortcut('v')).unwrap());

        let page = editor.current_page().unwrap();
        assert_eq!(page.elements.len(), 2);
        let pasted = editor.selection().iter().next().unwrap().clone();
        assert_ne!(pasted, "a");
        assert_eq!(find(&editor, &pasted).x, 120.0);
    }

    #[test]
    fn test_align_requires_two_and_skips_resolution() {
        let mut editor = editor_with(vec![
            el("a", ElementKind::Shape, 0.0, 0.0, 100.0, 100.0),
            el("b", ElementKind::Shape, 50.0, 300.0, 100.0, 100.0),
        ]);
        editor.selection.insert("a".into());
        assert!(!editor.align(Alignment::Top));

        editor.selection.insert("b".into());
        assert!(editor.align(Alignment::Top));
        // Overlapping now, and left that way.
        assert_eq!(find(&editor, "b").y, 0.0);
        assert_eq!(editor.history().undo_label(), Some("Align"));
    }

    #[test]
    fn test_page_change_clears_selection() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0)]);
        editor.add_page().unwrap();
        let added = editor.current_page_id().to_string();
        assert_ne!(added, "page");

        editor.show_page("page").unwrap();
        editor.selection.insert("a".into());
        editor.show_page(&added).unwrap();
        assert!(editor.selection().is_empty());
        assert!(matches!(
            editor.show_page("ghost"),
            Err(EditorError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_rejected_mutation_changes_nothing() {
        let mut editor = editor_with(vec![]);
        let before = editor.history().len();
        let err = editor.delete_page("page").unwrap_err();
        assert!(matches!(err, EditorError::Mutation(_)));
        assert_eq!(editor.pages().len(), 1);
        assert_eq!(editor.history().len(), before);
    }

    #[test]
    fn test_mutation_mid_drag_abandons_drag() {
        let mut editor = editor_with(vec![el("a", ElementKind::Shape, 0.0, 0.0, 50.0, 50.0)]);
        editor.pointer(PointerEvent::down(PointerTarget::Element("a".into()), 0.0, 0.0));
        editor.pointer(PointerEvent::moved(300.0, 300.0));
        editor.add_element(ElementKind::Text, "").unwrap();

        assert_eq!(editor.mode(), Mode::Idle);
        assert_eq!(find(&editor, "a").x, 0.0);
    }
}
