//! Toolkit-independent input events.
//!
//! The host translates its native mouse and keyboard events into these
//! before handing them to [`crate::Editor`].

use folio_document::{ElementId, Point};

/// What the pointer went down on.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Element(ElementId),
    /// Bottom-right resize grip of an element.
    ResizeHandle(ElementId),
    /// Empty page background.
    Canvas,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Down {
        target: PointerTarget,
        position: Point,
        /// Additive (toggle) selection.
        shift: bool,
    },
    Move {
        position: Point,
    },
    Up {
        position: Point,
    },
}

impl PointerEvent {
    pub fn down(target: PointerTarget, x: f64, y: f64) -> Self {
        PointerEvent::Down {
            target,
            position: Point::new(x, y),
            shift: false,
        }
    }

    pub fn shift_down(target: PointerTarget, x: f64, y: f64) -> Self {
        PointerEvent::Down {
            target,
            position: Point::new(x, y),
            shift: true,
        }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        PointerEvent::Move {
            position: Point::new(x, y),
        }
    }

    pub fn up(x: f64, y: f64) -> Self {
        PointerEvent::Up {
            position: Point::new(x, y),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Delete,
    Backspace,
    Char(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    /// Ctrl on most platforms, Cmd on macOS.
    pub command: bool,
    /// A text field owns the keyboard; shortcuts must not fire.
    pub text_focus: bool,
}

/// Editor action bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    DeleteSelection,
    Undo,
    Redo,
    Copy,
    Paste,
}

impl KeyEvent {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            command: false,
            text_focus: false,
        }
    }

    pub fn shortcut(c: char) -> Self {
        Self {
            key: Key::Char(c),
            command: true,
            text_focus: false,
        }
    }

    pub fn in_text_field(mut self) -> Self {
        self.text_focus = true;
        self
    }

    pub fn binding(&self) -> Option<Command> {
        match self.key {
            Key::Delete | Key::Backspace => Some(Command::DeleteSelection),
            Key::Char(c) if self.command => match c.to_ascii_lowercase() {
                'z' => Some(Command::Undo),
                'y' => Some(Command::Redo),
                'c' => Some(Command::Copy),
                'v' => Some(Command::Paste),
                _ => None,
            },
            Key::Char(_) => None,
        }
    }
}
