use crate::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,   // Left mouse, touch
    Secondary, // Right mouse
    Tertiary,  // Middle mouse
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down(PointerButton),
    Up(PointerButton),
    /// Motion while a button is held.
    Drag,
    Cancel,
}

/// Pointer event delivered by the host, `position` in the receiving
/// widget's local coordinates.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub event: PointerEventKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(event: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            event,
            position: Vec2 { x, y },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Character(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
}

#[derive(Clone, Debug)]
pub struct KeyEvent {
    pub key: Key,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self { key }
    }
}

#[derive(Clone, Debug)]
pub enum InputEvent {
    Pointer(PointerEvent),
    Key(KeyEvent),
    /// A character produced by the keyboard, after key mapping.
    Typed(char),
}
