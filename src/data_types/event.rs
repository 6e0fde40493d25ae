use gpui::{MouseButton, Pixels, Point};
use serde::{Deserialize, Serialize};

/// Identifier handed out by the board when a panel is registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PanelId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerKind {
    Press(MouseButton),
    Release(MouseButton),
    /// Pointer motion, with the button held down at the time if any.
    Move { pressed: Option<MouseButton> },
    Scroll(ScrollDirection),
}

/// Raw input as delivered by the host, in window pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Point<Pixels>,
}

impl PointerEvent {
    pub fn press(button: MouseButton, position: Point<Pixels>) -> Self {
        Self {
            kind: PointerKind::Press(button),
            position,
        }
    }

    pub fn release(button: MouseButton, position: Point<Pixels>) -> Self {
        Self {
            kind: PointerKind::Release(button),
            position,
        }
    }

    pub fn moved(position: Point<Pixels>, pressed: Option<MouseButton>) -> Self {
        Self {
            kind: PointerKind::Move { pressed },
            position,
        }
    }

    pub fn scroll(direction: ScrollDirection, position: Point<Pixels>) -> Self {
        Self {
            kind: PointerKind::Scroll(direction),
            position,
        }
    }
}

/// Normalized outcome of a completed gesture, replayable on any panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Scale factors about the viewport midpoint; `1.0` leaves an axis alone.
    Zoom { x_factor: f64, y_factor: f64 },
    /// Translation as a fraction of the viewport width/height. Positive values
    /// move the window towards lower data values.
    Pan { rx: f64, ry: f64 },
    /// Cursor marker at an absolute axis position.
    Marker { x: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureEvent {
    pub source: PanelId,
    pub gesture: Gesture,
}
