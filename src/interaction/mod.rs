use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Hovering inspects the record under the pointer.
    #[default]
    Cross,
    /// A pressed pointer pans the visible window.
    Drag,
}

/// Public cross-hair state exposed to host applications.
///
/// `x` is refreshed from the tracked record on every draw; `y` follows the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CrosshairState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
}

impl CrosshairState {
    pub fn set(&mut self, y: f64, visible: bool) {
        self.y = y;
        self.visible = visible;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionState {
    mode: InteractionMode,
    pointer_down_x: f64,
}

impl InteractionState {
    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    /// Drag anchor; only meaningful while in [`InteractionMode::Drag`].
    #[must_use]
    pub fn pointer_down_x(self) -> Option<f64> {
        match self.mode {
            InteractionMode::Drag => Some(self.pointer_down_x),
            InteractionMode::Cross => None,
        }
    }

    pub fn on_drag_start(&mut self, x: f64) {
        self.mode = InteractionMode::Drag;
        self.pointer_down_x = x;
    }

    pub fn reanchor_drag(&mut self, x: f64) {
        self.pointer_down_x = x;
    }

    pub fn on_drag_end(&mut self) {
        self.mode = InteractionMode::Cross;
    }
}
