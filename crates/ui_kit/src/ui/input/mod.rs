//! UI input handling module
//!
//! Per-frame keyboard and mouse snapshots. The host fills them from its own
//! event source once per frame; widgets only ever read edges from them.

pub mod keyboard;
pub mod mouse;

pub use keyboard::{KeyboardState, Keys, TextEdit};
pub use mouse::MouseState;

/// Everything a form reads during one frame
#[derive(Debug, Clone)]
pub struct FrameInput {
    /// Keyboard snapshot
    pub keyboard: KeyboardState,
    /// Mouse snapshot
    pub mouse: MouseState,
    /// Whether the application window currently has input focus.
    ///
    /// Without host focus no widget reports itself as focused.
    pub host_has_focus: bool,
}

impl FrameInput {
    /// Begin a new frame: current key and button states become the previous ones
    pub fn advance(&mut self) {
        self.keyboard.advance();
        self.mouse.advance();
    }
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            keyboard: KeyboardState::new(),
            mouse: MouseState::new(),
            host_has_focus: true,
        }
    }
}
