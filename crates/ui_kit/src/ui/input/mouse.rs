//! Mouse snapshot with click detection

use crate::foundation::math::Vec2;

/// Mouse cursor and left button state for the current and previous frame
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Cursor position in screen pixels
    pub position: Vec2,
    left_down: bool,
    left_was_down: bool,
}

impl MouseState {
    /// Create a mouse state at the origin with the button up
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin new frame (current button state becomes the previous one)
    pub fn advance(&mut self) {
        self.left_was_down = self.left_down;
    }

    /// Move the cursor
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    /// Update the left button
    pub fn set_left_button(&mut self, pressed: bool) {
        self.left_down = pressed;
    }

    /// Whether the left button is held
    pub fn left_down(&self) -> bool {
        self.left_down
    }

    /// Left button went down this frame
    pub fn clicked(&self) -> bool {
        self.left_down && !self.left_was_down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_edge() {
        let mut mouse = MouseState::new();
        mouse.set_left_button(true);
        assert!(mouse.clicked());

        mouse.advance();
        assert!(mouse.left_down());
        assert!(!mouse.clicked());

        mouse.set_left_button(false);
        mouse.advance();
        assert!(!mouse.clicked());
    }
}
