//! Keyboard snapshot with edge detection

use bitflags::bitflags;

bitflags! {
    /// Keys the UI kit reacts to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Keys: u16 {
        /// Tab key
        const TAB = 1 << 0;
        /// Left shift
        const LEFT_SHIFT = 1 << 1;
        /// Right shift
        const RIGHT_SHIFT = 1 << 2;
        /// Space bar
        const SPACE = 1 << 3;
        /// Either shift key
        const SHIFT = Self::LEFT_SHIFT.bits() | Self::RIGHT_SHIFT.bits();
    }
}

/// One text composition step produced by the host's text input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEdit {
    /// A typed character
    Insert(char),
    /// Delete the last character
    Backspace,
}

/// Keyboard state for the current and previous frame.
///
/// Once [`KeyboardState::consume`] is called, the rest of the frame sees no typed
/// text and [`KeyboardState::is_consumed`] reports true. Key edges stay visible:
/// handlers that must not share a press (tab navigation) check the flag themselves.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    current: Keys,
    previous: Keys,
    text: Vec<TextEdit>,
    consumed: bool,
}

impl KeyboardState {
    /// Create a keyboard state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin new frame: remember held keys, drop last frame's text and consumption
    pub fn advance(&mut self) {
        self.previous = self.current;
        self.text.clear();
        self.consumed = false;
    }

    /// Mark keys as held
    pub fn press(&mut self, keys: Keys) {
        self.current.insert(keys);
    }

    /// Mark keys as released
    pub fn release(&mut self, keys: Keys) {
        self.current.remove(keys);
    }

    /// Queue typed characters for this frame
    pub fn type_text(&mut self, text: &str) {
        self.text.extend(text.chars().map(TextEdit::Insert));
    }

    /// Queue a single text edit for this frame
    pub fn push_edit(&mut self, edit: TextEdit) {
        self.text.push(edit);
    }

    /// Whether any of `keys` is held this frame
    pub fn is_down(&self, keys: Keys) -> bool {
        self.current.intersects(keys)
    }

    /// Whether any of `keys` was held last frame
    pub fn was_down(&self, keys: Keys) -> bool {
        self.previous.intersects(keys)
    }

    /// Whether either shift key is held
    pub fn shift_down(&self) -> bool {
        self.is_down(Keys::SHIFT)
    }

    /// Rising edge: held now, not held last frame
    pub fn just_pressed(&self, keys: Keys) -> bool {
        self.is_down(keys) && !self.was_down(keys)
    }

    /// Text typed this frame (empty once consumed)
    pub fn text_edits(&self) -> &[TextEdit] {
        if self.consumed {
            &[]
        } else {
            &self.text
        }
    }

    /// Drop this frame's typed text and mark the frame consumed
    pub fn consume(&mut self) {
        self.consumed = true;
        self.text.clear();
    }

    /// Whether the current input event has been consumed
    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}
