//! Text input widget - single-line editable text

use std::any::Any;
use std::fmt;

use super::core::{focus_on_click, DrawContext, Drawable, EventContext, Widget};
use crate::foundation::math::Vec2;
use crate::geometry::Rect;
use crate::render::{Bitmap, TextDraw};
use crate::ui::feedback::FeedbackCue;
use crate::ui::focus::{FocusError, FocusHandle};
use crate::ui::input::TextEdit;

/// Rewrites the value after every edit, e.g. to strip disallowed characters
pub type TextFilter = Box<dyn Fn(&str) -> String>;

/// Caret glyph appended while the blink is on
const CARET: char = '|';

/// Mask glyph used for sensitive values
const MASK: char = '*';

/// Single-line text input with placeholder, masking and a blinking caret.
///
/// Text is edited from the keyboard's composition buffer during draw, while the
/// input holds focus.
pub struct TextInput {
    focus: FocusHandle,
    bounds: Rect,
    filter: Option<TextFilter>,
    blink_count: u32,
    blink_on: bool,

    /// Current text
    pub value: String,

    /// Shown in gray while the value is empty and the input is unfocused
    pub placeholder: Option<String>,

    /// Display every character as `*`
    pub sensitive: bool,
}

impl TextInput {
    /// Create a text input occupying `bounds`
    pub fn new(bounds: Rect, placeholder: Option<String>, value: impl Into<String>) -> Self {
        Self {
            focus: FocusHandle::new(),
            bounds,
            filter: None,
            blink_count: 0,
            blink_on: false,
            value: value.into(),
            placeholder,
            sensitive: false,
        }
    }

    /// Mask the value when drawn (builder pattern)
    #[must_use]
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    /// Install a filter run on the edited value every focused frame (builder pattern)
    #[must_use]
    pub fn with_filter(mut self, filter: impl Fn(&str) -> String + 'static) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    /// Whether the caret is currently shown
    pub fn caret_visible(&self) -> bool {
        self.blink_on
    }

    /// Value as drawn: masked when sensitive, with the caret when the blink is on
    pub fn display_text(&self) -> String {
        let mut text: String = if self.sensitive {
            self.value.chars().map(|_| MASK).collect()
        } else {
            self.value.clone()
        };
        if self.blink_on {
            text.push(CARET);
        }
        text
    }

    /// Apply this frame's edits and the filter; returns whether the value changed
    fn apply_edits(&mut self, edits: &[TextEdit]) -> bool {
        let mut updated = self.value.clone();
        for edit in edits {
            match edit {
                TextEdit::Insert(c) if !c.is_control() => updated.push(*c),
                TextEdit::Insert(_) => {}
                TextEdit::Backspace => {
                    updated.pop();
                }
            }
        }
        if let Some(filter) = &self.filter {
            updated = filter(&updated);
        }

        if updated == self.value {
            return false;
        }
        self.value = updated;
        true
    }

    /// Advance the caret blink by one draw; toggles every `period` draws
    fn tick_blink(&mut self, period: u32) {
        self.blink_count += 1;
        if self.blink_count >= period.max(1) {
            self.blink_on = !self.blink_on;
            self.blink_count = 0;
        }
    }

    fn reset_blink(&mut self) {
        self.blink_on = false;
        self.blink_count = 0;
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("focus", &self.focus)
            .field("bounds", &self.bounds)
            .field("value", &self.value)
            .field("placeholder", &self.placeholder)
            .field("sensitive", &self.sensitive)
            .field("has_filter", &self.filter.is_some())
            .finish_non_exhaustive()
    }
}

impl Widget for TextInput {
    fn bounds(&self) -> Rect {
        self.bounds.clone()
    }

    fn focus_handle(&self) -> Option<&FocusHandle> {
        Some(&self.focus)
    }

    fn focus_handle_mut(&mut self) -> Option<&mut FocusHandle> {
        Some(&mut self.focus)
    }

    fn handle_click(&mut self, cx: &mut EventContext<'_>) -> Result<(), FocusError> {
        focus_on_click(&self.focus, cx)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<B: Bitmap + ?Sized> Drawable<B> for TextInput {
    fn draw(&mut self, cx: &mut DrawContext<'_, B>) {
        let style = cx.style;
        let skin = cx.skin;
        let focused = cx.is_focused(&self.focus);

        if focused {
            if self.apply_edits(cx.input.keyboard.text_edits()) {
                cx.feedback.play(FeedbackCue::MenuTick);
            }
            self.tick_blink(style.blink_period);
        } else {
            self.reset_blink();
        }

        let tint = if focused { style.input_focused } else { style.input_unfocused };
        cx.panel(&skin.text_input, &self.bounds, tint);

        let position = self.bounds.position
            + Vec2::new(style.text_padding, (self.bounds.height() - style.line_height) / 2.0);

        match &self.placeholder {
            Some(placeholder) if self.value.is_empty() && !focused => {
                cx.text(&TextDraw::new(placeholder.clone(), position, style.placeholder_color));
            }
            _ => {
                cx.text(&TextDraw::new(self.display_text(), position, style.text_color));
            }
        }
    }
}
