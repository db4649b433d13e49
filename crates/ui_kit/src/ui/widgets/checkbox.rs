//! Checkbox widget - focusable boolean toggle

use std::any::Any;

use super::core::{focus_on_click, DrawContext, Drawable, EventContext, Widget};
use crate::foundation::math::Vec2;
use crate::geometry::Rect;
use crate::render::{Bitmap, TextDraw};
use crate::ui::feedback::{Feedback, FeedbackCue};
use crate::ui::focus::{FocusError, FocusHandle};
use crate::ui::input::Keys;

/// Square checkbox drawn as a nine-slice frame with a checkmark glyph
#[derive(Debug)]
pub struct Checkbox {
    focus: FocusHandle,
    bounds: Rect,
    hovered: bool,

    /// Current value
    pub checked: bool,

    /// Readonly checkboxes take focus but never toggle
    pub readonly: bool,
}

impl Checkbox {
    /// Create a checkbox occupying `bounds`
    pub fn new(bounds: Rect, checked: bool, readonly: bool) -> Self {
        Self {
            focus: FocusHandle::new(),
            bounds,
            hovered: false,
            checked,
            readonly,
        }
    }

    /// Whether the mouse is over the checkbox
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    fn toggle(&mut self) {
        self.checked = !self.checked;
        log::debug!("Checkbox {:?} toggled to {}", self.focus.id(), self.checked);
    }
}

impl Widget for Checkbox {
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
        focus_on_click(&self.focus, cx)?;
        if !self.readonly {
            self.toggle();
            cx.feedback.play(FeedbackCue::MenuTick);
        }
        Ok(())
    }

    fn update_hover(&mut self, mouse: Vec2, _feedback: &mut dyn Feedback) {
        self.hovered = self.bounds.contains_point(mouse);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<B: Bitmap + ?Sized> Drawable<B> for Checkbox {
    fn draw(&mut self, cx: &mut DrawContext<'_, B>) {
        let focused = cx.is_focused(&self.focus);
        if !self.readonly && focused && cx.input.keyboard.just_pressed(Keys::SPACE) {
            self.toggle();
        }

        let style = cx.style;
        let skin = cx.skin;
        let active = !self.readonly && (focused || self.hovered);
        let tint = if active { style.checkbox_active } else { style.checkbox_inactive };
        cx.panel(&skin.checkbox, &self.bounds, tint);

        if self.checked {
            let (dx, dy) = style.checkmark_offset;
            let position = self.bounds.center() + Vec2::new(dx, dy);
            let color = if self.readonly { style.checkmark_readonly } else { style.checkmark_color };
            cx.text(&TextDraw::new(style.checkmark.clone(), position, color).centered());
        }
    }
}
