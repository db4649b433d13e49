//! Large button widget - full-width clickable button with a centered label

use std::any::Any;
use std::fmt;

use super::core::{DrawContext, Drawable, EventContext, Widget};
use crate::foundation::math::Vec2;
use crate::geometry::Rect;
use crate::render::{Bitmap, TextDraw};
use crate::ui::feedback::{Feedback, FeedbackCue};
use crate::ui::focus::FocusError;

/// Label scale of large buttons
const LABEL_SCALE: f32 = 0.7;

/// Button state for visual feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    /// Normal resting state
    Normal,
    /// Mouse is hovering over button
    Hovered,
}

/// Click callback
pub type ClickHandler = Box<dyn FnMut()>;

/// Large button; does not take keyboard focus
pub struct LargeButton {
    bounds: Rect,
    state: ButtonState,
    on_click: Option<ClickHandler>,

    /// Button label text
    pub label: String,
}

impl LargeButton {
    /// Create a button occupying `bounds`
    pub fn new(bounds: Rect, label: impl Into<String>) -> Self {
        Self {
            bounds,
            state: ButtonState::Normal,
            on_click: None,
            label: label.into(),
        }
    }

    /// Set the click callback (builder pattern)
    #[must_use]
    pub fn on_click(mut self, handler: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Current hover state
    pub fn state(&self) -> ButtonState {
        self.state
    }
}

impl fmt::Debug for LargeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LargeButton")
            .field("bounds", &self.bounds)
            .field("state", &self.state)
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

impl Widget for LargeButton {
    fn bounds(&self) -> Rect {
        self.bounds.clone()
    }

    fn handle_click(&mut self, _cx: &mut EventContext<'_>) -> Result<(), FocusError> {
        log::debug!("Button '{}' clicked", self.label);
        if let Some(handler) = self.on_click.as_mut() {
            handler();
        }
        Ok(())
    }

    fn update_hover(&mut self, mouse: Vec2, feedback: &mut dyn Feedback) {
        let next = if self.bounds.contains_point(mouse) {
            ButtonState::Hovered
        } else {
            ButtonState::Normal
        };

        if next == ButtonState::Hovered && self.state == ButtonState::Normal {
            feedback.play(FeedbackCue::MenuTick);
        }
        self.state = next;
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<B: Bitmap + ?Sized> Drawable<B> for LargeButton {
    fn draw(&mut self, cx: &mut DrawContext<'_, B>) {
        let style = cx.style;
        let skin = cx.skin;
        let background = match self.state {
            ButtonState::Hovered => style.button_hover,
            ButtonState::Normal => style.button_idle,
        };
        cx.panel(&skin.button, &self.bounds, background);

        let mut label = TextDraw::new(self.label.clone(), self.bounds.center(), style.text_color).centered();
        label.scale = LABEL_SCALE;
        cx.text(&label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::feedback::RecordingFeedback;
    use crate::ui::focus::FocusGroup;
    use crate::ui::input::FrameInput;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_hover_enter_ticks_once() {
        let mut button = LargeButton::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Go");
        let mut feedback = RecordingFeedback::new();

        button.update_hover(Vec2::new(10.0, 10.0), &mut feedback);
        button.update_hover(Vec2::new(20.0, 10.0), &mut feedback);
        assert_eq!(button.state(), ButtonState::Hovered);
        assert_eq!(feedback.count(), 1);

        button.update_hover(Vec2::new(200.0, 10.0), &mut feedback);
        assert_eq!(button.state(), ButtonState::Normal);
        assert_eq!(feedback.count(), 1);

        button.update_hover(Vec2::new(0.0, 0.0), &mut feedback);
        assert_eq!(feedback.count(), 2);
    }

    #[test]
    fn test_click_runs_handler() {
        let clicks = Rc::new(Cell::new(0));
        let counter = Rc::clone(&clicks);
        let mut button = LargeButton::new(Rect::new(0.0, 0.0, 100.0, 50.0), "Go")
            .on_click(move || counter.set(counter.get() + 1));

        let mut group = FocusGroup::new();
        let mut input = FrameInput::default();
        let mut feedback = RecordingFeedback::new();
        let mut cx = EventContext { focus: &mut group, input: &mut input, feedback: &mut feedback };
        button.handle_click(&mut cx).unwrap();
        button.handle_click(&mut cx).unwrap();

        assert_eq!(clicks.get(), 2);
        assert!(button.focus_handle().is_none());
    }
}
