//! Labeled inputs
//!
//! Wrappers that own an input widget plus a text label and forward clicks
//! anywhere in their bounds to the input.

use std::any::Any;

use super::checkbox::Checkbox;
use super::core::{DrawContext, Drawable, EventContext, Widget};
use super::text_input::TextInput;
use crate::config::UiStyle;
use crate::foundation::math::Vec2;
use crate::geometry::Rect;
use crate::render::{Bitmap, TextDraw};
use crate::ui::feedback::Feedback;
use crate::ui::focus::{FocusError, FocusHandle};

/// Offset of a text input's label from the top-left corner
const INPUT_LABEL_OFFSET: (f32, f32) = (-2.0, 2.0);

/// Checkbox with a label to its right
#[derive(Debug)]
pub struct LabeledCheckbox {
    bounds: Rect,

    /// The wrapped checkbox
    pub checkbox: Checkbox,

    /// Label text
    pub label: String,

    /// Gap between checkbox and label
    pub gap: f32,
}

impl LabeledCheckbox {
    /// Create a row `width` wide at `position`, one checkbox tall
    pub fn new(
        position: Vec2,
        width: f32,
        label: impl Into<String>,
        checked: bool,
        readonly: bool,
        style: &UiStyle,
    ) -> Self {
        let size = style.checkbox_size;
        Self {
            bounds: Rect::from_vectors(position, Vec2::new(width, size)),
            checkbox: Checkbox::new(Rect::from_vectors(position, Vec2::new(size, size)), checked, readonly),
            label: label.into(),
            gap: style.checkbox_label_gap,
        }
    }
}

impl Widget for LabeledCheckbox {
    fn bounds(&self) -> Rect {
        self.bounds.clone()
    }

    fn focus_handle(&self) -> Option<&FocusHandle> {
        self.checkbox.focus_handle()
    }

    fn focus_handle_mut(&mut self) -> Option<&mut FocusHandle> {
        self.checkbox.focus_handle_mut()
    }

    fn handle_click(&mut self, cx: &mut EventContext<'_>) -> Result<(), FocusError> {
        self.checkbox.handle_click(cx)
    }

    fn update_hover(&mut self, mouse: Vec2, feedback: &mut dyn Feedback) {
        self.checkbox.update_hover(mouse, feedback);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<B: Bitmap + ?Sized> Drawable<B> for LabeledCheckbox {
    fn draw(&mut self, cx: &mut DrawContext<'_, B>) {
        self.checkbox.draw(cx);

        let box_width = self.checkbox.bounds().width();
        let position = Vec2::new(
            self.bounds.x() + box_width + self.gap,
            self.bounds.center().y,
        );
        let mut label = TextDraw::new(self.label.clone(), position, cx.style.text_color);
        label.anchor = Vec2::new(0.0, 0.5);
        cx.text(&label);
    }
}

/// Text input with a label row above it
#[derive(Debug)]
pub struct LabeledTextInput {
    bounds: Rect,

    /// The wrapped input
    pub input: TextInput,

    /// Label text
    pub label: String,
}

impl LabeledTextInput {
    /// Create a labeled input `width` wide at `position`
    pub fn new(
        position: Vec2,
        width: f32,
        label: impl Into<String>,
        placeholder: Option<String>,
        value: impl Into<String>,
        style: &UiStyle,
    ) -> Self {
        let input_bounds = Rect::new(
            position.x,
            position.y + style.label_height,
            width,
            style.text_input_height,
        );
        Self {
            bounds: Rect::from_vectors(
                position,
                Vec2::new(width, style.label_height + style.text_input_height),
            ),
            input: TextInput::new(input_bounds, placeholder, value),
            label: label.into(),
        }
    }
}

impl Widget for LabeledTextInput {
    fn bounds(&self) -> Rect {
        self.bounds.clone()
    }

    fn focus_handle(&self) -> Option<&FocusHandle> {
        self.input.focus_handle()
    }

    fn focus_handle_mut(&mut self) -> Option<&mut FocusHandle> {
        self.input.focus_handle_mut()
    }

    fn handle_click(&mut self, cx: &mut EventContext<'_>) -> Result<(), FocusError> {
        self.input.handle_click(cx)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl<B: Bitmap + ?Sized> Drawable<B> for LabeledTextInput {
    fn draw(&mut self, cx: &mut DrawContext<'_, B>) {
        let (dx, dy) = INPUT_LABEL_OFFSET;
        let label = TextDraw::new(
            self.label.clone(),
            self.bounds.position + Vec2::new(dx, dy),
            cx.style.text_color,
        );
        cx.text(&label);

        self.input.draw(cx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{RecordingSurface, Texture};
    use crate::ui::feedback::RecordingFeedback;
    use crate::ui::focus::FocusGroup;
    use crate::ui::input::FrameInput;
    use crate::ui::skin::Skin;

    #[test]
    fn test_labeled_checkbox_layout() {
        let style = UiStyle::default();
        let row = LabeledCheckbox::new(Vec2::new(10.0, 10.0), 300.0, "Remember me", false, false, &style);
        assert_eq!(row.bounds(), Rect::new(10.0, 10.0, 300.0, 24.0));
        assert_eq!(row.checkbox.bounds(), Rect::new(10.0, 10.0, 24.0, 24.0));
    }

    #[test]
    fn test_label_click_forwards_to_checkbox() {
        let style = UiStyle::default();
        let mut group = FocusGroup::new();
        let mut row = LabeledCheckbox::new(Vec2::new(0.0, 0.0), 300.0, "Remember me", false, false, &style);
        group.add(row.focus_handle_mut().unwrap()).unwrap();

        let mut input = FrameInput::default();
        let mut feedback = RecordingFeedback::new();
        let mut cx = EventContext { focus: &mut group, input: &mut input, feedback: &mut feedback };
        row.handle_click(&mut cx).unwrap();

        assert!(row.checkbox.checked);
        assert!(row.is_focused(&group, true));
        assert!(row.checkbox.is_focused(&group, true));
    }

    #[test]
    fn test_labeled_text_input_layout_and_draw() {
        let style = UiStyle::default();
        let panel = Texture::solid_color(18, 18, [255; 4]);
        let skin = Skin::new(&panel, &style).unwrap();
        let group = FocusGroup::new();
        let frame = FrameInput::default();
        let mut surface = RecordingSurface::new();
        let mut feedback = RecordingFeedback::new();

        let mut field = LabeledTextInput::new(
            Vec2::new(0.0, 100.0),
            250.0,
            "Username",
            Some("player1".to_string()),
            "",
            &style,
        );
        assert_eq!(field.bounds().height(), 60.0);
        assert_eq!(field.input.bounds(), Rect::new(0.0, 124.0, 250.0, 36.0));

        let mut cx = DrawContext {
            surface: &mut surface,
            skin: &skin,
            input: &frame,
            focus: &group,
            style: &style,
            feedback: &mut feedback,
        };
        field.draw(&mut cx);

        let texts: Vec<_> = surface.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Username", "player1"]);
        assert_eq!(surface.sprites().count(), 9);
    }
}
