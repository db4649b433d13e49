//! Form frame driver
//!
//! A [`Form`] owns one focus group and an ordered list of widgets. The host calls
//! [`Form::update`] once per frame with fresh input, then [`Form::draw`].

use super::feedback::Feedback;
use super::focus::{FocusError, FocusGroup};
use super::input::FrameInput;
use super::skin::Skin;
use super::widgets::{DrawContext, Drawable, EventContext};
use crate::config::UiStyle;
use crate::render::{Bitmap, RenderSurface, Texture};

/// Identifier of a widget inside one form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId(pub u64);

/// Ordered widgets sharing one focus group
pub struct Form<B: Bitmap + ?Sized = Texture> {
    /// Focus group of every focusable widget in the form
    focus: FocusGroup,

    /// Widgets in draw order; later widgets sit on top
    widgets: Vec<(WidgetId, Box<dyn Drawable<B>>)>,

    /// Next widget ID
    next_id: u64,
}

impl<B: Bitmap + ?Sized> Form<B> {
    /// Create an empty form
    pub fn new() -> Self {
        Self {
            focus: FocusGroup::new(),
            widgets: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a widget on top of the existing ones.
    ///
    /// Focusable widgets join the form's focus group in insertion order, so
    /// insertion order is also tab order.
    pub fn add_widget(&mut self, mut widget: Box<dyn Drawable<B>>) -> Result<WidgetId, FocusError> {
        if let Some(handle) = widget.focus_handle_mut() {
            self.focus.add(handle)?;
        }

        let id = WidgetId(self.next_id);
        self.next_id += 1;
        self.widgets.push((id, widget));
        log::debug!("Form added widget {:?} ({} widgets)", id, self.widgets.len());
        Ok(id)
    }

    /// Remove a widget, taking it out of the focus group
    pub fn remove_widget(&mut self, id: WidgetId) -> Option<Box<dyn Drawable<B>>> {
        let index = self.widgets.iter().position(|(widget_id, _)| *widget_id == id)?;
        let (_, mut widget) = self.widgets.remove(index);
        if let Some(handle) = widget.focus_handle_mut() {
            self.focus.remove(handle);
        }
        Some(widget)
    }

    /// Number of widgets
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    /// Whether the form has no widgets
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Get a widget by ID as its concrete type
    pub fn get<T: 'static>(&self, id: WidgetId) -> Option<&T> {
        self.widgets
            .iter()
            .find(|(widget_id, _)| *widget_id == id)
            .and_then(|(_, widget)| widget.as_any().downcast_ref())
    }

    /// Get a mutable widget by ID as its concrete type
    pub fn get_mut<T: 'static>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.widgets
            .iter_mut()
            .find(|(widget_id, _)| *widget_id == id)
            .and_then(|(_, widget)| widget.as_any_mut().downcast_mut())
    }

    /// Focus group of the form
    pub fn focus_group(&self) -> &FocusGroup {
        &self.focus
    }

    /// Mutable focus group, e.g. to focus a widget programmatically
    pub fn focus_group_mut(&mut self) -> &mut FocusGroup {
        &mut self.focus
    }

    /// Whether the widget `id` currently has focus
    pub fn is_focused(&self, id: WidgetId, host_has_focus: bool) -> bool {
        self.widgets
            .iter()
            .find(|(widget_id, _)| *widget_id == id)
            .is_some_and(|(_, widget)| widget.is_focused(&self.focus, host_has_focus))
    }

    /// Update UI state (call once per frame before drawing).
    ///
    /// Runs tab navigation, hover tracking, then dispatches a click to the
    /// topmost widget under the cursor.
    pub fn update(
        &mut self,
        input: &mut FrameInput,
        feedback: &mut dyn Feedback,
    ) -> Result<(), FocusError> {
        self.focus.check_tab(&mut input.keyboard, input.host_has_focus, feedback);

        let mouse = input.mouse.position;
        for (_, widget) in &mut self.widgets {
            widget.update_hover(mouse, feedback);
        }

        if !input.mouse.clicked() {
            return Ok(());
        }

        let target = self
            .widgets
            .iter_mut()
            .rev()
            .find(|(_, widget)| widget.bounds().contains_point(mouse));

        if let Some((id, widget)) = target {
            log::trace!("Click at ({}, {}) hit widget {:?}", mouse.x, mouse.y, id);
            let mut cx = EventContext { focus: &mut self.focus, input, feedback };
            widget.handle_click(&mut cx)?;
        }
        Ok(())
    }

    /// Draw every widget in order
    pub fn draw(
        &mut self,
        surface: &mut dyn RenderSurface<B>,
        skin: &Skin<'_, B>,
        input: &FrameInput,
        style: &UiStyle,
        feedback: &mut dyn Feedback,
    ) {
        let mut cx = DrawContext {
            surface,
            skin,
            input,
            focus: &self.focus,
            style,
            feedback,
        };
        for (_, widget) in &mut self.widgets {
            widget.draw(&mut cx);
        }
    }
}

impl<B: Bitmap + ?Sized> Default for Form<B> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::render::{RecordedDraw, RecordingSurface};
    use crate::ui::feedback::RecordingFeedback;
    use crate::ui::input::Keys;
    use crate::ui::widgets::{Checkbox, LargeButton, TextInput};

    fn three_widget_form() -> (Form, WidgetId, WidgetId, WidgetId) {
        let mut form = Form::new();
        let name = form
            .add_widget(Box::new(TextInput::new(Rect::new(0.0, 0.0, 200.0, 36.0), None, "")))
            .unwrap();
        let agree = form
            .add_widget(Box::new(Checkbox::new(Rect::new(0.0, 50.0, 24.0, 24.0), false, false)))
            .unwrap();
        let submit = form
            .add_widget(Box::new(LargeButton::new(Rect::new(0.0, 100.0, 200.0, 50.0), "Submit")))
            .unwrap();
        (form, name, agree, submit)
    }

    #[test]
    fn test_only_focusable_widgets_join_group() {
        let (form, name, _, _) = three_widget_form();
        assert_eq!(form.len(), 3);
        assert_eq!(form.focus_group().len(), 2);
        assert!(form.is_focused(name, true));
        assert!(!form.is_focused(name, false));
    }

    #[test]
    fn test_tab_cycles_through_inputs() {
        let (mut form, name, agree, _) = three_widget_form();
        let mut input = FrameInput::default();
        let mut feedback = RecordingFeedback::new();

        input.keyboard.press(Keys::TAB);
        form.update(&mut input, &mut feedback).unwrap();
        assert!(form.is_focused(agree, true));
        assert_eq!(feedback.count(), 1);

        // Held tab does not cycle again
        input.advance();
        form.update(&mut input, &mut feedback).unwrap();
        assert!(form.is_focused(agree, true));

        input.keyboard.release(Keys::TAB);
        input.advance();
        input.keyboard.press(Keys::TAB);
        form.update(&mut input, &mut feedback).unwrap();
        assert!(form.is_focused(name, true));
    }

    #[test]
    fn test_click_hits_topmost_widget() {
        let mut form: Form = Form::new();
        let below = form
            .add_widget(Box::new(Checkbox::new(Rect::new(0.0, 0.0, 24.0, 24.0), false, false)))
            .unwrap();
        let above = form
            .add_widget(Box::new(Checkbox::new(Rect::new(12.0, 12.0, 24.0, 24.0), false, false)))
            .unwrap();

        let mut input = FrameInput::default();
        input.mouse.move_to(20.0, 20.0);
        input.mouse.set_left_button(true);
        form.update(&mut input, &mut RecordingFeedback::new()).unwrap();

        assert!(!form.get::<Checkbox>(below).unwrap().checked);
        assert!(form.get::<Checkbox>(above).unwrap().checked);
        assert!(form.is_focused(above, true));
    }

    #[test]
    fn test_click_outside_every_widget() {
        let (mut form, name, agree, _) = three_widget_form();
        let mut input = FrameInput::default();
        input.mouse.move_to(500.0, 500.0);
        input.mouse.set_left_button(true);
        form.update(&mut input, &mut RecordingFeedback::new()).unwrap();

        assert!(form.is_focused(name, true));
        assert!(!form.get::<Checkbox>(agree).unwrap().checked);
    }

    #[test]
    fn test_remove_focused_widget_moves_focus() {
        let (mut form, name, agree, _) = three_widget_form();
        let removed = form.remove_widget(name).unwrap();
        assert!(removed.focus_handle().unwrap().group().is_none());
        assert_eq!(form.len(), 2);
        assert!(form.is_focused(agree, true));
        assert!(form.remove_widget(name).is_none());
    }

    #[test]
    fn test_draw_visits_widgets_in_order() {
        let (mut form, _, agree, _) = three_widget_form();
        form.get_mut::<Checkbox>(agree).unwrap().checked = true;

        let panel = Texture::solid_color(18, 18, [255; 4]);
        let style = UiStyle::default();
        let skin = Skin::new(&panel, &style).unwrap();
        let mut surface = RecordingSurface::new();
        form.draw(&mut surface, &skin, &FrameInput::default(), &style, &mut RecordingFeedback::new());

        assert_eq!(surface.sprites().count(), 27);

        // Each widget's text follows its own panel
        let draws = surface.draws();
        assert_eq!(draws.len(), 30);
        assert!(matches!(&draws[9], RecordedDraw::Text(text) if text.text.is_empty()));
        assert!(matches!(&draws[19], RecordedDraw::Text(text) if text.text == "✓"));
        assert!(matches!(
            &draws[20],
            RecordedDraw::Sprite { bitmap_size: (18, 18), .. }
        ));
        let texts: Vec<_> = surface.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["", "✓", "Submit"]);
    }

    #[test]
    fn test_wrong_type_downcast() {
        let (form, name, _, _) = three_widget_form();
        assert!(form.get::<Checkbox>(name).is_none());
        assert!(form.get::<TextInput>(name).is_some());
    }
}
