//! Core widget traits and contexts
//!
//! Widgets are plain structs composed of smaller parts (a labeled checkbox owns a
//! checkbox and a label). Two small traits give the frame driver what it needs:
//! [`Widget`] for bounds, focus and input, and [`Drawable`] for drawing against a
//! host bitmap type.

use std::any::Any;

use crate::config::UiStyle;
use crate::foundation::math::{Color, Vec2};
use crate::geometry::Rect;
use crate::render::{Bitmap, NineSlice, RenderSurface, TextDraw, Texture};
use crate::ui::feedback::Feedback;
use crate::ui::focus::{FocusError, FocusGroup, FocusHandle};
use crate::ui::input::FrameInput;
use crate::ui::skin::Skin;

/// Mutable state available while handling a click
pub struct EventContext<'a> {
    /// Focus group of the form being clicked
    pub focus: &'a mut FocusGroup,
    /// Current frame input
    pub input: &'a mut FrameInput,
    /// Feedback sink
    pub feedback: &'a mut dyn Feedback,
}

/// State available during a draw pass
pub struct DrawContext<'a, B: Bitmap + ?Sized = Texture> {
    /// Host surface receiving the draw calls
    pub surface: &'a mut dyn RenderSurface<B>,
    /// Nine-slice compositors for each widget kind
    pub skin: &'a Skin<'a, B>,
    /// Current frame input
    pub input: &'a FrameInput,
    /// Focus group of the form being drawn
    pub focus: &'a FocusGroup,
    /// Sizes, colours and timings
    pub style: &'a UiStyle,
    /// Feedback sink
    pub feedback: &'a mut dyn Feedback,
}

impl<'a, B: Bitmap + ?Sized> DrawContext<'a, B> {
    /// Whether `handle` is focused, taking host focus into account
    pub fn is_focused(&self, handle: &FocusHandle) -> bool {
        self.focus.is_focused(handle, self.input.host_has_focus)
    }

    /// Paint a nine-slice panel at scale 1
    pub fn panel(&mut self, slice: &NineSlice<'_, B>, target: &Rect, tint: Color) {
        slice.draw_unscaled(self.surface, target, tint);
    }

    /// Draw a text string
    pub fn text(&mut self, text: &TextDraw) {
        self.surface.draw_text(text);
    }
}

/// Capabilities shared by every widget
pub trait Widget {
    /// Drawing and hit-test area
    fn bounds(&self) -> Rect;

    /// Focus identity, for widgets that take keyboard focus
    fn focus_handle(&self) -> Option<&FocusHandle> {
        None
    }

    /// Mutable focus identity, used when registering with a focus group
    fn focus_handle_mut(&mut self) -> Option<&mut FocusHandle> {
        None
    }

    /// Whether this widget holds focus in `group` while the host has focus
    fn is_focused(&self, group: &FocusGroup, host_has_focus: bool) -> bool {
        self.focus_handle()
            .is_some_and(|handle| group.is_focused(handle, host_has_focus))
    }

    /// React to a click inside [`Widget::bounds`]
    fn handle_click(&mut self, cx: &mut EventContext<'_>) -> Result<(), FocusError>;

    /// Track the mouse cursor once per frame
    fn update_hover(&mut self, _mouse: Vec2, _feedback: &mut dyn Feedback) {}

    /// Downcast support for reading widget state back out of a form
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Widgets that can draw themselves onto a surface for bitmap type `B`
pub trait Drawable<B: Bitmap + ?Sized = Texture>: Widget {
    /// Draw the widget; may also advance per-frame widget state
    fn draw(&mut self, cx: &mut DrawContext<'_, B>);
}

/// Shared click behaviour of focusable inputs: swallow the input event and take
/// focus in the widget's group
pub(crate) fn focus_on_click(
    handle: &FocusHandle,
    cx: &mut EventContext<'_>,
) -> Result<(), FocusError> {
    cx.input.keyboard.consume();
    if handle.group().is_some() {
        cx.focus.focus(handle)?;
    }
    Ok(())
}
