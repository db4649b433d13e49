//! # UI Kit
//!
//! Small building blocks for retained-mode game UIs.
//!
//! ## Features
//!
//! - **Geometry**: [`Rect`] with inclusive hit testing and edge/center queries
//! - **Nine-slice panels**: [`NineSlice`] stretches a bordered bitmap to any size
//!   without distorting its corners
//! - **Focus groups**: [`FocusGroup`] keeps keyboard focus inside a form and cycles
//!   it with Tab / Shift+Tab
//! - **Widgets**: checkbox, text input and large button built on the pieces above
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ui_kit::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let texture = Texture::solid_color(18, 18, [255, 255, 255, 255]);
//!     let style = UiStyle::default();
//!     let skin = Skin::new(&texture, &style)?;
//!
//!     let mut form: Form = Form::new();
//!     form.add_widget(Box::new(Checkbox::new(Rect::new(10.0, 10.0, 24.0, 24.0), false, false)))?;
//!
//!     let mut surface = RecordingSurface::new();
//!     let mut frame = FrameInput::default();
//!     form.update(&mut frame, &mut SilentFeedback)?;
//!     form.draw(&mut surface, &skin, &frame, &style, &mut SilentFeedback);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod geometry;
pub mod render;
pub mod ui;

pub use geometry::Rect;
pub use render::{Bitmap, NineSlice, RenderSurface, Texture};
pub use ui::{FocusError, FocusGroup, Form};

/// Common imports for UI code
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError, UiStyle},
        foundation::math::{Color, Vec2, Vec4},
        geometry::{Rect, RectSource},
        render::{
            Bitmap, BitmapError, NineSlice, NineSliceError, RecordingSurface, RenderSurface,
            SourceRect, SpriteDraw, SpriteEffects, Texture, TextDraw,
        },
        ui::{
            feedback::{Feedback, FeedbackCue, RecordingFeedback, SilentFeedback},
            input::{FrameInput, KeyboardState, Keys, MouseState, TextEdit},
            widgets::{
                ButtonState, Checkbox, DrawContext, Drawable, EventContext, LabeledCheckbox,
                LabeledTextInput, LargeButton, TextInput, Widget,
            },
            FocusError, FocusGroup, FocusHandle, Form, Skin, WidgetId,
        },
    };
}
