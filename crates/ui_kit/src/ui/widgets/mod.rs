//! UI widgets module
//!
//! Contains the form widgets (checkbox, text input, large button and the
//! labeled wrappers)

pub mod core;
pub mod checkbox;
pub mod text_input;
pub mod button;
pub mod labeled;

// Re-export core types
pub use core::{DrawContext, Drawable, EventContext, Widget};

// Re-export widget types
pub use checkbox::Checkbox;
pub use text_input::{TextFilter, TextInput};
pub use button::{ButtonState, ClickHandler, LargeButton};
pub use labeled::{LabeledCheckbox, LabeledTextInput};
