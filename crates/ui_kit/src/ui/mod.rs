//! UI System Module
//!
//! Architecture:
//! - focus: focus groups and tab cycling
//! - input: per-frame keyboard and mouse snapshots
//! - feedback: interaction feedback hook
//! - skin: per-widget nine-slice compositors
//! - widgets: checkbox, text input, button and labeled wrappers
//! - form: frame driver tying the above together

pub mod focus;
pub mod input;
pub mod feedback;
pub mod skin;
pub mod widgets;
pub mod form;

pub use focus::{FocusError, FocusGroup, FocusGroupId, FocusHandle, FocusTargetId};
pub use form::{Form, WidgetId};
pub use skin::Skin;
