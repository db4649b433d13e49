//! Geometry primitives
//!
//! Screen-space shapes used for widget bounds and draw targets.

pub mod rect;

pub use rect::{Rect, RectSource};
