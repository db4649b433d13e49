//! Axis-aligned rectangle
//!
//! Screen-space rectangle stored as a position plus dimensions. Every edge is
//! derived from those two vectors, so moving or resizing can never leave a stale
//! edge behind.

use crate::foundation::math::Vec2;

/// Axis-aligned rectangle with a top-left position and dimensions.
///
/// Width and height may be zero or negative. A negative dimension makes
/// [`Rect::contains`] false for every point.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    /// Top-left corner in screen pixels
    pub position: Vec2,

    /// Width and height in screen pixels
    pub dimensions: Vec2,
}

impl Rect {
    /// Create a rectangle from its top-left corner and size
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            dimensions: Vec2::new(width, height),
        }
    }

    /// Create a rectangle from position and dimension vectors
    pub fn from_vectors(position: Vec2, dimensions: Vec2) -> Self {
        Self { position, dimensions }
    }

    /// Left edge
    pub fn x(&self) -> f32 {
        self.position.x
    }

    /// Top edge
    pub fn y(&self) -> f32 {
        self.position.y
    }

    /// Horizontal extent
    pub fn width(&self) -> f32 {
        self.dimensions.x
    }

    /// Vertical extent
    pub fn height(&self) -> f32 {
        self.dimensions.y
    }

    /// Left edge (same as [`Rect::x`])
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Top edge (same as [`Rect::y`])
    pub fn top(&self) -> f32 {
        self.position.y
    }

    /// Right edge, `x + width`
    pub fn right(&self) -> f32 {
        self.position.x + self.dimensions.x
    }

    /// Bottom edge, `y + height`
    pub fn bottom(&self) -> f32 {
        self.position.y + self.dimensions.y
    }

    /// Replace both position components
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Replace both dimension components
    pub fn set_dimensions(&mut self, dimensions: Vec2) {
        self.dimensions = dimensions;
    }

    /// Check if a point lies inside the rectangle, edges included
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && y >= self.top() && x <= self.right() && y <= self.bottom()
    }

    /// Check if a point vector lies inside the rectangle, edges included
    pub fn contains_point(&self, point: Vec2) -> bool {
        self.contains(point.x, point.y)
    }

    /// Center point, `position + dimensions / 2`
    pub fn center(&self) -> Vec2 {
        self.position + self.dimensions / 2.0
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Anything exposing `x/y/width/height` accessors, such as a host layout result
pub trait RectSource {
    /// Left edge
    fn x(&self) -> f32;
    /// Top edge
    fn y(&self) -> f32;
    /// Horizontal extent
    fn width(&self) -> f32;
    /// Vertical extent
    fn height(&self) -> f32;
}

impl Rect {
    /// Normalize an external layout rectangle
    pub fn from_source<S: RectSource + ?Sized>(source: &S) -> Self {
        Self::new(source.x(), source.y(), source.width(), source.height())
    }
}
