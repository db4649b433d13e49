//! Render surface trait
//!
//! Defines the interface between the UI kit and the host's sprite batcher.
//! Keeps widgets and the compositor independent of any graphics API.

use bitflags::bitflags;

use super::bitmap::Bitmap;
use crate::foundation::math::{Color, Vec2};

/// Integer source rectangle inside a bitmap, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceRect {
    /// Left edge
    pub x: i32,
    /// Top edge
    pub y: i32,
    /// Width
    pub width: i32,
    /// Height
    pub height: i32,
}

impl SourceRect {
    /// Create a source rectangle
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Number of pixels covered (zero for empty or negative extents)
    pub fn area(&self) -> i64 {
        i64::from(self.width.max(0)) * i64::from(self.height.max(0))
    }
}

bitflags! {
    /// Mirroring applied to a sprite draw
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct SpriteEffects: u8 {
        /// Mirror along the vertical axis
        const FLIP_HORIZONTALLY = 0b01;
        /// Mirror along the horizontal axis
        const FLIP_VERTICALLY = 0b10;
    }
}

/// One sprite blit: a source rectangle of a bitmap drawn at a position and scale
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw {
    /// Destination of the sprite origin in screen pixels
    pub position: Vec2,
    /// Region of the bitmap to draw
    pub source: SourceRect,
    /// Colour multiplied with the bitmap
    pub tint: Color,
    /// Rotation in radians around `origin`
    pub rotation: f32,
    /// Origin inside the source region
    pub origin: Vec2,
    /// Per-axis scale; negative values mirror the sprite
    pub scale: Vec2,
    /// Mirroring flags
    pub effects: SpriteEffects,
    /// Sort depth, 0 = front
    pub layer_depth: f32,
}

impl SpriteDraw {
    /// Unrotated, unmirrored blit at depth 0
    pub fn new(position: Vec2, source: SourceRect, tint: Color, scale: Vec2) -> Self {
        Self {
            position,
            source,
            tint,
            rotation: 0.0,
            origin: Vec2::zeros(),
            scale,
            effects: SpriteEffects::empty(),
            layer_depth: 0.0,
        }
    }

    /// Size of the drawn area in screen pixels (may be negative when mirrored)
    pub fn drawn_size(&self) -> Vec2 {
        Vec2::new(
            self.source.width as f32 * self.scale.x,
            self.source.height as f32 * self.scale.y,
        )
    }
}

/// Outlined text string drawn by the host's text primitive
#[derive(Debug, Clone, PartialEq)]
pub struct TextDraw {
    /// Text content
    pub text: String,
    /// Anchor position in screen pixels
    pub position: Vec2,
    /// Text colour
    pub color: Color,
    /// Uniform text scale
    pub scale: f32,
    /// Normalized anchor inside the text bounds; (0, 0) = top-left, (0.5, 0.5) = center
    pub anchor: Vec2,
}

impl TextDraw {
    /// Text anchored at its top-left corner, unscaled
    pub fn new(text: impl Into<String>, position: Vec2, color: Color) -> Self {
        Self {
            text: text.into(),
            position,
            color,
            scale: 1.0,
            anchor: Vec2::zeros(),
        }
    }

    /// Anchor the text at its center instead of its top-left corner
    #[must_use]
    pub fn centered(mut self) -> Self {
        self.anchor = Vec2::new(0.5, 0.5);
        self
    }
}

/// Host drawing interface
///
/// `B` is the host's bitmap type. Draw calls are fire-and-forget: a surface
/// must accept any finite scale, including zero and negative values.
pub trait RenderSurface<B: Bitmap + ?Sized> {
    /// Blit part of a bitmap
    fn draw_sprite(&mut self, bitmap: &B, sprite: &SpriteDraw);

    /// Draw a text string
    fn draw_text(&mut self, text: &TextDraw);
}

/// A draw call captured by [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedDraw {
    /// Sprite blit
    Sprite {
        /// Dimensions of the bitmap that was drawn from
        bitmap_size: (u32, u32),
        /// The blit itself
        sprite: SpriteDraw,
    },
    /// Text string
    Text(TextDraw),
}

/// Surface that records every call instead of drawing.
///
/// Used by tests and headless runs to observe what a draw pass produced.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    draws: Vec<RecordedDraw>,
}

impl RecordingSurface {
    /// Create an empty recording surface
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls in issue order
    pub fn draws(&self) -> &[RecordedDraw] {
        &self.draws
    }

    /// Recorded sprite blits in issue order
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteDraw> {
        self.draws.iter().filter_map(|draw| match draw {
            RecordedDraw::Sprite { sprite, .. } => Some(sprite),
            RecordedDraw::Text(_) => None,
        })
    }

    /// Recorded text draws in issue order
    pub fn texts(&self) -> impl Iterator<Item = &TextDraw> {
        self.draws.iter().filter_map(|draw| match draw {
            RecordedDraw::Text(text) => Some(text),
            RecordedDraw::Sprite { .. } => None,
        })
    }

    /// Forget everything recorded so far
    pub fn clear(&mut self) {
        self.draws.clear();
    }
}

impl<B: Bitmap + ?Sized> RenderSurface<B> for RecordingSurface {
    fn draw_sprite(&mut self, bitmap: &B, sprite: &SpriteDraw) {
        self.draws.push(RecordedDraw::Sprite {
            bitmap_size: (bitmap.width(), bitmap.height()),
            sprite: sprite.clone(),
        });
    }

    fn draw_text(&mut self, text: &TextDraw) {
        self.draws.push(RecordedDraw::Text(text.clone()));
    }
}
