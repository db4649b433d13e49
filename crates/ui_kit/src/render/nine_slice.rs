//! Nine-slice panel compositor
//!
//! Slices a bitmap into four corners, four stretchable edges and a stretchable
//! center, then draws those nine pieces into a destination rectangle of any size:
//!
//! ```text
//!  +----+----------+----+
//!  | TL |  top     | TR |   row 0: drawn at the uniform scale vertically
//!  +----+----------+----+
//!  | L  |  center  | R  |   row 1: stretched vertically
//!  +----+----------+----+
//!  | BL |  bottom  | BR |   row 2: drawn at the uniform scale vertically
//!  +----+----------+----+
//!   col 0   col 1   col 2
//! ```
//!
//! The partition is computed once at construction. Drawing is a pure function of
//! the destination rectangle, tint and scale.

use super::bitmap::{Bitmap, Texture};
use super::surface::{RenderSurface, SourceRect, SpriteDraw};
use crate::foundation::math::{Color, Vec2};
use crate::geometry::Rect;

/// Errors raised when border insets do not fit the bitmap
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NineSliceError {
    /// Left and right insets are wider than the bitmap
    #[error("left ({left}) + right ({right}) border exceeds bitmap width {width}")]
    BordersExceedWidth {
        /// Left inset
        left: u32,
        /// Right inset
        right: u32,
        /// Bitmap width
        width: u32,
    },

    /// Top and bottom insets are taller than the bitmap
    #[error("top ({top}) + bottom ({bottom}) border exceeds bitmap height {height}")]
    BordersExceedHeight {
        /// Top inset
        top: u32,
        /// Bottom inset
        bottom: u32,
        /// Bitmap height
        height: u32,
    },
}

/// Placement of one row or column band in target space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Leading edge in screen pixels
    pub origin: f32,
    /// Scale applied to the band's source pixels
    pub scale: f32,
}

/// Target-space placement of all nine cells for one draw
#[derive(Debug, Clone, PartialEq)]
pub struct NineSliceLayout {
    /// Stretched size of the middle column and row.
    ///
    /// Negative when the target is smaller than the scaled borders.
    pub inner: Vec2,
    /// Column bands, left to right
    pub columns: [Band; 3],
    /// Row bands, top to bottom
    pub rows: [Band; 3],
}

/// Nine-slice compositor over a borrowed bitmap
///
/// Several compositors may share one bitmap with different insets; the bitmap
/// is never copied or modified.
#[derive(Debug, Clone)]
pub struct NineSlice<'a, B: Bitmap + ?Sized = Texture> {
    bitmap: &'a B,
    widths: [u32; 3],
    heights: [u32; 3],
    source_rects: [[SourceRect; 3]; 3],
}

impl<'a, B: Bitmap + ?Sized> NineSlice<'a, B> {
    /// Slice `bitmap` with independent insets on every side
    pub fn new(
        bitmap: &'a B,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Result<Self, NineSliceError> {
        let (width, height) = (bitmap.width(), bitmap.height());

        if u64::from(left) + u64::from(right) > u64::from(width) {
            return Err(NineSliceError::BordersExceedWidth { left, right, width });
        }
        if u64::from(top) + u64::from(bottom) > u64::from(height) {
            return Err(NineSliceError::BordersExceedHeight { top, bottom, height });
        }

        let widths = [left, width - left - right, right];
        let heights = [top, height - top - bottom, bottom];
        let source_x = [0, left, width - right];
        let source_y = [0, top, height - bottom];

        let mut source_rects = [[SourceRect::default(); 3]; 3];
        for (row, cells) in source_rects.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = SourceRect::new(
                    to_pixels(source_x[col]),
                    to_pixels(source_y[row]),
                    to_pixels(widths[col]),
                    to_pixels(heights[row]),
                );
            }
        }

        log::debug!(
            "Sliced {width}x{height} bitmap: widths {widths:?}, heights {heights:?}"
        );

        Ok(Self { bitmap, widths, heights, source_rects })
    }

    /// Slice with the same corner width on both sides and the same corner height
    /// top and bottom
    pub fn with_corner(
        bitmap: &'a B,
        corner_width: u32,
        corner_height: u32,
    ) -> Result<Self, NineSliceError> {
        Self::new(bitmap, corner_width, corner_width, corner_height, corner_height)
    }

    /// Slice with one square corner size on all four sides
    pub fn uniform(bitmap: &'a B, corner: u32) -> Result<Self, NineSliceError> {
        Self::with_corner(bitmap, corner, corner)
    }

    /// The sliced bitmap
    pub fn bitmap(&self) -> &'a B {
        self.bitmap
    }

    /// Source column widths: left border, middle, right border
    pub fn widths(&self) -> [u32; 3] {
        self.widths
    }

    /// Source row heights: top border, middle, bottom border
    pub fn heights(&self) -> [u32; 3] {
        self.heights
    }

    /// Source region of a cell; `row` and `col` are in `0..3`
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more.
    pub fn source_rect(&self, row: usize, col: usize) -> SourceRect {
        self.source_rects[row][col]
    }

    /// Compute where each band lands for a target rectangle.
    ///
    /// Inner sizes are not clamped: a target smaller than the scaled borders
    /// yields a negative inner size and a negative (mirroring) middle scale.
    pub fn layout(&self, target: &Rect, scale: f32) -> NineSliceLayout {
        let inner = Vec2::new(
            target.width() - (self.widths[0] + self.widths[2]) as f32 * scale,
            target.height() - (self.heights[0] + self.heights[2]) as f32 * scale,
        );

        NineSliceLayout {
            inner,
            columns: bands(target.x(), self.widths, inner.x, scale),
            rows: bands(target.y(), self.heights, inner.y, scale),
        }
    }

    /// Draw the nine cells into `target` with a tint and uniform border scale.
    ///
    /// Issues exactly nine sprite draws, row by row.
    pub fn draw(&self, surface: &mut dyn RenderSurface<B>, target: &Rect, tint: Color, scale: f32) {
        let layout = self.layout(target, scale);
        if layout.inner.x < 0.0 || layout.inner.y < 0.0 {
            log::trace!(
                "Nine-slice target {:?} is smaller than its borders (inner {:?})",
                target,
                layout.inner
            );
        }

        for (row, row_band) in layout.rows.iter().enumerate() {
            for (col, col_band) in layout.columns.iter().enumerate() {
                let sprite = SpriteDraw::new(
                    Vec2::new(col_band.origin, row_band.origin),
                    self.source_rects[row][col],
                    tint,
                    Vec2::new(col_band.scale, row_band.scale),
                );
                surface.draw_sprite(self.bitmap, &sprite);
            }
        }
    }

    /// Draw at scale 1
    pub fn draw_unscaled(&self, surface: &mut dyn RenderSurface<B>, target: &Rect, tint: Color) {
        self.draw(surface, target, tint, 1.0);
    }
}

/// Lay out one axis: leading border, stretched middle, trailing border
fn bands(start: f32, sizes: [u32; 3], inner: f32, scale: f32) -> [Band; 3] {
    let leading = start;
    let middle = leading + sizes[0] as f32 * scale;
    let trailing = middle + inner;

    [
        Band { origin: leading, scale: band_scale(sizes[0], scale) },
        Band { origin: middle, scale: band_scale(sizes[1], inner / sizes[1].max(1) as f32) },
        Band { origin: trailing, scale: band_scale(sizes[2], scale) },
    ]
}

/// Empty bands draw nothing whatever their scale, so they get 1 instead of a ratio
/// over zero
fn band_scale(size: u32, scale: f32) -> f32 {
    if size == 0 {
        1.0
    } else {
        scale
    }
}

/// Bitmap dimensions beyond `i32::MAX` do not occur in practice
fn to_pixels(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
