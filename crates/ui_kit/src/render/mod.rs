//! Rendering module
//!
//! Backend-agnostic drawing: bitmaps, the sprite/text surface the host implements,
//! and the nine-slice panel compositor.

pub mod bitmap;
pub mod surface;
pub mod nine_slice;

pub use bitmap::{Bitmap, BitmapError, Texture};
pub use surface::{
    RecordingSurface, RecordedDraw, RenderSurface, SourceRect, SpriteDraw, SpriteEffects,
    TextDraw,
};
pub use nine_slice::{NineSlice, NineSliceError, NineSliceLayout, Band};
