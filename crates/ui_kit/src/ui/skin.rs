//! Widget skins
//!
//! A [`Skin`] holds one nine-slice compositor per widget kind. It is built once
//! at resource-load time and passed by reference to every draw pass, so there is
//! no hidden global texture cache.

use crate::config::UiStyle;
use crate::render::{Bitmap, NineSlice, NineSliceError, Texture};

/// Nine-slice compositors for every widget kind
#[derive(Debug)]
pub struct Skin<'a, B: Bitmap + ?Sized = Texture> {
    /// Checkbox frame
    pub checkbox: NineSlice<'a, B>,
    /// Text input background
    pub text_input: NineSlice<'a, B>,
    /// Large button background
    pub button: NineSlice<'a, B>,
}

impl<'a, B: Bitmap + ?Sized> Skin<'a, B> {
    /// Slice one shared panel bitmap for all widget kinds using the style's border
    pub fn new(panel: &'a B, style: &UiStyle) -> Result<Self, NineSliceError> {
        let border = style.panel_border;
        Ok(Self {
            checkbox: NineSlice::uniform(panel, border)?,
            text_input: NineSlice::uniform(panel, border)?,
            button: NineSlice::uniform(panel, border)?,
        })
    }
}
