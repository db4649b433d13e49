//! Bitmaps the compositor slices
//!
//! The compositor only needs pixel dimensions, so any host texture type can
//! implement [`Bitmap`]. [`Texture`] is an owned RGBA8 bitmap loaded with the
//! `image` crate for hosts that have nothing better.

use std::path::Path;

/// Read-only bitmap with integer pixel dimensions
pub trait Bitmap {
    /// Width in pixels
    fn width(&self) -> u32;

    /// Height in pixels
    fn height(&self) -> u32;
}

/// Bitmap loading errors
#[derive(thiserror::Error, Debug)]
pub enum BitmapError {
    /// Decoding or file access failed
    #[error("Failed to load bitmap: {0}")]
    Image(#[from] image::ImageError),
}

/// Owned RGBA8 bitmap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Texture {
    /// Load a texture from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, BitmapError> {
        let path_ref = path.as_ref();
        log::debug!("Loading texture from: {path_ref:?}");

        let rgba = image::open(path_ref)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::info!("Loaded texture {width}x{height} from {path_ref:?}");

        Ok(Self { data: rgba.into_raw(), width, height })
    }

    /// Load a texture from encoded image bytes (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BitmapError> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("Loaded texture {width}x{height} from memory");

        Ok(Self { data: rgba.into_raw(), width, height })
    }

    /// Create a texture filled with one colour
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let data = color.repeat(width as usize * height as usize);
        Self { data, width, height }
    }

    /// Raw RGBA pixel data, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }
}

impl Bitmap for Texture {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color_texture() {
        let texture = Texture::solid_color(4, 3, [255, 0, 0, 255]);
        assert_eq!(texture.width(), 4);
        assert_eq!(texture.height(), 3);
        assert_eq!(texture.pixels().len(), 4 * 3 * 4);
        assert_eq!(&texture.pixels()[0..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_from_bytes_png() {
        let mut png = Vec::new();
        image::RgbaImage::from_pixel(5, 7, image::Rgba([1, 2, 3, 4]))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();

        let texture = Texture::from_bytes(&png).unwrap();
        assert_eq!((texture.width(), texture.height()), (5, 7));
        assert_eq!(&texture.pixels()[0..4], &[1, 2, 3, 4]);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(matches!(Texture::from_bytes(b"not a png"), Err(BitmapError::Image(_))));
    }
}
