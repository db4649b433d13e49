//! Math utilities and types
//!
//! 2D vector and RGBA colour types shared by geometry, rendering and widgets.

pub use nalgebra::{Vector2, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// RGBA colour with channels in `0.0..=1.0`
pub type Color = Vec4;

/// Colour helpers
pub mod color {
    use super::Color;

    /// Opaque white
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque mid gray, used for placeholder text
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5, 1.0);

    /// Build an opaque colour from 8-bit channels
    pub fn rgb8(r: u8, g: u8, b: u8) -> Color {
        Color::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    /// Multiply every channel (alpha included) by `factor`.
    ///
    /// This is the premultiplied fade used for dimmed widget states.
    pub fn fade(color: Color, factor: f32) -> Color {
        color * factor
    }
}

#[cfg(test)]
mod tests {
    use super::color;
    use approx::assert_relative_eq;

    #[test]
    fn test_fade_scales_all_channels() {
        let faded = color::fade(color::WHITE, 0.3);
        assert_relative_eq!(faded.x, 0.3);
        assert_relative_eq!(faded.w, 0.3);
    }

    #[test]
    fn test_rgb8() {
        let c = color::rgb8(255, 0, 51);
        assert_relative_eq!(c.x, 1.0);
        assert_relative_eq!(c.y, 0.0);
        assert_relative_eq!(c.z, 0.2);
        assert_relative_eq!(c.w, 1.0);
    }
}
