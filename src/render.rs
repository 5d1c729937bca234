//! Rendering capability consumed by the runtime.
//!
//! The runtime never touches pixels itself. The host supplies an
//! implementation of [`Renderer`] able to blit a sub-rectangle of a source
//! image to a destination rectangle with alpha compositing, and to read back
//! the color of a single screen coordinate. The draw pass in
//! [`systems::render`](crate::systems::render) decides what to blit; this
//! module only defines the seam.

use std::fmt;

/// Host-provided blitting and pixel-readback capability.
pub trait Renderer {
    /// Copy the `src` sub-rectangle of the image behind `tex_key` to the
    /// `dst` rectangle of the output surface, compositing with `alpha`
    /// (0 transparent, 1 opaque).
    #[allow(clippy::too_many_arguments)]
    fn blit(
        &mut self,
        tex_key: &str,
        src_x: f32,
        src_y: f32,
        src_w: f32,
        src_h: f32,
        dst_x: f32,
        dst_y: f32,
        dst_w: f32,
        dst_h: f32,
        alpha: f32,
    );

    /// RGB of a single output coordinate.
    fn pixel(&self, x: i32, y: i32) -> (u8, u8, u8);
}

/// Non-send holder for the boxed renderer, inserted into the world by the
/// host and consumed by the draw pass.
pub struct RenderSink(pub Box<dyn Renderer>);

/// Color channel outside the 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorError {
    pub value: u32,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color channel {} exceeds 255", self.value)
    }
}

impl std::error::Error for ColorError {}

/// Format an RGB triple as a six-digit lowercase hex string.
///
/// Any channel above 255 is a domain error.
pub fn rgb_to_hex(r: u32, g: u32, b: u32) -> Result<String, ColorError> {
    for channel in [r, g, b] {
        if channel > 255 {
            return Err(ColorError { value: channel });
        }
    }
    Ok(format!("{:02x}{:02x}{:02x}", r, g, b))
}

/// Read the color under a screen coordinate as a hex string.
pub fn get_color(renderer: &dyn Renderer, x: i32, y: i32) -> Result<String, ColorError> {
    let (r, g, b) = renderer.pixel(x, y);
    rgb_to_hex(u32::from(r), u32::from(g), u32::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_to_hex_white() {
        assert_eq!(rgb_to_hex(255, 255, 255).unwrap(), "ffffff");
    }

    #[test]
    fn test_rgb_to_hex_black_pads() {
        assert_eq!(rgb_to_hex(0, 0, 0).unwrap(), "000000");
    }

    #[test]
    fn test_rgb_to_hex_mixed() {
        assert_eq!(rgb_to_hex(255, 99, 7).unwrap(), "ff6307");
    }

    #[test]
    fn test_rgb_to_hex_rejects_channel_above_255() {
        assert_eq!(rgb_to_hex(256, 0, 0).unwrap_err(), ColorError { value: 256 });
        assert!(rgb_to_hex(0, 300, 0).is_err());
        assert!(rgb_to_hex(0, 0, 1000).is_err());
    }

    struct FixedPixel(u8, u8, u8);

    impl Renderer for FixedPixel {
        fn blit(
            &mut self,
            _tex_key: &str,
            _src_x: f32,
            _src_y: f32,
            _src_w: f32,
            _src_h: f32,
            _dst_x: f32,
            _dst_y: f32,
            _dst_w: f32,
            _dst_h: f32,
            _alpha: f32,
        ) {
        }

        fn pixel(&self, _x: i32, _y: i32) -> (u8, u8, u8) {
            (self.0, self.1, self.2)
        }
    }

    #[test]
    fn test_get_color_formats_pixel() {
        let r = FixedPixel(18, 52, 86);
        assert_eq!(get_color(&r, 0, 0).unwrap(), "123456");
    }
}
