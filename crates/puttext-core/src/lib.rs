//! Puttext Core: glyphs in, tinted pixels out
//!
//! Text enters as characters and leaves as an RGB or RGBA image ready to be
//! dropped onto another picture. The crate owns the whole layout and
//! compositing path; turning a character into coverage is left to a
//! [`GlyphRasterizer`] backend.
//!
//! ## The Path
//!
//! 1. **Glyph** - the rasterizer yields coverage, a [`glyph::GlyphFrame`]
//!    pads it with advance space and finds its shift from the baseline
//! 2. **Line** - [`line::LineCompositor`] stamps frames onto one baseline
//! 3. **Page** - [`page::PageCompositor`] aligns and stacks the lines
//! 4. **Color** - [`color::colorize`] tints the page, optionally over a box
//! 5. **Overlay** - [`overlay::overlay`] drops the result onto a background
//!
//! ## Render Some Text
//!
//! ```rust,no_run
//! use puttext_core::{RenderConfig, Rgb, TextRenderer};
//! # use puttext_core::{glyph::GlyphMetrics, GlyphRasterizer};
//! # struct MyRasterizer;
//! # impl GlyphRasterizer for MyRasterizer {
//! #     fn name(&self) -> &'static str { "doc" }
//! #     fn rasterize(&mut self, _: char, _: u32) -> puttext_core::Result<GlyphMetrics> {
//! #         unimplemented!()
//! #     }
//! # }
//!
//! let config = RenderConfig::builder("fonts/Inter.ttf", 32, Rgb::new(255, 0, 0))
//!     .align("center")
//!     .build()?;
//!
//! let mut renderer = TextRenderer::new(config, MyRasterizer, true);
//! let image = renderer.render("Hello,\nworld")?;
//! assert_eq!(image.format, puttext_core::PixelFormat::Rgba8);
//! # Ok::<(), puttext_core::PuttextError>(())
//! ```

pub mod canvas;
pub mod color;
pub mod config;
pub mod error;
pub mod glyph;
pub mod line;
pub mod overlay;
pub mod page;
pub mod renderer;
pub mod traits;

pub use canvas::{Canvas, LineCanvas, PageCanvas};
pub use config::{Alignment, MalformedGlyphPolicy, RenderConfig, RenderConfigBuilder};
pub use error::{Result, PuttextError};
pub use renderer::TextRenderer;
pub use traits::{FontRef, GlyphRasterizer};
pub use types::{PixelFormat, RenderedImage, Rgb};

/// The data structures that leave the compositor
pub mod types {
    /// Opaque 8-bit color
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Rgb {
        pub r: u8,
        pub g: u8,
        pub b: u8,
    }

    impl Rgb {
        pub const fn new(r: u8, g: u8, b: u8) -> Self {
            Self { r, g, b }
        }

        pub const fn black() -> Self {
            Self::new(0, 0, 0)
        }

        pub const fn white() -> Self {
            Self::new(255, 255, 255)
        }

        pub const fn to_array(self) -> [u8; 3] {
            [self.r, self.g, self.b]
        }
    }

    impl From<(u8, u8, u8)> for Rgb {
        fn from((r, g, b): (u8, u8, u8)) -> Self {
            Self::new(r, g, b)
        }
    }

    /// How pixels are arranged in the buffer
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PixelFormat {
        Gray8,
        Rgb8,
        Rgba8,
    }

    impl PixelFormat {
        pub const fn channels(self) -> usize {
            match self {
                PixelFormat::Gray8 => 1,
                PixelFormat::Rgb8 => 3,
                PixelFormat::Rgba8 => 4,
            }
        }

        pub const fn has_alpha(self) -> bool {
            matches!(self, PixelFormat::Rgba8)
        }
    }

    /// Interleaved 8-bit pixels, row-major, top row first
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct RenderedImage {
        pub width: u32,
        pub height: u32,
        pub format: PixelFormat,
        pub data: Vec<u8>,
    }

    impl RenderedImage {
        /// All-zero image
        pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
            Self {
                width,
                height,
                format,
                data: vec![0; Self::byte_len(width, height, format)],
            }
        }

        /// Every pixel set to `pixel`, which must hold one value per channel
        pub fn filled(width: u32, height: u32, format: PixelFormat, pixel: &[u8]) -> Self {
            let channels = format.channels();
            let mut data = Vec::with_capacity(Self::byte_len(width, height, format));
            for _ in 0..width as usize * height as usize {
                data.extend(pixel.iter().copied().chain(std::iter::repeat(0)).take(channels));
            }
            Self {
                width,
                height,
                format,
                data,
            }
        }

        /// Wrap an existing buffer; `None` when its length disagrees with the size
        pub fn from_raw(width: u32, height: u32, format: PixelFormat, data: Vec<u8>) -> Option<Self> {
            (data.len() == Self::byte_len(width, height, format)).then_some(Self {
                width,
                height,
                format,
                data,
            })
        }

        pub fn byte_len(width: u32, height: u32, format: PixelFormat) -> usize {
            width as usize * height as usize * format.channels()
        }

        pub fn channels(&self) -> usize {
            self.format.channels()
        }

        pub fn has_alpha(&self) -> bool {
            self.format.has_alpha()
        }

        /// Bytes of the pixel at `(x, y)`
        pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
            if x >= self.width || y >= self.height {
                return None;
            }
            let c = self.channels();
            let start = (y as usize * self.width as usize + x as usize) * c;
            self.data.get(start..start + c)
        }

        /// Drop the alpha channel; other formats are returned unchanged
        pub fn without_alpha(self) -> Self {
            if self.format != PixelFormat::Rgba8 {
                return self;
            }
            let data = self
                .data
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            Self {
                width: self.width,
                height: self.height,
                format: PixelFormat::Rgb8,
                data,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_repeats_pixel() {
        let img = RenderedImage::filled(2, 1, PixelFormat::Rgba8, &[1, 2, 3, 4]);
        assert_eq!(img.data, vec![1, 2, 3, 4, 1, 2, 3, 4]);
    }

    #[test]
    fn from_raw_checks_length() {
        assert!(RenderedImage::from_raw(2, 2, PixelFormat::Rgb8, vec![0; 11]).is_none());
        assert!(RenderedImage::from_raw(2, 2, PixelFormat::Rgb8, vec![0; 12]).is_some());
    }

    #[test]
    fn without_alpha_keeps_color() {
        let img = RenderedImage::filled(1, 2, PixelFormat::Rgba8, &[9, 8, 7, 255]).without_alpha();
        assert_eq!(img.format, PixelFormat::Rgb8);
        assert_eq!(img.data, vec![9, 8, 7, 9, 8, 7]);
    }

    #[test]
    fn pixel_lookup_is_bounds_checked() {
        let img = RenderedImage::filled(2, 2, PixelFormat::Gray8, &[5]);
        assert_eq!(img.pixel(1, 1), Some(&[5u8][..]));
        assert_eq!(img.pixel(2, 0), None);
    }
}
