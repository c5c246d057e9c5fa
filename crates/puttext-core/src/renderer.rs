// this_file: crates/puttext-core/src/renderer.rs

//! The public rendering entry points
//!
//! A [`TextRenderer`] pairs a frozen [`RenderConfig`] with the rasterizer it
//! owns. Each call re-rasterizes every character; nothing carries over from
//! one call to the next, so the same text and config always give the same
//! bytes.

use crate::canvas::PageCanvas;
use crate::color::colorize;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::page::PageCompositor;
use crate::traits::GlyphRasterizer;
use crate::types::RenderedImage;

/// Pixel size used by [`TextRenderer::calculate_dimension`], whatever the
/// configured font size
pub const PROBE_PIXEL_SIZE: u32 = 32;

/// Renders text with one configuration and one rasterizer
pub struct TextRenderer<R> {
    config: RenderConfig,
    rasterizer: R,
    alpha: bool,
}

impl<R: GlyphRasterizer> TextRenderer<R> {
    /// `alpha` selects RGBA output; otherwise images are RGB
    pub fn new(config: RenderConfig, rasterizer: R, alpha: bool) -> Self {
        Self {
            config,
            rasterizer,
            alpha,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn alpha(&self) -> bool {
        self.alpha
    }

    pub fn rasterizer_name(&self) -> &'static str {
        self.rasterizer.name()
    }

    pub fn into_rasterizer(self) -> R {
        self.rasterizer
    }

    fn layout(&mut self, text: &str, pixel_size: u32) -> Result<PageCanvas> {
        PageCompositor::new(&mut self.rasterizer, &self.config, pixel_size).layout_page(text)
    }

    /// Monochrome coverage of `text` at the configured size
    pub fn render_mono(&mut self, text: &str) -> Result<PageCanvas> {
        let size = self.config.font_size_px();
        self.layout(text, size)
    }

    /// Tinted RGB or RGBA image of `text`
    pub fn render(&mut self, text: &str) -> Result<RenderedImage> {
        let page = self.render_mono(text)?;
        let image = colorize(
            &page,
            self.config.color(),
            self.config.background(),
            self.alpha,
        )?;

        log::debug!(
            "{}: rendered {} chars at {}px into {}x{} {:?}",
            self.rasterizer.name(),
            text.chars().count(),
            self.config.font_size_px(),
            image.width,
            image.height,
            image.format
        );
        Ok(image)
    }

    /// `(width, height)` of `text` laid out at [`PROBE_PIXEL_SIZE`]
    ///
    /// Meant for rough pre-layout estimates. The result does not follow the
    /// configured font size; use [`measure`](Self::measure) for that.
    pub fn calculate_dimension(&mut self, text: &str) -> Result<(u32, u32)> {
        let page = self.layout(text, PROBE_PIXEL_SIZE)?;
        Ok((page.width(), page.height()))
    }

    /// `(width, height)` that [`render`](Self::render) would produce
    pub fn measure(&mut self, text: &str) -> Result<(u32, u32)> {
        let page = self.render_mono(text)?;
        Ok((page.width(), page.height()))
    }
}
