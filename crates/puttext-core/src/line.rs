//! Lays glyphs out along one text line
//!
//! Every glyph on a line shares one baseline. The baseline row is derived
//! from the tallest glyph and the furthest any glyph floats above it, and
//! the canvas extends below it by the deepest descender.

use crate::canvas::LineCanvas;
use crate::config::{MalformedGlyphPolicy, RenderConfig};
use crate::error::{GlyphError, PuttextError, Result};
use crate::glyph::GlyphFrame;
use crate::traits::GlyphRasterizer;

/// Vertical and horizontal extents of a line, derived from its glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineMetrics {
    pub width: u32,
    pub height: u32,
    /// Largest `|top_shift|` on the line
    pub max_top: u32,
    /// Largest `bottom_shift` on the line
    pub max_bottom: u32,
    pub max_glyph_height: u32,
}

impl LineMetrics {
    /// Measure a run of frames; an empty run is one row tall and zero wide
    pub fn of(frames: &[GlyphFrame]) -> Self {
        if frames.is_empty() {
            return Self {
                height: 1,
                ..Self::default()
            };
        }

        let max_top = frames
            .iter()
            .map(|f| f.top_shift().unsigned_abs())
            .max()
            .unwrap_or(0);
        let max_bottom = frames
            .iter()
            .map(|f| f.bottom_shift().unsigned_abs())
            .max()
            .unwrap_or(0);
        let max_glyph_height = frames.iter().map(GlyphFrame::height).max().unwrap_or(0);

        Self {
            width: frames.iter().map(GlyphFrame::width).sum(),
            height: max_glyph_height + max_top + max_bottom,
            max_top,
            max_bottom,
            max_glyph_height,
        }
    }

    /// Row just below the bitmap of `frame` once it sits on this line's baseline
    fn bottom_row(&self, frame: &GlyphFrame) -> i64 {
        self.max_glyph_height as i64
            + frame.top_shift() as i64
            + self.max_top as i64
            + frame.bottom_shift() as i64
    }
}

/// Stamp already-built frames left to right into one line canvas
///
/// Glyph `i` starts at the sum of the widths before it; its bottom row
/// follows [`LineMetrics`] so that all glyphs share the baseline. Ink is
/// accumulated, not overwritten.
pub fn compose_line(frames: &[GlyphFrame]) -> LineCanvas {
    let metrics = LineMetrics::of(frames);
    let mut canvas = LineCanvas::new(metrics.width, metrics.height);

    let mut x = 0u32;
    for frame in frames {
        let top = (metrics.bottom_row(frame) - frame.height() as i64).max(0) as u32;
        canvas.blit_add(frame.bitmap(), x, top);
        x += frame.width();
    }

    log::trace!(
        "line composed: {} glyphs, {}x{} (max_top={}, max_bottom={})",
        frames.len(),
        metrics.width,
        metrics.height,
        metrics.max_top,
        metrics.max_bottom
    );
    canvas
}

/// Rasterizes characters and lays them out as a line
///
/// Borrows the rasterizer exclusively for the duration of the layout;
/// characters are processed strictly in order.
pub struct LineCompositor<'a, R: ?Sized> {
    rasterizer: &'a mut R,
    config: &'a RenderConfig,
    pixel_size: u32,
}

impl<'a, R: GlyphRasterizer + ?Sized> LineCompositor<'a, R> {
    pub fn new(rasterizer: &'a mut R, config: &'a RenderConfig, pixel_size: u32) -> Self {
        Self {
            rasterizer,
            config,
            pixel_size,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Rasterize `ch` and wrap it with its trailing advance space
    pub fn glyph_frame(&mut self, ch: char) -> Result<GlyphFrame> {
        let advance_space = self.config.advance_space(ch);
        let metrics = self
            .rasterizer
            .rasterize(ch, self.pixel_size)?
            .with_advance_space(advance_space);

        match GlyphFrame::build(ch, metrics) {
            Err(PuttextError::Glyph(err @ GlyphError::Format { .. }))
                if self.config.malformed_glyphs() == MalformedGlyphPolicy::Blank =>
            {
                log::warn!("{}: {}; substituting blank glyph", self.rasterizer.name(), err);
                Ok(GlyphFrame::blank(ch, advance_space))
            },
            other => other,
        }
    }

    /// Frames for every character of `line`, in order
    pub fn frames(&mut self, line: &str) -> Result<Vec<GlyphFrame>> {
        line.chars().map(|ch| self.glyph_frame(ch)).collect()
    }

    /// Rasterize and compose one line (no line breaks expected)
    pub fn layout_line(&mut self, line: &str) -> Result<LineCanvas> {
        let frames = self.frames(line)?;
        Ok(compose_line(&frames))
    }
}
