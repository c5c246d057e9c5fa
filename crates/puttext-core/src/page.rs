//! Stacks lines into a page
//!
//! Lines are split on `'\n'`, composed one by one, aligned inside the widest
//! line and stacked top to bottom with the configured spacing between them.

use crate::canvas::PageCanvas;
use crate::config::{Alignment, RenderConfig};
use crate::error::Result;
use crate::line::LineCompositor;
use crate::traits::GlyphRasterizer;

/// Split on line feeds, dropping a carriage return that ends a line
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Left edge and top row of each line inside the stacked page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePlacement {
    pub x: u32,
    pub y: u32,
}

/// Page size and per-line placement for lines of the given `(width, height)`
///
/// Spacing goes strictly between lines, never above the first or below the
/// last.
pub fn place_lines(
    sizes: &[(u32, u32)],
    alignment: Alignment,
    line_spacing_px: u32,
) -> ((u32, u32), Vec<LinePlacement>) {
    let total_width = sizes.iter().map(|(w, _)| *w).max().unwrap_or(0);
    let gaps = sizes.len().saturating_sub(1) as u32;
    let total_height = sizes.iter().map(|(_, h)| *h).sum::<u32>() + gaps * line_spacing_px;

    let mut placements = Vec::with_capacity(sizes.len());
    let mut y = 0u32;
    for (i, (width, height)) in sizes.iter().enumerate() {
        if i > 0 {
            y += line_spacing_px;
        }
        placements.push(LinePlacement {
            x: alignment.anchor(*width, total_width),
            y,
        });
        y += height;
    }

    ((total_width, total_height), placements)
}

/// Stack finished line canvases into one page
pub fn stack_lines(lines: &[PageCanvas], alignment: Alignment, line_spacing_px: u32) -> PageCanvas {
    let sizes: Vec<(u32, u32)> = lines.iter().map(|l| (l.width(), l.height())).collect();
    let ((width, height), placements) = place_lines(&sizes, alignment, line_spacing_px);

    let mut page = PageCanvas::new(width, height);
    for (line, at) in lines.iter().zip(&placements) {
        page.blit_add(line, at.x, at.y);
    }
    page
}

/// Turns a block of text into one monochrome page
pub struct PageCompositor<'a, R: ?Sized> {
    lines: LineCompositor<'a, R>,
}

impl<'a, R: GlyphRasterizer + ?Sized> PageCompositor<'a, R> {
    pub fn new(rasterizer: &'a mut R, config: &'a RenderConfig, pixel_size: u32) -> Self {
        Self {
            lines: LineCompositor::new(rasterizer, config, pixel_size),
        }
    }

    /// Compose every line and stack them
    ///
    /// Text without a line break skips stacking and returns its line canvas
    /// directly.
    pub fn layout_page(&mut self, text: &str) -> Result<PageCanvas> {
        let rows: Vec<&str> = split_lines(text).collect();

        if let [only] = rows.as_slice() {
            let line = self.lines.layout_line(only)?;
            return Ok(line.to_coverage());
        }

        let mut canvases = Vec::with_capacity(rows.len());
        for row in &rows {
            canvases.push(self.lines.layout_line(row)?.to_coverage());
        }

        let config = self.lines.config();
        let page = stack_lines(&canvases, config.alignment(), config.line_spacing_px());
        log::debug!(
            "page laid out: {} lines, {}x{}, align={}",
            canvases.len(),
            page.width(),
            page.height(),
            config.alignment()
        );
        Ok(page)
    }
}
