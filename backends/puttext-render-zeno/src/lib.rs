//! Zeno Rasterizer - font outlines to coverage bitmaps in pure Rust
//!
//! The compositor needs three things per character: a top-down coverage
//! bitmap, its size, and how far its top row sits above the baseline. This
//! backend gets them by walking the outline with skrifa, measuring it with
//! kurbo and filling it with zeno's 256-level anti-aliased rasterizer.
//!
//! ## One Glyph, Two Paths
//!
//! The outline is recorded twice while skrifa draws it:
//!
//! 1. **SVG path data** for zeno's rasterizer (that's what it eats)
//! 2. **kurbo path** for an exact bounding box without reparsing
//!
//! The box is snapped outward to whole pixels, so the bitmap always covers
//! every partially inked pixel.

use std::fmt::Write as _;
use std::sync::Arc;

use kurbo::Shape;
use skrifa::MetadataProvider;

use puttext_core::{
    error::{GlyphError, Result},
    glyph::GlyphMetrics,
    traits::{FontRef, GlyphRasterizer},
};

/// Rasterizes glyphs of one font face with zeno
///
/// Holds the face and the current pixel size. The size is applied before
/// each load, and each load copies its bitmap out, so callers only ever see
/// owned [`GlyphMetrics`].
pub struct ZenoRasterizer {
    font: Arc<dyn FontRef>,
    pixel_size: u32,
    /// Safety net against runaway allocations from broken outlines
    max_size: u32,
}

impl ZenoRasterizer {
    pub fn new(font: Arc<dyn FontRef>) -> Self {
        Self {
            font,
            pixel_size: 0,
            max_size: 65535, // Maximum u16 value, practical limit for bitmap dimensions
        }
    }

    pub fn font(&self) -> &Arc<dyn FontRef> {
        &self.font
    }

    fn set_pixel_size(&mut self, pixel_size: u32) {
        if self.pixel_size != pixel_size {
            log::trace!("zeno: pixel size {} -> {}", self.pixel_size, pixel_size);
            self.pixel_size = pixel_size;
        }
    }

    /// Outline of `ch` at the current pixel size, as coverage
    fn load_char(&self, ch: char) -> Result<GlyphMetrics> {
        use zeno::Mask;

        let font_ref = skrifa::FontRef::from_index(self.font.data(), self.font.face_index())
            .map_err(|_| GlyphError::Backend("font data does not parse".to_string()))?;

        // Characters the font lacks draw as .notdef
        let glyph_id = skrifa::GlyphId::new(self.font.glyph_id(ch).unwrap_or(0));
        let outlines = font_ref.outline_glyphs();
        let Some(glyph) = outlines.get(glyph_id) else {
            log::debug!("zeno: no outline for {:?} (glyph {})", ch, glyph_id.to_u32());
            return Ok(GlyphMetrics::blank());
        };

        let mut builder = ZenoPathBuilder::new();
        let size = skrifa::instance::Size::new(self.pixel_size as f32);
        let settings =
            skrifa::outline::DrawSettings::unhinted(size, skrifa::instance::LocationRef::default());
        glyph
            .draw(settings, &mut builder)
            .map_err(|_| GlyphError::OutlineExtraction(ch))?;

        let Some(bounds) = builder.pixel_bounds() else {
            // Whitespace and other ink-free glyphs
            return Ok(GlyphMetrics::blank());
        };

        let width = (bounds.x1 - bounds.x0) as u32;
        let height = (bounds.y1 - bounds.y0) as u32;
        if width > self.max_size || height > self.max_size {
            return Err(GlyphError::TooLarge(ch, width, height).into());
        }

        let mut mask = vec![0u8; width as usize * height as usize];
        let _placement = Mask::new(builder.path_data())
            .size(width, height)
            .offset((-bounds.x0, -bounds.y0))
            .render_into(&mut mask, None);

        // Font space is y-up, bitmaps are y-down
        flip_rows(&mut mask, width as usize);

        log::trace!(
            "zeno: {:?} -> glyph {} {}x{} top={}",
            ch,
            glyph_id.to_u32(),
            width,
            height,
            bounds.y1
        );

        Ok(GlyphMetrics {
            coverage: mask,
            width,
            height,
            bitmap_top: bounds.y1,
            advance_space: 0,
        })
    }
}

impl GlyphRasterizer for ZenoRasterizer {
    fn name(&self) -> &'static str {
        "zeno"
    }

    fn rasterize(&mut self, ch: char, pixel_size: u32) -> Result<GlyphMetrics> {
        self.set_pixel_size(pixel_size);
        self.load_char(ch)
    }
}

/// Swap rows top-for-bottom in place
fn flip_rows(mask: &mut [u8], width: usize) {
    if width == 0 {
        return;
    }
    let height = mask.len() / width;
    for y in 0..height / 2 {
        let (top, bottom) = mask.split_at_mut((height - 1 - y) * width);
        top[y * width..(y + 1) * width].swap_with_slice(&mut bottom[..width]);
    }
}

/// Integer pixel box around an outline, in font (y-up) space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PixelBounds {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

/// Dual-output path builder
///
/// Collects SVG path data for zeno and a kurbo path for bounds in a single
/// pass over the outline.
struct ZenoPathBuilder {
    path_data: String,
    kurbo_path: kurbo::BezPath,
}

impl ZenoPathBuilder {
    fn new() -> Self {
        Self {
            path_data: String::new(),
            kurbo_path: kurbo::BezPath::new(),
        }
    }

    fn path_data(&self) -> &str {
        &self.path_data
    }

    fn push(&mut self, args: std::fmt::Arguments<'_>) {
        if !self.path_data.is_empty() {
            self.path_data.push(' ');
        }
        let _ = self.path_data.write_fmt(args);
    }

    /// Outline bounds snapped outward to whole pixels; `None` without ink
    fn pixel_bounds(&self) -> Option<PixelBounds> {
        if self.kurbo_path.elements().is_empty() {
            return None;
        }
        let bbox = self.kurbo_path.bounding_box();
        if !(bbox.x0.is_finite() && bbox.y0.is_finite() && bbox.x1.is_finite() && bbox.y1.is_finite())
        {
            return None;
        }

        let bounds = PixelBounds {
            x0: bbox.x0.floor() as i32,
            y0: bbox.y0.floor() as i32,
            x1: bbox.x1.ceil() as i32,
            y1: bbox.y1.ceil() as i32,
        };
        (bounds.x1 > bounds.x0 && bounds.y1 > bounds.y0).then_some(bounds)
    }
}

impl skrifa::outline::OutlinePen for ZenoPathBuilder {
    fn move_to(&mut self, x: f32, y: f32) {
        self.push(format_args!("M {:.2},{:.2}", x, y));
        self.kurbo_path.move_to((x as f64, y as f64));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.push(format_args!("L {:.2},{:.2}", x, y));
        self.kurbo_path.line_to((x as f64, y as f64));
    }

    fn quad_to(&mut self, cx: f32, cy: f32, x: f32, y: f32) {
        self.push(format_args!("Q {:.2},{:.2} {:.2},{:.2}", cx, cy, x, y));
        self.kurbo_path
            .quad_to((cx as f64, cy as f64), (x as f64, y as f64));
    }

    fn curve_to(&mut self, cx0: f32, cy0: f32, cx1: f32, cy1: f32, x: f32, y: f32) {
        self.push(format_args!(
            "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            cx0, cy0, cx1, cy1, x, y
        ));
        self.kurbo_path.curve_to(
            (cx0 as f64, cy0 as f64),
            (cx1 as f64, cy1 as f64),
            (x as f64, y as f64),
        );
    }

    fn close(&mut self) {
        self.push(format_args!("Z"));
        self.kurbo_path.close_path();
    }
}
