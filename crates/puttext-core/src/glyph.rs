//! One character, ready to be stamped into a line
//!
//! The rasterizer hands over a [`GlyphMetrics`]; a [`GlyphFrame`] turns it
//! into a coverage bitmap padded with trailing advance space and works out
//! where it sits relative to the shared baseline.

use crate::canvas::LineCanvas;
use crate::error::{GlyphError, Result};

/// Bitmap and placement of a single rasterized character
///
/// Owned outright: nothing in here points back into rasterizer memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Ink coverage, row-major, top row first, 0..=255
    pub coverage: Vec<u8>,
    pub width: u32,
    pub height: u32,
    /// Signed distance from the glyph origin (on the baseline) up to the top row
    pub bitmap_top: i32,
    /// Blank columns appended after the bitmap
    pub advance_space: u32,
}

impl GlyphMetrics {
    /// An outline-less glyph, such as a space
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_advance_space(mut self, px: u32) -> Self {
        self.advance_space = px;
        self
    }

    /// Rows below the baseline when positive, gap between the bitmap bottom
    /// and the baseline when negative
    fn baseline_overhang(&self) -> i32 {
        self.height as i32 - self.bitmap_top
    }
}

/// A glyph bitmap plus its trailing space and vertical shifts
///
/// Exactly one of `top_shift` / `bottom_shift` is non-zero unless the glyph
/// sits right on the baseline: a glyph either dips below it by
/// `bottom_shift` rows or floats `-top_shift` rows above it.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphFrame {
    ch: char,
    bitmap: LineCanvas,
    top_shift: i32,
    bottom_shift: i32,
}

impl GlyphFrame {
    /// Normalise the coverage to `[0, 1]`, append the advance space and
    /// compute the shifts
    ///
    /// An empty coverage buffer becomes a single blank row `advance_space`
    /// wide, so whitespace still claims room on the line.
    pub fn build(ch: char, metrics: GlyphMetrics) -> Result<Self> {
        let overhang = metrics.baseline_overhang();
        let top_shift = overhang.min(0);
        let bottom_shift = overhang.max(0);

        if metrics.coverage.is_empty() {
            return Ok(Self {
                ch,
                bitmap: LineCanvas::new(metrics.advance_space, 1),
                top_shift,
                bottom_shift,
            });
        }

        let GlyphMetrics {
            coverage,
            width,
            height,
            advance_space,
            ..
        } = metrics;
        let len = coverage.len();
        let normalised = coverage.into_iter().map(|v| v as f32 / 255.0).collect();
        let bitmap = LineCanvas::from_vec(width, height, normalised).ok_or(GlyphError::Format {
            ch,
            width,
            height,
            len,
        })?;

        Ok(Self {
            ch,
            bitmap: bitmap.pad_right(advance_space),
            top_shift,
            bottom_shift,
        })
    }

    /// A whitespace-style placeholder `advance_space` columns wide
    pub fn blank(ch: char, advance_space: u32) -> Self {
        Self {
            ch,
            bitmap: LineCanvas::new(advance_space, 1),
            top_shift: 0,
            bottom_shift: 0,
        }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    /// Final bitmap, trailing space included
    pub fn bitmap(&self) -> &LineCanvas {
        &self.bitmap
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    /// `<= 0`: how far the bitmap bottom floats above the baseline
    pub fn top_shift(&self) -> i32 {
        self.top_shift
    }

    /// `>= 0`: how far the bitmap reaches below the baseline
    pub fn bottom_shift(&self) -> i32 {
        self.bottom_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(width: u32, height: u32, bitmap_top: i32) -> GlyphMetrics {
        GlyphMetrics {
            coverage: vec![255; (width * height) as usize],
            width,
            height,
            bitmap_top,
            advance_space: 0,
        }
    }

    #[test]
    fn space_becomes_single_blank_row() {
        let frame = GlyphFrame::build(' ', GlyphMetrics::blank().with_advance_space(5)).unwrap();
        assert_eq!((frame.width(), frame.height()), (5, 1));
        assert!(frame.bitmap().is_blank());
        assert_eq!((frame.top_shift(), frame.bottom_shift()), (0, 0));
    }

    #[test]
    fn advance_space_pads_on_the_right() {
        let frame = GlyphFrame::build('l', metrics(2, 3, 3).with_advance_space(2)).unwrap();
        assert_eq!((frame.width(), frame.height()), (4, 3));
        for y in 0..3 {
            assert_eq!(frame.bitmap().row(y), &[1.0, 1.0, 0.0, 0.0]);
        }
    }

    #[test]
    fn descender_sets_bottom_shift_only() {
        // 'g': 10 rows, 7 above the baseline
        let frame = GlyphFrame::build('g', metrics(4, 10, 7)).unwrap();
        assert_eq!(frame.top_shift(), 0);
        assert_eq!(frame.bottom_shift(), 3);
    }

    #[test]
    fn floating_glyph_sets_top_shift_only() {
        // apostrophe: 3 rows whose bottom sits 6 rows above the baseline
        let frame = GlyphFrame::build('\'', metrics(1, 3, 9)).unwrap();
        assert_eq!(frame.top_shift(), -6);
        assert_eq!(frame.bottom_shift(), 0);
    }

    #[test]
    fn coverage_is_normalised() {
        let m = GlyphMetrics {
            coverage: vec![0, 51, 255],
            width: 3,
            height: 1,
            bitmap_top: 1,
            advance_space: 0,
        };
        let frame = GlyphFrame::build('x', m).unwrap();
        assert_eq!(frame.bitmap().data(), &[0.0, 0.2, 1.0]);
    }

    #[test]
    fn mismatched_buffer_is_a_format_error() {
        let mut m = metrics(3, 3, 3);
        m.coverage.pop();
        let err = GlyphFrame::build('A', m).unwrap_err();
        assert!(matches!(
            err,
            crate::PuttextError::Glyph(GlyphError::Format {
                ch: 'A',
                width: 3,
                height: 3,
                len: 8
            })
        ));
    }
}
