//! The contracts between the compositor and the outside world
//!
//! - [`FontRef`] - Your window into font data
//! - [`GlyphRasterizer`] - Where characters become coverage bitmaps

use crate::{error::Result, glyph::GlyphMetrics};

/// Your key to unlocking font secrets
///
/// ```ignore
/// struct MyFont {
///     data: Vec<u8>,
/// }
///
/// impl FontRef for MyFont {
///     fn data(&self) -> &[u8] {
///         &self.data
///     }
///
///     fn units_per_em(&self) -> u16 {
///         2048
///     }
///
///     fn glyph_id(&self, ch: char) -> Option<u32> {
///         Some(42)
///     }
/// }
/// ```
pub trait FontRef: Send + Sync {
    /// Raw font bytes as they live in the file
    fn data(&self) -> &[u8];

    /// Index of the face inside a collection (0 for single fonts)
    fn face_index(&self) -> u32 {
        0
    }

    /// The font's internal coordinate system scale
    fn units_per_em(&self) -> u16;

    /// Find the glyph that represents this character
    ///
    /// Returns None when the font doesn't contain this character.
    fn glyph_id(&self, ch: char) -> Option<u32>;
}

/// Turns one character into a coverage bitmap plus placement metrics
///
/// Rasterizers keep face state between the size change and the glyph load,
/// so a single instance must never serve two renders at once. `rasterize`
/// takes `&mut self` to make that exclusive. Concurrent renders each own
/// their own rasterizer.
///
/// The returned [`GlyphMetrics`] owns its buffer; nothing borrowed from the
/// rasterizer outlives the call. `advance_space` is left at zero, the
/// compositor fills it in from the spacing rule.
pub trait GlyphRasterizer: Send {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Set the pixel size, load `ch`, and copy out its bitmap and metrics
    fn rasterize(&mut self, ch: char, pixel_size: u32) -> Result<GlyphMetrics>;
}

impl<R: GlyphRasterizer + ?Sized> GlyphRasterizer for Box<R> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn rasterize(&mut self, ch: char, pixel_size: u32) -> Result<GlyphMetrics> {
        (**self).rasterize(ch, pixel_size)
    }
}
