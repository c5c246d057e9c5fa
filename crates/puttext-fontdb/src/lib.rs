//! Where fonts come to life: loading for Puttext
//!
//! Reads a TrueType/OpenType file (or a face inside a collection) into
//! memory, checks that it parses, and hands it to rasterizers through the
//! [`FontRef`](puttext_core::FontRef) trait.
//!
//! Fonts store their raw bytes and build a parser view on demand, so a
//! `Font` is cheap to share behind an `Arc` and never borrows from a file
//! handle.

use std::fs;
use std::path::Path;

use read_fonts::{FontRef as ReadFontRef, TableProvider};

use puttext_core::{
    error::{FontLoadError, Result},
    traits::FontRef,
};

/// A font that's been brought into memory, ready to rasterize text
pub struct Font {
    data: Vec<u8>,
    face_index: u32,
    units_per_em: u16,
}

impl Font {
    /// Opens a font file from disk
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_index(path, 0)
    }

    /// Opens a specific face from a font file (for TTC collections)
    pub fn from_file_index(path: impl AsRef<Path>, face_index: u32) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|err| {
            log::debug!("cannot read font {}: {}", path.display(), err);
            FontLoadError::FileNotFound(path.display().to_string())
        })?;

        let font = Self::from_data_index(data, face_index)?;
        log::debug!(
            "loaded font {} (face {}, {} units/em)",
            path.display(),
            face_index,
            font.units_per_em
        );
        Ok(font)
    }

    /// Turns raw font bytes into something we can work with
    pub fn from_data(data: Vec<u8>) -> Result<Self> {
        Self::from_data_index(data, 0)
    }

    /// Turns raw font bytes into a specific face (for TTC collections)
    pub fn from_data_index(data: Vec<u8>, face_index: u32) -> Result<Self> {
        // Parsing up front rejects bad bytes before any render sees them
        let font_ref =
            ReadFontRef::from_index(&data, face_index).map_err(|_| FontLoadError::InvalidData)?;

        // The grid size every outline coordinate is measured against
        let units_per_em = font_ref
            .head()
            .map(|head| head.units_per_em())
            .map_err(|_| FontLoadError::InvalidData)?;

        Ok(Font {
            data,
            face_index,
            units_per_em,
        })
    }

    /// Creates a parser view on demand
    fn font_ref(&self) -> Option<ReadFontRef<'_>> {
        ReadFontRef::from_index(&self.data, self.face_index).ok()
    }

    /// Counts how many different glyphs this font contains
    pub fn glyph_count(&self) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.maxp().ok().map(|maxp| maxp.num_glyphs() as u32))
    }
}

impl FontRef for Font {
    fn data(&self) -> &[u8] {
        &self.data
    }

    fn face_index(&self) -> u32 {
        self.face_index
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u32> {
        self.font_ref()
            .and_then(|font| font.cmap().ok()?.map_codepoint(ch).map(|gid| gid.to_u32()))
    }
}
