//! Error types for Puttext
//!
//! Every failure is fatal for the call that hit it. A render either returns a
//! complete image or one of these errors, never a partial canvas.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PuttextError>;

/// Main error type for Puttext
#[derive(Debug, Error)]
pub enum PuttextError {
    #[error("Font loading failed: {0}")]
    FontLoad(#[from] FontLoadError),

    #[error("Glyph rasterization failed: {0}")]
    Glyph(#[from] GlyphError),

    #[error("Overlay failed: {0}")]
    Overlay(#[from] OverlayError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Font loading errors
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid font data")]
    InvalidData,
}

/// Errors raised while turning a character into coverage
#[derive(Debug, Error)]
pub enum GlyphError {
    /// The rasterizer handed back a buffer that cannot be reshaped to its
    /// declared dimensions.
    #[error("Glyph {ch:?}: declared {width}x{height} but buffer holds {len} bytes")]
    Format {
        ch: char,
        width: u32,
        height: u32,
        len: usize,
    },

    #[error("Glyph {0:?}: outline extraction failed")]
    OutlineExtraction(char),

    #[error("Glyph {0:?}: bitmap of {1}x{2} exceeds the rasterizer limit")]
    TooLarge(char, u32, u32),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Which side of an overlay failed its precondition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayRole {
    Background,
    Foreground,
}

impl std::fmt::Display for OverlayRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverlayRole::Background => f.write_str("background"),
            OverlayRole::Foreground => f.write_str("foreground"),
        }
    }
}

/// Shape errors detected before any pixel is composited
///
/// Only RGBA over RGBA is accepted, so a channel-count mismatch always
/// surfaces as the side that lacks alpha.
#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("{0} image has no alpha channel")]
    MissingAlpha(OverlayRole),

    #[error("{role} buffer holds {len} bytes, expected {expected}")]
    BufferSize {
        role: OverlayRole,
        len: usize,
        expected: usize,
    },
}

/// Configuration errors, raised when the configuration is built
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unsupported alignment: {0:?} (expected left, center or right)")]
    UnsupportedAlignment(String),

    #[error("Font size must be positive, got {0}")]
    NonPositiveFontSize(u32),

    #[error("Font path is empty")]
    EmptyFontPath,
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Invalid image buffer: {0}")]
    InvalidBuffer(String),
}
