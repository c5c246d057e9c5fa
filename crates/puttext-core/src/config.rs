// this_file: crates/puttext-core/src/config.rs

//! How the caller wants text to look
//!
//! A [`RenderConfig`] is validated once, when it is built, and is read-only
//! afterwards. Every compositing stage borrows it; none of them mutate it.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::Rgb;

pub const DEFAULT_CHAR_SPACING_PX: u32 = 1;
pub const DEFAULT_WORD_SPACING_PX: u32 = 3;
pub const DEFAULT_LINE_SPACING_PX: u32 = 2;

/// A tab advances as far as this many spaces
pub const TAB_WIDTH_IN_SPACES: u32 = 4;

/// Horizontal placement of each line inside the page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Left edge of a line of `line_width` pixels inside a page `total_width` wide
    ///
    /// Center rounds down, so odd leftovers put the extra pixel on the right.
    pub fn anchor(self, line_width: u32, total_width: u32) -> u32 {
        let slack = total_width.saturating_sub(line_width);
        match self {
            Alignment::Left => 0,
            Alignment::Center => slack / 2,
            Alignment::Right => slack,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

impl FromStr for Alignment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" => Ok(Alignment::Left),
            "center" => Ok(Alignment::Center),
            "right" => Ok(Alignment::Right),
            _ => Err(ConfigError::UnsupportedAlignment(s.to_string())),
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when the rasterizer returns a bitmap that does not match its
/// declared dimensions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedGlyphPolicy {
    /// Fail the whole render
    #[default]
    Abort,
    /// Log a warning and lay the character out as blank space
    Blank,
}

/// Everything a render needs to know, frozen at construction
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    font_path: PathBuf,
    font_size_px: u32,
    color: Rgb,
    char_spacing_px: u32,
    word_spacing_px: u32,
    line_spacing_px: u32,
    background: Option<Rgb>,
    alignment: Alignment,
    malformed_glyphs: MalformedGlyphPolicy,
}

impl RenderConfig {
    /// Start building a configuration from the three required settings
    pub fn builder(
        font_path: impl Into<PathBuf>,
        font_size_px: u32,
        color: Rgb,
    ) -> RenderConfigBuilder {
        RenderConfigBuilder::new(font_path, font_size_px, color)
    }

    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    pub fn font_size_px(&self) -> u32 {
        self.font_size_px
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn char_spacing_px(&self) -> u32 {
        self.char_spacing_px
    }

    pub fn word_spacing_px(&self) -> u32 {
        self.word_spacing_px
    }

    pub fn line_spacing_px(&self) -> u32 {
        self.line_spacing_px
    }

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn malformed_glyphs(&self) -> MalformedGlyphPolicy {
        self.malformed_glyphs
    }

    /// Blank columns appended after `ch`
    ///
    /// Spaces get the word spacing, tabs four times that, everything else
    /// the character spacing.
    pub fn advance_space(&self, ch: char) -> u32 {
        match ch {
            ' ' => self.word_spacing_px,
            '\t' => self.word_spacing_px * TAB_WIDTH_IN_SPACES,
            _ => self.char_spacing_px,
        }
    }
}

/// Build configurations piece by piece
///
/// ```ignore
/// let config = RenderConfig::builder("fonts/Inter.ttf", 32, Rgb::new(255, 0, 0))
///     .word_spacing(5)
///     .align("Center")
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct RenderConfigBuilder {
    font_path: PathBuf,
    font_size_px: u32,
    color: Rgb,
    char_spacing_px: u32,
    word_spacing_px: u32,
    line_spacing_px: u32,
    background: Option<Rgb>,
    alignment: String,
    malformed_glyphs: MalformedGlyphPolicy,
}

impl RenderConfigBuilder {
    fn new(font_path: impl Into<PathBuf>, font_size_px: u32, color: Rgb) -> Self {
        Self {
            font_path: font_path.into(),
            font_size_px,
            color,
            char_spacing_px: DEFAULT_CHAR_SPACING_PX,
            word_spacing_px: DEFAULT_WORD_SPACING_PX,
            line_spacing_px: DEFAULT_LINE_SPACING_PX,
            background: None,
            alignment: Alignment::Left.as_str().to_string(),
            malformed_glyphs: MalformedGlyphPolicy::Abort,
        }
    }

    pub fn char_spacing(mut self, px: u32) -> Self {
        self.char_spacing_px = px;
        self
    }

    pub fn word_spacing(mut self, px: u32) -> Self {
        self.word_spacing_px = px;
        self
    }

    pub fn line_spacing(mut self, px: u32) -> Self {
        self.line_spacing_px = px;
        self
    }

    /// Fill a solid box of this color behind the text
    pub fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment.as_str().to_string();
        self
    }

    /// Alignment by name, case-insensitive; checked in [`build`](Self::build)
    pub fn align(mut self, name: impl Into<String>) -> Self {
        self.alignment = name.into();
        self
    }

    pub fn malformed_glyphs(mut self, policy: MalformedGlyphPolicy) -> Self {
        self.malformed_glyphs = policy;
        self
    }

    /// Validate and freeze the configuration
    pub fn build(self) -> Result<RenderConfig, ConfigError> {
        if self.font_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyFontPath);
        }
        if self.font_size_px == 0 {
            return Err(ConfigError::NonPositiveFontSize(self.font_size_px));
        }
        let alignment = self.alignment.parse::<Alignment>()?;

        Ok(RenderConfig {
            font_path: self.font_path,
            font_size_px: self.font_size_px,
            color: self.color,
            char_spacing_px: self.char_spacing_px,
            word_spacing_px: self.word_spacing_px,
            line_spacing_px: self.line_spacing_px,
            background: self.background,
            alignment,
            malformed_glyphs: self.malformed_glyphs,
        })
    }
}
