//! Puttext - TrueType text as images
//!
//! Renders a string with a TrueType font into an RGB or RGBA image, laid out
//! line by line with per-character spacing and left, center or right
//! alignment, and drops the result onto an existing RGBA picture.
//!
//! This crate wires the pieces together: fonts from [`fontdb`], coverage
//! from the zeno backend, layout and compositing from [`puttext_core`],
//! `image` crate interop and PNG output from [`export`].
//!
//! # Example
//!
//! ```no_run
//! use puttext::prelude::*;
//!
//! let config = RenderConfig::builder("fonts/NotoSans-Regular.ttf", 48, Rgb::new(255, 255, 255))
//!     .align("center")
//!     .line_spacing(4)
//!     .build()?;
//!
//! let background = RenderedImage::filled(640, 480, PixelFormat::Rgba8, &[0, 0, 64, 255]);
//! let captioned = puttext::put_text(&background, "Hello,\nworld", (20, 20), &config)?;
//! puttext::export::write_png(&captioned, "captioned.png")?;
//! # Ok::<(), PuttextError>(())
//! ```

use std::sync::Arc;

pub use puttext_core::{
    canvas, color, config, error, glyph, line, overlay, page, renderer, traits, types,
};
pub use puttext_core::{
    Alignment, MalformedGlyphPolicy, PixelFormat, PuttextError, RenderConfig, RenderConfigBuilder,
    RenderedImage, Result, Rgb, TextRenderer,
};
pub use puttext_export as export;
pub use puttext_fontdb as fontdb;
pub use puttext_render_zeno::ZenoRasterizer;

use puttext_core::error::{OverlayError, OverlayRole};

/// Common imports for typical usage
pub mod prelude {
    pub use puttext_core::{
        error::{PuttextError, Result},
        traits::{FontRef, GlyphRasterizer},
        types::{PixelFormat, RenderedImage, Rgb},
        Alignment, RenderConfig, TextRenderer,
    };
    pub use puttext_render_zeno::ZenoRasterizer;
}

/// Load the configured font and return a renderer backed by zeno
///
/// The font file is read once; the renderer can then be reused for any
/// number of strings.
pub fn open_renderer(config: RenderConfig, alpha: bool) -> Result<TextRenderer<ZenoRasterizer>> {
    let font = fontdb::Font::from_file(config.font_path())?;
    log::debug!(
        "opened {} at {}px ({} units/em)",
        config.font_path().display(),
        config.font_size_px(),
        traits::FontRef::units_per_em(&font)
    );
    let rasterizer = ZenoRasterizer::new(Arc::new(font));
    Ok(TextRenderer::new(config, rasterizer, alpha))
}

/// Render `text` and overlay it onto `background` at `origin`
///
/// The text is always rendered with an alpha channel, so the background must
/// be RGBA too; an RGB or grayscale background fails before the font is
/// opened. The returned image has the background's size.
pub fn put_text(
    background: &RenderedImage,
    text: &str,
    origin: (u32, u32),
    config: &RenderConfig,
) -> Result<RenderedImage> {
    if !background.has_alpha() {
        return Err(OverlayError::MissingAlpha(OverlayRole::Background).into());
    }

    let mut renderer = open_renderer(config.clone(), true)?;
    let foreground = renderer.render(text)?;
    overlay::overlay(background, &foreground, origin)
}
