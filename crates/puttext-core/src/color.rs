//! Tints a monochrome page
//!
//! Coverage scales the text color channel by channel. With alpha enabled
//! the coverage also becomes the alpha channel. A background box is painted
//! by overlaying the tinted text onto a solid image, the same compositing
//! path callers use for their own backgrounds.

use crate::canvas::PageCanvas;
use crate::error::Result;
use crate::overlay::overlay;
use crate::types::{PixelFormat, RenderedImage, Rgb};

/// `channel * coverage / 255`, rounded
fn scale(channel: u8, coverage: u8) -> u8 {
    ((channel as u32 * coverage as u32 + 127) / 255) as u8
}

/// Text color scaled by coverage, with coverage as alpha
fn tint_rgba(page: &PageCanvas, color: Rgb) -> RenderedImage {
    let data = page
        .data()
        .iter()
        .flat_map(|&c| [scale(color.r, c), scale(color.g, c), scale(color.b, c), c])
        .collect();
    RenderedImage {
        width: page.width(),
        height: page.height(),
        format: PixelFormat::Rgba8,
        data,
    }
}

/// Turn a page into an RGB (`alpha == false`) or RGBA image
pub fn colorize(
    page: &PageCanvas,
    color: Rgb,
    background: Option<Rgb>,
    alpha: bool,
) -> Result<RenderedImage> {
    let text = tint_rgba(page, color);

    let image = match background {
        Some(bg) => {
            let [r, g, b] = bg.to_array();
            let plate =
                RenderedImage::filled(page.width(), page.height(), PixelFormat::Rgba8, &[r, g, b, 255]);
            overlay(&plate, &text, (0, 0))?
        },
        None => text,
    };

    Ok(if alpha { image } else { image.without_alpha() })
}
