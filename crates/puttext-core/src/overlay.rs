//! Drops an RGBA image onto another RGBA image
//!
//! The foreground is clipped to whatever part of the background lies at and
//! beyond `origin`. Inside that window each background pixel is cleared
//! where the foreground is fully opaque, then the foreground is added with
//! saturation:
//!
//! ```text
//! out = (bg masked by alpha != 255) + fg
//! ```
//!
//! Outside the window the background is copied unchanged.

use crate::error::{OverlayError, OverlayRole, Result};
use crate::types::RenderedImage;

fn check(image: &RenderedImage, role: OverlayRole) -> Result<()> {
    if !image.has_alpha() {
        return Err(OverlayError::MissingAlpha(role).into());
    }
    let expected = RenderedImage::byte_len(image.width, image.height, image.format);
    if image.data.len() != expected {
        return Err(OverlayError::BufferSize {
            role,
            len: image.data.len(),
            expected,
        }
        .into());
    }
    Ok(())
}

/// Composite `foreground` over `background` with its top-left corner at
/// `origin`, returning a new image the size of `background`
///
/// Both images must be RGBA. A 3- or 1-channel image on either side fails
/// before any pixel is touched.
pub fn overlay(
    background: &RenderedImage,
    foreground: &RenderedImage,
    origin: (u32, u32),
) -> Result<RenderedImage> {
    check(background, OverlayRole::Background)?;
    check(foreground, OverlayRole::Foreground)?;

    let (ox, oy) = origin;
    let cols = foreground.width.min(background.width.saturating_sub(ox)) as usize;
    let rows = foreground.height.min(background.height.saturating_sub(oy)) as usize;

    let mut out = background.clone();
    if cols == 0 || rows == 0 {
        log::debug!(
            "overlay at ({}, {}) misses the {}x{} background",
            ox,
            oy,
            background.width,
            background.height
        );
        return Ok(out);
    }

    let bg_stride = background.width as usize * 4;
    let fg_stride = foreground.width as usize * 4;
    for row in 0..rows {
        let dst_start = (oy as usize + row) * bg_stride + ox as usize * 4;
        let src_start = row * fg_stride;
        let dst = &mut out.data[dst_start..dst_start + cols * 4];
        let src = &foreground.data[src_start..src_start + cols * 4];

        for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
            if s[3] == u8::MAX {
                d.fill(0);
            }
            for (dc, sc) in d.iter_mut().zip(s) {
                *dc = dc.saturating_add(*sc);
            }
        }
    }

    Ok(out)
}
