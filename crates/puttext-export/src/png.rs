//! PNG export format
//!
//! Encodes rendered text (or any composited image) with the `image` crate.

use std::path::Path;

use image::ImageEncoder;
use puttext_core::{
    error::{ExportError, Result},
    types::{PixelFormat, RenderedImage},
};

fn color_type(format: PixelFormat) -> image::ExtendedColorType {
    match format {
        PixelFormat::Gray8 => image::ExtendedColorType::L8,
        PixelFormat::Rgb8 => image::ExtendedColorType::Rgb8,
        PixelFormat::Rgba8 => image::ExtendedColorType::Rgba8,
    }
}

/// Encode an image to PNG bytes, keeping its channel layout
pub fn encode_png(image: &RenderedImage) -> Result<Vec<u8>> {
    let expected = RenderedImage::byte_len(image.width, image.height, image.format);
    if image.data.len() != expected {
        return Err(ExportError::InvalidBuffer(format!(
            "expected {} bytes for {}x{} {:?}, got {}",
            expected,
            image.width,
            image.height,
            image.format,
            image.data.len()
        ))
        .into());
    }
    if image.width == 0 || image.height == 0 {
        return Err(ExportError::EncodingFailed(format!(
            "PNG cannot hold a {}x{} image",
            image.width, image.height
        ))
        .into());
    }

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(&image.data, image.width, image.height, color_type(image.format))
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// Encode and write to `path`
pub fn write_png(image: &RenderedImage, path: impl AsRef<Path>) -> Result<()> {
    let bytes = encode_png(image)?;
    std::fs::write(path.as_ref(), bytes)?;
    log::debug!(
        "wrote {}x{} PNG to {}",
        image.width,
        image.height,
        path.as_ref().display()
    );
    Ok(())
}
