//! Export module for Puttext
//!
//! Moves images between Puttext and the `image` crate, and writes PNGs.
//! Backgrounds usually arrive as a [`DynamicImage`]; rendered text leaves as
//! a [`RenderedImage`] that converts straight back.

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use puttext_core::{
    error::{ExportError, Result},
    types::{PixelFormat, RenderedImage},
    PageCanvas,
};

pub mod png;

pub use png::{encode_png, write_png};

/// Borrow-free copy of an `image` buffer
///
/// RGBA and RGB layouts are kept as they are; anything else (16-bit,
/// float, gray with alpha) is converted to 8-bit RGBA.
pub fn from_dynamic_image(image: &DynamicImage) -> RenderedImage {
    let (width, height) = (image.width(), image.height());
    match image {
        DynamicImage::ImageRgb8(rgb) => RenderedImage {
            width,
            height,
            format: PixelFormat::Rgb8,
            data: rgb.as_raw().clone(),
        },
        DynamicImage::ImageLuma8(gray) => RenderedImage {
            width,
            height,
            format: PixelFormat::Gray8,
            data: gray.as_raw().clone(),
        },
        other => RenderedImage {
            width,
            height,
            format: PixelFormat::Rgba8,
            data: other.to_rgba8().into_raw(),
        },
    }
}

/// Hand a rendered image over to the `image` crate
pub fn to_dynamic_image(image: RenderedImage) -> Result<DynamicImage> {
    let RenderedImage {
        width,
        height,
        format,
        data,
    } = image;
    let converted = match format {
        PixelFormat::Rgba8 => RgbaImage::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
        PixelFormat::Rgb8 => RgbImage::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
        PixelFormat::Gray8 => GrayImage::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
    };
    converted.ok_or_else(|| {
        ExportError::InvalidBuffer(format!("{}x{} {:?} buffer too small", width, height, format))
            .into()
    })
}

/// Monochrome page as an 8-bit grayscale image
pub fn page_to_gray_image(page: &PageCanvas) -> Result<GrayImage> {
    GrayImage::from_raw(page.width(), page.height(), page.data().to_vec()).ok_or_else(|| {
        ExportError::InvalidBuffer(format!("{}x{} page", page.width(), page.height())).into()
    })
}
