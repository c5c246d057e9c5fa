//! End-to-end tests through the facade

use std::path::PathBuf;

use puttext::error::{FontLoadError, OverlayError, OverlayRole};
use puttext::prelude::*;

fn test_font_path() -> Option<PathBuf> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fonts")
        .join("NotoSans-Regular.ttf");
    if !path.exists() {
        eprintln!("Skipping test: font not found at {:?}", path);
        return None;
    }
    Some(path)
}

fn config_for(path: impl Into<PathBuf>, align: &str) -> RenderConfig {
    RenderConfig::builder(path, 32, Rgb::new(255, 255, 255))
        .align(align)
        .build()
        .expect("valid config")
}

#[test]
fn test_missing_font_when_opening_then_font_load_error() {
    let config = config_for("/no/such/font.ttf", "left");
    let err = puttext::open_renderer(config, false).err().expect("should fail");
    assert!(matches!(
        err,
        PuttextError::FontLoad(FontLoadError::FileNotFound(_))
    ));
}

#[test]
fn test_rgb_background_when_putting_text_then_rejected_before_font_load() {
    let config = config_for("/no/such/font.ttf", "left");
    let background = RenderedImage::filled(10, 10, PixelFormat::Rgb8, &[0, 0, 0]);

    let err = puttext::put_text(&background, "x", (0, 0), &config).unwrap_err();
    assert!(matches!(
        err,
        PuttextError::Overlay(OverlayError::MissingAlpha(OverlayRole::Background))
    ));
}

#[test]
fn test_real_font_when_putting_text_then_background_size_kept() {
    let _ = env_logger::builder().is_test(true).try_init();
    let Some(path) = test_font_path() else { return };
    let config = config_for(path, "center");
    let background = RenderedImage::filled(200, 120, PixelFormat::Rgba8, &[0, 0, 0, 255]);

    let out = puttext::put_text(&background, "Hi\nthere", (10, 10), &config).expect("put_text");
    assert_eq!((out.width, out.height), (200, 120));
    assert_eq!(out.pixel(0, 0), Some(&[0, 0, 0, 255][..]));
    assert!(out.data.chunks_exact(4).any(|px| px[0] > 0));
}

#[test]
fn test_real_font_when_measuring_then_matches_render() {
    let Some(path) = test_font_path() else { return };
    let mut renderer = puttext::open_renderer(config_for(path, "right"), true).expect("open");

    let (w, h) = renderer.measure("Hello\nworld").expect("measure");
    let image = renderer.render("Hello\nworld").expect("render");
    assert_eq!((image.width, image.height), (w, h));
    assert_eq!(image.format, PixelFormat::Rgba8);
}

#[test]
fn test_real_font_when_exporting_png_then_signature_written() {
    let Some(path) = test_font_path() else { return };
    let mut renderer = puttext::open_renderer(config_for(path, "left"), false).expect("open");

    let image = renderer.render("png").expect("render");
    let bytes = puttext::export::encode_png(&image).expect("encode");
    assert_eq!(&bytes[..4], b"\x89PNG");

    let gray = puttext::export::page_to_gray_image(&renderer.render_mono("png").expect("mono"))
        .expect("gray");
    assert_eq!((gray.width(), gray.height()), (image.width, image.height));
}
