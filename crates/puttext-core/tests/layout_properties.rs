// this_file: crates/puttext-core/tests/layout_properties.rs

//! Layout and compositing properties checked against a table-driven stub rasterizer

use std::collections::HashMap;

use puttext_core::{
    error::GlyphError, glyph::GlyphMetrics, overlay::overlay, Alignment, GlyphRasterizer,
    MalformedGlyphPolicy, PixelFormat, PuttextError, RenderConfig, RenderedImage, Rgb,
    TextRenderer,
};

/// Hand-made glyph shapes: (width, height, bitmap_top)
struct StubRasterizer {
    shapes: HashMap<char, (u32, u32, i32)>,
    truncate: Option<char>,
}

impl StubRasterizer {
    fn new() -> Self {
        let shapes = HashMap::from([
            ('H', (6, 10, 10)),
            ('i', (2, 9, 9)),
            ('A', (7, 10, 10)),
            ('B', (6, 10, 10)),
            ('g', (5, 10, 7)),
            ('\'', (1, 3, 10)),
            ('w', (8, 6, 6)),
        ]);
        Self {
            shapes,
            truncate: None,
        }
    }

    fn truncating(ch: char) -> Self {
        Self {
            truncate: Some(ch),
            ..Self::new()
        }
    }
}

impl GlyphRasterizer for StubRasterizer {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn rasterize(&mut self, ch: char, _pixel_size: u32) -> puttext_core::Result<GlyphMetrics> {
        let Some(&(width, height, bitmap_top)) = self.shapes.get(&ch) else {
            return Ok(GlyphMetrics::blank());
        };
        let mut coverage = vec![255u8; (width * height) as usize];
        if self.truncate == Some(ch) {
            coverage.truncate(coverage.len() / 2);
        }
        Ok(GlyphMetrics {
            coverage,
            width,
            height,
            bitmap_top,
            advance_space: 0,
        })
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn config() -> puttext_core::RenderConfigBuilder {
    RenderConfig::builder("stub.ttf", 32, Rgb::new(255, 0, 0))
}

fn renderer(config: RenderConfig, alpha: bool) -> TextRenderer<StubRasterizer> {
    TextRenderer::new(config, StubRasterizer::new(), alpha)
}

/// Rows that hold any ink
fn inked_rows(image: &RenderedImage) -> Vec<u32> {
    (0..image.height)
        .filter(|&y| (0..image.width).any(|x| image.pixel(x, y).is_some_and(|p| p.iter().any(|&v| v > 0))))
        .collect()
}

/// First inked column on row `y`
fn first_inked_column(image: &RenderedImage, y: u32) -> Option<u32> {
    (0..image.width).find(|&x| image.pixel(x, y).is_some_and(|p| p.iter().any(|&v| v > 0)))
}

#[test]
fn test_single_line_width_when_spacing_set_then_sums_glyphs_and_spacing() {
    init_logging();
    let mut r = renderer(config().char_spacing(2).build().unwrap(), false);
    let img = r.render("Hig").unwrap();
    assert_eq!(img.width, (6 + 2) + (2 + 2) + (5 + 2));
    // tallest glyph 10 rows, 'g' reaches 3 below the baseline
    assert_eq!(img.height, 10 + 3);
}

#[test]
fn test_render_when_repeated_then_bytes_identical() {
    let mut r = renderer(config().align("center").build().unwrap(), true);
    let first = r.render("Hi\nA g'w").unwrap();
    let second = r.render("Hi\nA g'w").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_alignment_when_left_vs_right_then_anchor_shifts_by_slack() {
    let text = "HHH\nw\nAB";
    let left = renderer(config().line_spacing(0).build().unwrap(), false)
        .render(text)
        .unwrap();
    let right = renderer(config().line_spacing(0).align("RIGHT").build().unwrap(), false)
        .render(text)
        .unwrap();
    let center = renderer(config().line_spacing(0).align("center").build().unwrap(), false)
        .render(text)
        .unwrap();

    assert_eq!((left.width, left.height), (right.width, right.height));
    let total = left.width;
    // Lines start at rows 0, 10 and 16; probe one inked row in each
    let widths = [(0u32, 3 * 7), (14, 9), (25, 8 + 7)];
    for (y, line_width) in widths {
        let l = first_inked_column(&left, y).unwrap();
        let r = first_inked_column(&right, y).unwrap();
        let c = first_inked_column(&center, y).unwrap();
        assert_eq!(r - l, total - line_width, "row {y}");
        assert_eq!(c - l, (total - line_width) / 2, "row {y}");
    }
}

#[test]
fn test_overlay_when_foreground_overhangs_then_shape_preserved() {
    let mut r = renderer(config().build().unwrap(), true);
    let text = r.render("HiHi").unwrap();
    let bg = RenderedImage::filled(20, 8, PixelFormat::Rgba8, &[0, 0, 40, 255]);

    let out = overlay(&bg, &text, (15, 3)).unwrap();
    assert_eq!((out.width, out.height, out.format), (bg.width, bg.height, bg.format));
    assert_eq!(out.data.len(), bg.data.len());
    // Top-left of the text lands at the origin
    assert_eq!(out.pixel(15, 3), Some(&[255, 0, 0, 255][..]));
    assert_eq!(out.pixel(14, 3), Some(&[0, 0, 40, 255][..]));
}

#[test]
fn test_lone_space_when_word_spacing_five_then_blank_five_by_one() {
    let mut r = renderer(config().word_spacing(5).build().unwrap(), false);
    let page = r.render_mono(" ").unwrap();
    assert_eq!((page.width(), page.height()), (5, 1));
    assert!(page.is_blank());
}

#[test]
fn test_hi_when_red_rgb_then_only_red_channel_inked() {
    let mut r = renderer(config().build().unwrap(), false);
    let img = r.render("Hi").unwrap();

    assert_eq!(img.format, PixelFormat::Rgb8);
    assert_eq!(img.width, 6 + 1 + 2 + 1);
    assert!(img.data.chunks_exact(3).all(|px| px[1] == 0 && px[2] == 0));
    assert!(img.data.chunks_exact(3).any(|px| px[0] == 255));
}

#[test]
fn test_two_lines_when_spacing_two_then_single_two_row_gap() {
    let mut r = renderer(config().line_spacing(2).build().unwrap(), false);
    let img = r.render("A\nB").unwrap();

    assert_eq!(img.height, 10 + 10 + 2);
    let rows = inked_rows(&img);
    let expected: Vec<u32> = (0..10).chain(12..22).collect();
    assert_eq!(rows, expected);
}

#[test]
fn test_empty_middle_line_when_stacked_then_one_row_tall() {
    let mut r = renderer(config().line_spacing(2).build().unwrap(), false);
    let (w, h) = r.measure("A\n\nB").unwrap();
    assert_eq!(w, 8);
    assert_eq!(h, 10 + 1 + 10 + 2 * 2);
}

#[test]
fn test_empty_text_when_rendered_then_zero_width_single_row() {
    let mut r = renderer(config().build().unwrap(), true);
    let img = r.render("").unwrap();
    assert_eq!((img.width, img.height), (0, 1));
    assert!(img.data.is_empty());
}

#[test]
fn test_crlf_when_rendered_then_matches_lf() {
    let mut r = renderer(config().build().unwrap(), false);
    assert_eq!(r.render("A\r\nB").unwrap(), r.render("A\nB").unwrap());
}

#[test]
fn test_tab_when_rendered_then_four_word_spaces_wide() {
    let mut r = renderer(config().word_spacing(3).build().unwrap(), false);
    assert_eq!(r.measure("\t").unwrap(), (12, 1));
}

#[test]
fn test_malformed_glyph_when_abort_policy_then_render_fails() {
    let config = config().build().unwrap();
    let mut r = TextRenderer::new(config, StubRasterizer::truncating('i'), false);
    let err = r.render("Hi").unwrap_err();
    assert!(matches!(
        err,
        PuttextError::Glyph(GlyphError::Format { ch: 'i', .. })
    ));
}

#[test]
fn test_malformed_glyph_when_blank_policy_then_placeholder_used() {
    init_logging();
    let config = config()
        .malformed_glyphs(MalformedGlyphPolicy::Blank)
        .build()
        .unwrap();
    let mut r = TextRenderer::new(config, StubRasterizer::truncating('i'), false);
    let img = r.render("Hi").unwrap();
    // 'H' plus spacing, then the placeholder is just the spacing column
    assert_eq!(img.width, 6 + 1 + 1);
}

#[test]
fn test_config_when_alignment_parsed_then_case_insensitive() {
    assert_eq!("Center".parse::<Alignment>().unwrap(), Alignment::Center);
    assert!("middle".parse::<Alignment>().is_err());
}
