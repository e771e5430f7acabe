//! Title rendering: bitmap-glyph text centered on an anchor, drawn over an
//! opaque padded background box.
//!
//! Glyphs come from the 8x8 `font8x8` tables and are magnified by an
//! integer factor derived from the continuous `scale` parameter, so text
//! metrics stay deterministic across platforms.
use font8x8::{BASIC_FONTS, GREEK_FONTS, HIRAGANA_FONTS, LATIN_FONTS, UnicodeFonts};
use tracing::debug;

use crate::raster::{Color, Point, Raster};
use crate::types::TitleFont;

const GLYPH_SIZE: usize = 8;

/// Style parameters shared by every title in one mosaic.
#[derive(Debug, Clone, Copy)]
pub struct TitleStyle {
    pub color: Color,
    pub scale: f32,
    pub thickness: usize,
    pub padding: usize,
    pub font: TitleFont,
    pub background_color: Color,
}

/// Integer glyph magnification for a continuous text scale. Scale 1.0 maps
/// to a 24 px glyph cell.
fn magnification(scale: f32) -> usize {
    ((scale * 3.0).round() as i64).max(1) as usize
}

/// Deterministic text scale for a raster resolution: one thousandth of the
/// short side, clamped to `[0.25, 4.0]`. Monotonic in resolution.
pub fn optimal_text_scale(resolution_wh: (usize, usize)) -> f32 {
    let short_side = resolution_wh.0.min(resolution_wh.1) as f32;
    (short_side * 1e-3).clamp(0.25, 4.0)
}

/// Pixel bounding box (width, height) of `text` at `scale`.
pub fn text_size(text: &str, scale: f32) -> (usize, usize) {
    let cell = GLYPH_SIZE * magnification(scale);
    (text.chars().count() * cell, cell)
}

fn glyph_bitmap(ch: char, font: TitleFont) -> [u8; GLYPH_SIZE] {
    let looked_up = match font {
        TitleFont::Basic => BASIC_FONTS.get(ch),
        TitleFont::Extended => BASIC_FONTS
            .get(ch)
            .or_else(|| LATIN_FONTS.get(ch))
            .or_else(|| GREEK_FONTS.get(ch))
            .or_else(|| HIRAGANA_FONTS.get(ch)),
    };
    looked_up
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; GLYPH_SIZE])
}

/// Draw `text` onto a copy of `raster`, centered on `anchor` in both axes.
/// The background box covers the text bounding box plus `style.padding` on
/// all sides and is filled first; glyphs are drawn on top. Everything is
/// clipped at the raster edges. Empty text returns the input unchanged.
pub fn draw_title(raster: &Raster, text: &str, anchor: Point, style: &TitleStyle) -> Raster {
    if text.is_empty() {
        return raster.clone();
    }

    let (text_width, text_height) = text_size(text, style.scale);
    let center_x = anchor.x.round() as i64;
    let center_y = anchor.y.round() as i64;
    let text_x0 = center_x - (text_width as i64) / 2;
    let text_y0 = center_y - (text_height as i64) / 2;
    let padding = style.padding as i64;

    debug!(
        "Title {:?}: {}x{} box at ({}, {})",
        text, text_width, text_height, text_x0, text_y0
    );

    let mut out = raster.clone();
    out.fill_rect(
        text_x0 - padding,
        text_y0 - padding,
        text_width + 2 * style.padding,
        text_height + 2 * style.padding,
        style.background_color,
    );

    let cell = magnification(style.scale);
    // Extra symmetric growth per glyph pixel block for thickness > 1
    let grow = style.thickness.saturating_sub(1) as i64;
    for (index, ch) in text.chars().enumerate() {
        let bitmap = glyph_bitmap(ch, style.font);
        let glyph_x0 = text_x0 + (index * GLYPH_SIZE * cell) as i64;
        for (row, bits) in bitmap.iter().enumerate() {
            for bit in 0..GLYPH_SIZE {
                if bits & (1 << bit) == 0 {
                    continue;
                }
                out.fill_rect(
                    glyph_x0 + (bit * cell) as i64 - grow,
                    text_y0 + (row * cell) as i64 - grow,
                    cell + 2 * grow as usize,
                    cell + 2 * grow as usize,
                    style.color,
                );
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> TitleStyle {
        TitleStyle {
            color: Color::DEFAULT_TITLE_TEXT,
            scale: 1.0,
            thickness: 1,
            padding: 2,
            font: TitleFont::Basic,
            background_color: Color::rgb(255, 255, 255),
        }
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let raster = Raster::solid(64, 64, Color::rgb(3, 3, 3));
        let out = draw_title(&raster, "", Point::new(32.0, 32.0), &style());
        assert_eq!(out, raster);
    }

    #[test]
    fn drawing_fills_the_background_box() {
        let raster = Raster::solid(128, 128, Color::rgb(0, 0, 0));
        let out = draw_title(&raster, "A", Point::new(64.0, 64.0), &style());
        // background box center row, just outside the glyph cell on the left
        assert_eq!(out.data()[[64, 64 - 12 - 1, 0]], 255);
        // far corner untouched
        assert_eq!(out.data()[[0, 0, 0]], 0);
        assert_ne!(out, raster);
    }

    #[test]
    fn titles_clip_at_raster_edges() {
        let raster = Raster::solid(16, 16, Color::rgb(0, 0, 0));
        let out = draw_title(&raster, "WIDE TITLE", Point::new(0.0, 0.0), &style());
        assert_eq!((out.width(), out.height()), (16, 16));
    }

    #[test]
    fn text_size_scales_with_magnification() {
        assert_eq!(text_size("abc", 1.0), (3 * 8 * 3, 8 * 3));
        let (w1, _) = text_size("abc", 1.0);
        let (w2, _) = text_size("abc", 2.0);
        assert!(w2 > w1);
    }

    #[test]
    fn optimal_scale_is_monotonic_and_clamped() {
        let small = optimal_text_scale((100, 100));
        let medium = optimal_text_scale((1000, 1000));
        let large = optimal_text_scale((10_000, 10_000));
        assert!(small <= medium && medium <= large);
        assert_eq!(small, 0.25);
        assert_eq!(large, 4.0);
    }
}
