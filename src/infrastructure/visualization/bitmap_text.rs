use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};

/// Width and height of one glyph cell in pixels.
pub(super) const GLYPH_SIZE: u32 = 8;

/// Number of glyph cells that fit in `width` pixels.
pub(super) fn fitting_chars(width: u32) -> usize {
    (width / GLYPH_SIZE) as usize
}

/// Draws `text` with its top-left corner at (`x`, `y`), clipped to `max_chars` cells.
///
/// Characters without a glyph are drawn as `?`. Pixels outside the canvas are dropped.
pub(super) fn draw_text(
    canvas: &mut RgbImage,
    x: u32,
    y: u32,
    text: &str,
    max_chars: usize,
    color: Rgb<u8>,
) {
    for (cell, c) in text.chars().take(max_chars).enumerate() {
        let Some(glyph) = glyph(c) else {
            continue;
        };
        let origin_x = x + cell as u32 * GLYPH_SIZE;
        for (row, bits) in glyph.iter().enumerate() {
            for col in 0..GLYPH_SIZE {
                // Bit 0 is the leftmost pixel of the row.
                if bits & (1 << col) != 0 {
                    let (px, py) = (origin_x + col, y + row as u32);
                    if px < canvas.width() && py < canvas.height() {
                        canvas.put_pixel(px, py, color);
                    }
                }
            }
        }
    }
}

fn glyph(c: char) -> Option<[u8; 8]> {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| BASIC_FONTS.get('?'))
}
