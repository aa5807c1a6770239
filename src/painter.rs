// painter.rs - CPU Pixel Painting
//
// Everything the overlay draws goes through these helpers: blitting a
// scaled region copy, stroking an indicator border, and a small bitmap
// font for the cursor readout. Buffers are 0xAARRGGBB u32 rows, the
// layout the presentation surface expects.

use image::RgbaImage;

use crate::geometry::Rgb;

/// Pack an RGB triple into the 0xAARRGGBB buffer format.
pub fn pack(rgb: Rgb) -> u32 {
    0xFF00_0000 | ((rgb.0 as u32) << 16) | ((rgb.1 as u32) << 8) | rgb.2 as u32
}

/// Fill the whole buffer with one color.
pub fn fill(buffer: &mut [u32], color: u32) {
    buffer.fill(color);
}

/// Copy an RGBA image into the buffer, top-left anchored, clipped to the
/// buffer. Alpha is dropped; the window itself carries the opacity.
pub fn blit_image(buffer: &mut [u32], buf_width: u32, buf_height: u32, image: &RgbaImage) {
    let width = image.width().min(buf_width);
    let height = image.height().min(buf_height);

    for y in 0..height {
        for x in 0..width {
            let px = image.get_pixel(x, y);
            buffer[(y * buf_width + x) as usize] = pack(Rgb(px.0[0], px.0[1], px.0[2]));
        }
    }
}

/// Stroke a rectangle border along the buffer edges. The outline path is
/// inset by half the stroke from each edge, so the full stroke stays
/// inside the surface: the painted band covers `thickness` pixels in
/// from every side.
pub fn stroke_rect(buffer: &mut [u32], width: u32, height: u32, thickness: u32, color: u32) {
    let t = thickness.min(width / 2).min(height / 2).max(1);

    for y in 0..height {
        for x in 0..width {
            let on_band = x < t || x >= width - t || y < t || y >= height - t;
            if on_band {
                buffer[(y * width + x) as usize] = color;
            }
        }
    }
}

/// Width in pixels of `text` drawn with `draw_text` at `scale`.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * 6 * scale
}

pub const GLYPH_HEIGHT: u32 = 7;

/// Draw a line of text with a 5x7 bitmap font. Only the characters the
/// cursor readout needs have glyphs; anything else renders as a blank.
pub fn draw_text(
    buffer: &mut [u32],
    buf_width: u32,
    buf_height: u32,
    start_x: i32,
    start_y: i32,
    text: &str,
    color: u32,
    scale: u32,
) {
    let mut x = start_x;
    for ch in text.chars() {
        let rows = glyph(ch);
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..5u32 {
                if (bits >> (4 - col)) & 1 == 1 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            let px = x + (col * scale + sx) as i32;
                            let py = start_y + (row as u32 * scale + sy) as i32;
                            if px >= 0 && (px as u32) < buf_width && py >= 0 && (py as u32) < buf_height
                            {
                                buffer[(py as u32 * buf_width + px as u32) as usize] = color;
                            }
                        }
                    }
                }
            }
        }
        x += (6 * scale) as i32;
    }
}

/// 5x7 glyph rows, one byte per row, low 5 bits used.
fn glyph(ch: char) -> [u8; 7] {
    match ch {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x06, 0x08, 0x10, 0x1F],
        '3' => [0x0E, 0x11, 0x01, 0x06, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x0A, 0x04, 0x04, 0x04, 0x04],
        ':' => [0x00, 0x00, 0x04, 0x00, 0x04, 0x00, 0x00],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x04, 0x04, 0x08],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        _ => [0x00; 7],
    }
}
