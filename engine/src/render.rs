//! CPU raster primitives over raw RGBA frames.
//!
//! Coordinates are signed so callers can pass shapes that straddle the frame
//! edges; everything is clipped here. `y` grows downward, matching the frame
//! layout (row 0 is the top of the surface).

pub type Color = [u8; 4];

pub const TEXT_SCALE: u32 = 2;
const GLYPH_W: u32 = 3;
const GLYPH_H: u32 = 5;

pub fn clear(frame: &mut [u8], width: u32, height: u32, color: Color) {
    let len = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(4)
        .min(frame.len());
    for px in frame[..len].chunks_exact_mut(4) {
        px.copy_from_slice(&color);
    }
}

pub fn fill_rect(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, w: u32, h: u32, color: Color) {
    if w == 0 || h == 0 {
        return;
    }

    let x0 = (x.max(0)) as i64;
    let y0 = (y.max(0)) as i64;
    let x1 = (x as i64 + w as i64).min(width as i64);
    let y1 = (y as i64 + h as i64).min(height as i64);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    let Some(expected_len) = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
    else {
        return;
    };
    if expected_len == 0 || frame.len() < expected_len {
        return;
    }

    let stride = width as usize * 4;
    let row_bytes = (x1 - x0) as usize * 4;
    for row in y0..y1 {
        let start = row as usize * stride + x0 as usize * 4;
        for px in frame[start..start + row_bytes].chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }
}

/// Horizontal band spanning the full surface width.
pub fn draw_hline(frame: &mut [u8], width: u32, height: u32, y: i32, thickness: u32, color: Color) {
    fill_rect(frame, width, height, 0, y, width, thickness, color);
}

/// Upward-pointing isoceles triangle.
///
/// The base spans `w` pixels and its bottom row is `base_y - 1`, so a shape
/// anchored at a baseline occupies rows `[base_y - h, base_y)` — the same
/// span an equally anchored rectangle of height `h` would.
pub fn fill_triangle_up(frame: &mut [u8], width: u32, height: u32, x: i32, base_y: i32, w: u32, h: u32, color: Color) {
    if w == 0 || h == 0 {
        return;
    }
    for i in 0..h {
        // Row 0 holds the apex; spans widen linearly down to the full base.
        let span = ((w as u64 * (i as u64 + 1)) / h as u64).max(1) as u32;
        let row = base_y - h as i32 + i as i32;
        let row_x = x + ((w - span) / 2) as i32;
        fill_rect(frame, width, height, row_x, row, span, 1, color);
    }
}

fn glyph_advance(scale: u32) -> u32 {
    (GLYPH_W + 1) * scale.max(1)
}

/// Pixel width of `text` at the given scale, for right-aligned or centered
/// placement.
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        0
    } else {
        count * glyph_advance(scale) - scale.max(1)
    }
}

pub fn text_height(scale: u32) -> u32 {
    GLYPH_H * scale.max(1)
}

pub fn draw_text(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, text: &str, color: Color) {
    draw_text_scaled(frame, width, height, x, y, text, color, TEXT_SCALE);
}

pub fn draw_text_scaled(
    frame: &mut [u8],
    width: u32,
    height: u32,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    scale: u32,
) {
    let scale = scale.max(1);
    let mut cursor_x = x;
    for ch in text.chars() {
        if ch != ' ' {
            draw_glyph(frame, width, height, cursor_x, y, ch, color, scale);
        }
        cursor_x += glyph_advance(scale) as i32;
    }
}

fn draw_glyph(frame: &mut [u8], width: u32, height: u32, x: i32, y: i32, ch: char, color: Color, scale: u32) {
    for (row, bits) in glyph_rows(ch).into_iter().enumerate() {
        for col in 0..GLYPH_W {
            if bits & (1u8 << (GLYPH_W - 1 - col)) == 0 {
                continue;
            }
            fill_rect(
                frame,
                width,
                height,
                x + (col * scale) as i32,
                y + (row as u32 * scale) as i32,
                scale,
                scale,
                color,
            );
        }
    }
}

// 3x5 block font covering the HUD's needs: digits, the letters of the score
// and game-over strings, and a little punctuation.
fn glyph_rows(ch: char) -> [u8; GLYPH_H as usize] {
    match ch.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],

        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'M' => [0b101, 0b111, 0b111, 0b101, 0b101],
        'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'R' => [0b111, 0b101, 0b111, 0b110, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],

        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],

        _ => [0b111, 0b101, 0b010, 0b101, 0b111],
    }
}
