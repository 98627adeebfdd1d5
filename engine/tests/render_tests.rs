use engine::render::{self, Color};
use engine::surface::{RgbaBufferSurface, Surface, SurfaceSize};

const INK: Color = [255, 0, 0, 255];
const BLANK: Color = [0, 0, 0, 0];

fn surface(width: u32, height: u32) -> RgbaBufferSurface {
    RgbaBufferSurface::new(SurfaceSize::new(width, height))
}

fn pixel(surface: &RgbaBufferSurface, x: u32, y: u32) -> Color {
    let width = surface.size().width;
    let idx = ((y * width + x) * 4) as usize;
    let frame = surface.frame();
    [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
}

fn row_ink_count(surface: &RgbaBufferSurface, y: u32) -> usize {
    (0..surface.size().width)
        .filter(|&x| pixel(surface, x, y) == INK)
        .count()
}

#[test]
fn clear_fills_every_pixel() {
    let mut s = surface(8, 4);
    let color: Color = [1, 2, 3, 255];
    render::clear(s.frame_mut(), 8, 4, color);

    for y in 0..4 {
        for x in 0..8 {
            assert_eq!(pixel(&s, x, y), color);
        }
    }
}

#[test]
fn fill_rect_covers_exactly_its_bounds() {
    let mut s = surface(16, 16);
    render::fill_rect(s.frame_mut(), 16, 16, 2, 3, 4, 5, INK);

    assert_eq!(pixel(&s, 2, 3), INK);
    assert_eq!(pixel(&s, 5, 7), INK);
    assert_eq!(pixel(&s, 6, 3), BLANK);
    assert_eq!(pixel(&s, 2, 8), BLANK);
    assert_eq!(pixel(&s, 1, 3), BLANK);
}

#[test]
fn fill_rect_clips_the_left_and_top_edges() {
    let mut s = surface(16, 16);
    render::fill_rect(s.frame_mut(), 16, 16, -10, -10, 20, 20, INK);

    assert_eq!(pixel(&s, 0, 0), INK);
    assert_eq!(pixel(&s, 9, 9), INK);
    assert_eq!(pixel(&s, 10, 10), BLANK);
}

#[test]
fn fill_rect_clips_the_right_and_bottom_edges() {
    let mut s = surface(16, 16);
    render::fill_rect(s.frame_mut(), 16, 16, 12, 12, 100, 100, INK);

    assert_eq!(pixel(&s, 12, 12), INK);
    assert_eq!(pixel(&s, 15, 15), INK);
    assert_eq!(pixel(&s, 11, 11), BLANK);
}

#[test]
fn fully_offscreen_rects_draw_nothing() {
    let mut s = surface(16, 16);
    render::fill_rect(s.frame_mut(), 16, 16, -50, -50, 10, 10, INK);
    render::fill_rect(s.frame_mut(), 16, 16, 20, 20, 10, 10, INK);
    render::fill_rect(s.frame_mut(), 16, 16, 4, 4, 0, 7, INK);

    for y in 0..16 {
        assert_eq!(row_ink_count(&s, y), 0);
    }
}

#[test]
fn hline_spans_the_full_width() {
    let mut s = surface(12, 8);
    render::draw_hline(s.frame_mut(), 12, 8, 5, 2, INK);

    assert_eq!(row_ink_count(&s, 5), 12);
    assert_eq!(row_ink_count(&s, 6), 12);
    assert_eq!(row_ink_count(&s, 4), 0);
    assert_eq!(row_ink_count(&s, 7), 0);
}

#[test]
fn triangle_narrows_from_base_to_apex() {
    let mut s = surface(64, 64);
    render::fill_triangle_up(s.frame_mut(), 64, 64, 10, 50, 20, 20, INK);

    assert_eq!(row_ink_count(&s, 49), 20); // base
    assert_eq!(row_ink_count(&s, 40), 11); // midway
    assert_eq!(row_ink_count(&s, 30), 1); // apex

    // Nothing below the baseline or above the apex.
    assert_eq!(row_ink_count(&s, 50), 0);
    assert_eq!(row_ink_count(&s, 29), 0);
}

#[test]
fn triangle_apex_is_horizontally_centered() {
    let mut s = surface(64, 64);
    render::fill_triangle_up(s.frame_mut(), 64, 64, 10, 50, 21, 20, INK);

    assert_eq!(pixel(&s, 20, 30), INK);
}

#[test]
fn text_renders_glyph_pixels() {
    let mut s = surface(16, 8);
    render::draw_text_scaled(s.frame_mut(), 16, 8, 0, 0, "0", INK, 1);

    // '0' is a ring: full top row, hollow center.
    assert_eq!(pixel(&s, 0, 0), INK);
    assert_eq!(pixel(&s, 1, 0), INK);
    assert_eq!(pixel(&s, 2, 0), INK);
    assert_eq!(pixel(&s, 1, 1), BLANK);
    assert_eq!(pixel(&s, 1, 4), INK);
}

#[test]
fn text_scale_multiplies_glyph_pixels() {
    let mut s = surface(16, 16);
    render::draw_text_scaled(s.frame_mut(), 16, 16, 0, 0, "-", INK, 2);

    // The dash occupies glyph row 2, scaled to rows 4..6.
    assert_eq!(row_ink_count(&s, 4), 6);
    assert_eq!(row_ink_count(&s, 5), 6);
    assert_eq!(row_ink_count(&s, 3), 0);
    assert_eq!(row_ink_count(&s, 6), 0);
}

#[test]
fn spaces_advance_without_drawing() {
    let mut s = surface(32, 8);
    render::draw_text_scaled(s.frame_mut(), 32, 8, 0, 0, " 1", INK, 1);

    assert_eq!(row_ink_count(&s, 0), 1); // '1' top row is a single pixel
    for x in 0..4 {
        for y in 0..5 {
            assert_eq!(pixel(&s, x, y), BLANK);
        }
    }
}

#[test]
fn text_width_matches_the_advance() {
    assert_eq!(render::text_width("", 2), 0);
    assert_eq!(render::text_width("0", 2), 6);
    assert_eq!(render::text_width("10", 2), 14);
    assert_eq!(render::text_height(2), 10);
}
