use engine::golden::frame_sha256_hex;
use engine::render;
use engine::surface::{RgbaBufferSurface, Surface, SurfaceSize};

fn draw_reference_scene(surface: &mut RgbaBufferSurface) {
    let SurfaceSize { width, height } = surface.size();
    let frame = surface.frame_mut();
    render::clear(frame, width, height, [10, 10, 14, 255]);
    render::draw_hline(frame, width, height, 40, 2, [102, 102, 102, 255]);
    render::fill_rect(frame, width, height, 8, 20, 10, 20, [13, 110, 253, 255]);
    render::fill_triangle_up(frame, width, height, 30, 40, 12, 12, [220, 53, 69, 255]);
    render::draw_text(frame, width, height, 2, 2, "SCORE 7", [235, 235, 235, 255]);
}

#[test]
fn identical_scenes_hash_identically() {
    let size = SurfaceSize::new(64, 48);
    let mut a = RgbaBufferSurface::new(size);
    let mut b = RgbaBufferSurface::new(size);

    draw_reference_scene(&mut a);
    draw_reference_scene(&mut b);

    assert_eq!(frame_sha256_hex(a.frame()), frame_sha256_hex(b.frame()));
}

#[test]
fn any_scene_change_changes_the_hash() {
    let size = SurfaceSize::new(64, 48);
    let mut a = RgbaBufferSurface::new(size);
    let mut b = RgbaBufferSurface::new(size);

    draw_reference_scene(&mut a);
    draw_reference_scene(&mut b);
    // Nudge a single shape by one pixel.
    render::fill_rect(b.frame_mut(), 64, 48, 9, 20, 10, 20, [13, 110, 253, 255]);

    assert_ne!(frame_sha256_hex(a.frame()), frame_sha256_hex(b.frame()));
}

#[test]
fn digests_are_lowercase_hex_sha256() {
    let surface = RgbaBufferSurface::new(SurfaceSize::new(8, 8));
    let digest = frame_sha256_hex(surface.frame());

    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}
