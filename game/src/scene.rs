//! Draws a run into an RGBA frame: backdrop, ground line, player, obstacles,
//! and the score HUD. Colors follow the original page styling.

use engine::render::{self, Color};
use engine::surface::SurfaceSize;

use crate::runner_core::{Obstacle, ObstacleKind, RunnerCore};

pub const COLOR_BACKGROUND: Color = [16, 18, 28, 255];
pub const COLOR_GROUND: Color = [102, 102, 102, 255];
pub const COLOR_PLAYER: Color = [13, 110, 253, 255];
pub const COLOR_OBSTACLE: Color = [220, 53, 69, 255];
const COLOR_HUD: Color = [235, 235, 235, 255];
const COLOR_GAME_OVER: Color = [255, 99, 99, 255];

const HUD_MARGIN: i32 = 12;
const GROUND_THICKNESS: u32 = 2;

/// Everything a frame shows: the scene plus the HUD overlay.
pub fn draw_frame(frame: &mut [u8], size: SurfaceSize, core: &RunnerCore, best: u32) {
    draw_scene(frame, size, core);
    draw_hud(frame, size, core, best);
}

pub fn draw_scene(frame: &mut [u8], size: SurfaceSize, core: &RunnerCore) {
    render::clear(frame, size.width, size.height, COLOR_BACKGROUND);

    render::draw_hline(
        frame,
        size.width,
        size.height,
        core.ground_level() as i32,
        GROUND_THICKNESS,
        COLOR_GROUND,
    );

    let player = core.player();
    render::fill_rect(
        frame,
        size.width,
        size.height,
        player.x as i32,
        player.y as i32,
        player.width as u32,
        player.height as u32,
        COLOR_PLAYER,
    );

    for obstacle in core.obstacles() {
        draw_obstacle(frame, size, obstacle);
    }
}

// Both shapes are anchored at the ground baseline and extend upward by
// `height` — the same span the collision test uses.
fn draw_obstacle(frame: &mut [u8], size: SurfaceSize, obstacle: &Obstacle) {
    match obstacle.kind {
        ObstacleKind::Spike => render::fill_triangle_up(
            frame,
            size.width,
            size.height,
            obstacle.x as i32,
            obstacle.y as i32,
            obstacle.width as u32,
            obstacle.height as u32,
            COLOR_OBSTACLE,
        ),
        ObstacleKind::Block => render::fill_rect(
            frame,
            size.width,
            size.height,
            obstacle.x as i32,
            obstacle.top() as i32,
            obstacle.width as u32,
            obstacle.height as u32,
            COLOR_OBSTACLE,
        ),
    }
}

pub fn draw_hud(frame: &mut [u8], size: SurfaceSize, core: &RunnerCore, best: u32) {
    let score_text = format!("SCORE {}", core.display_score());
    render::draw_text(
        frame,
        size.width,
        size.height,
        HUD_MARGIN,
        HUD_MARGIN,
        &score_text,
        COLOR_HUD,
    );

    let best_text = format!("BEST {best}");
    let best_x =
        size.width as i32 - HUD_MARGIN - render::text_width(&best_text, render::TEXT_SCALE) as i32;
    render::draw_text(
        frame,
        size.width,
        size.height,
        best_x,
        HUD_MARGIN,
        &best_text,
        COLOR_HUD,
    );

    if core.is_game_over() {
        draw_game_over_card(frame, size, core.display_score());
    }
}

fn draw_game_over_card(frame: &mut [u8], size: SurfaceSize, final_score: u32) {
    const TITLE_SCALE: u32 = 4;
    let line_gap = render::text_height(render::TEXT_SCALE) as i32 + 8;

    let title = "GAME OVER";
    let title_x = (size.width as i32 - render::text_width(title, TITLE_SCALE) as i32) / 2;
    let title_y = size.height as i32 / 3;
    render::draw_text_scaled(
        frame,
        size.width,
        size.height,
        title_x,
        title_y,
        title,
        COLOR_GAME_OVER,
        TITLE_SCALE,
    );

    let mut y = title_y + render::text_height(TITLE_SCALE) as i32 + 16;
    for line in [format!("SCORE {final_score}"), "PRESS R TO RESTART".to_string()] {
        let x = (size.width as i32 - render::text_width(&line, render::TEXT_SCALE) as i32) / 2;
        render::draw_text(frame, size.width, size.height, x, y, &line, COLOR_HUD);
        y += line_gap;
    }
}
