//! Shape generation for 2D primitives
//!
//! Everything on screen is a rectangle, emitted as two triangles in scene
//! coordinates. The pipeline maps them to NDC.

use glam::Vec2;

use super::vertex::{Palette, Vertex};
use crate::consts::*;
use crate::sim::{GameState, Rect};

/// Vertices per rectangle (two triangles)
pub const RECT_VERTICES: usize = 6;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> [Vertex; RECT_VERTICES] {
    let tl = Vec2::new(r.x, r.y);
    let tr = Vec2::new(r.right(), r.y);
    let bl = Vec2::new(r.x, r.bottom());
    let br = Vec2::new(r.right(), r.bottom());

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Project the whole scene: sky, ground, obstacles, then the player on top
pub fn scene_vertices(state: &GameState, palette: &Palette) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.obstacles.len() + 3) * RECT_VERTICES);

    vertices.extend(rect(
        &Rect::new(0.0, 0.0, SCENE_WIDTH, GROUND_LINE),
        palette.sky,
    ));
    vertices.extend(rect(
        &Rect::new(0.0, GROUND_LINE, SCENE_WIDTH, SCENE_HEIGHT - GROUND_LINE),
        palette.ground,
    ));

    for obs in &state.obstacles {
        vertices.extend(rect(&obs.rect(), palette.obstacle));
    }

    let player_color = if state.game_over {
        palette.player_hit
    } else {
        palette.player
    };
    vertices.extend(rect(&state.player_rect(), player_color));

    vertices
}
