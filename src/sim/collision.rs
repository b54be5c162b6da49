//! Collision detection for axis-aligned boxes
//!
//! Everything in the scene is a rectangle, so a hit is a plain AABB overlap.
//! All four comparisons are strict: boxes that only share an edge do not hit.

use serde::{Deserialize, Serialize};

use super::state::Obstacle;

/// Axis-aligned rectangle in scene coordinates (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap on both axes
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.bottom() > other.y
            && self.y < other.bottom()
    }
}

/// Index of the first obstacle the player box overlaps, scanning in spawn order
pub fn first_hit(player: &Rect, obstacles: &[Obstacle]) -> Option<usize> {
    obstacles.iter().position(|obs| player.overlaps(&obs.rect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;

    fn player_at(y: f32) -> Rect {
        Rect::new(PLAYER_X, y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn obstacle(x: f32, height: f32) -> Obstacle {
        Obstacle {
            x,
            y: GROUND_LINE - height,
            width: OBSTACLE_WIDTH,
            height,
        }
    }

    #[test]
    fn test_overlap_hit() {
        let player = player_at(GROUND_Y);
        let obs = obstacle(PLAYER_X + 10.0, 50.0);
        assert!(player.overlaps(&obs.rect()));
    }

    #[test]
    fn test_shared_right_edge_is_not_a_hit() {
        let player = player_at(GROUND_Y);
        // playerX + playerWidth == obs.x
        let obs = obstacle(PLAYER_X + PLAYER_WIDTH, 50.0);
        assert!(!player.overlaps(&obs.rect()));
    }

    #[test]
    fn test_shared_left_edge_is_not_a_hit() {
        let player = player_at(GROUND_Y);
        // obs.x + obs.width == playerX
        let obs = obstacle(PLAYER_X - OBSTACLE_WIDTH, 50.0);
        assert!(!player.overlaps(&obs.rect()));
    }

    #[test]
    fn test_player_bottom_touching_obstacle_top_is_not_a_hit() {
        let obs = obstacle(PLAYER_X, 50.0);
        let player = player_at(obs.y - PLAYER_HEIGHT);
        assert!(!player.overlaps(&obs.rect()));

        // One unit lower and it overlaps
        let player = player_at(obs.y - PLAYER_HEIGHT + 1.0);
        assert!(player.overlaps(&obs.rect()));
    }

    #[test]
    fn test_clear_above() {
        let player = player_at(0.0);
        let obs = obstacle(PLAYER_X, OBSTACLE_MAX_HEIGHT);
        assert!(!player.overlaps(&obs.rect()));
    }

    #[test]
    fn test_first_hit_scans_in_order() {
        let player = player_at(GROUND_Y);
        let obstacles = [
            obstacle(PLAYER_X + 5.0, 40.0),
            obstacle(PLAYER_X + 20.0, 40.0),
            obstacle(600.0, 40.0),
        ];
        assert_eq!(first_hit(&player, &obstacles), Some(0));
        assert_eq!(first_hit(&player, &obstacles[2..]), None);
        assert_eq!(first_hit(&player, &[]), None);
    }
}
