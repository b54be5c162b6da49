//! Game state and core simulation types
//!
//! The whole run lives in one `GameState` value. Rendering reads it, ticks
//! replace its contents, and nothing else holds simulation data.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// An obstacle scrolling in from the right
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge, decreases by `GAME_SPEED` every tick
    pub x: f32,
    /// Top edge (fixed after spawn)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// True once the right edge has passed the left side of the scene
    pub fn is_off_screen(&self) -> bool {
        self.x <= -self.width
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// A run has started and has not been reset
    pub is_playing: bool,
    /// The run ended in a collision; no further ticks apply
    pub game_over: bool,
    /// Ticks survived since start
    pub score: u32,
    /// Top of the player box, within [0, GROUND_Y]
    pub player_y: f32,
    /// Vertical velocity (negative is up)
    pub player_velocity: f32,
    /// Obstacles in spawn order (also left-to-right order)
    pub obstacles: Vec<Obstacle>,
    /// Easter egg, set once the score reaches `REVEAL_SCORE`
    pub secret_code: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::idle()
    }
}

impl GameState {
    /// The snapshot shown before the first run and after `reset`
    pub fn idle() -> Self {
        Self {
            is_playing: false,
            game_over: false,
            score: 0,
            player_y: GROUND_Y,
            player_velocity: 0.0,
            obstacles: Vec::new(),
            secret_code: None,
        }
    }

    /// Fresh state for a new run
    pub fn running() -> Self {
        Self {
            is_playing: true,
            ..Self::idle()
        }
    }

    /// Whether ticks currently advance the simulation
    pub fn is_active(&self) -> bool {
        self.is_playing && !self.game_over
    }

    /// The player's bounding box
    pub fn player_rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.player_y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Player is standing on the ground
    pub fn on_ground(&self) -> bool {
        self.player_y >= GROUND_Y
    }
}
