//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one frame.

use super::collision::first_hit;
use super::spawn::{HeightSource, needs_spawn, spawn_obstacle};
use super::state::GameState;
use crate::consts::*;

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing or already over - state untouched
    Idle,
    /// Survived the tick, score incremented
    Advanced,
    /// Survived the tick and the secret code was revealed on it
    Revealed,
    /// Hit the obstacle at this index; the run is over
    Collided { obstacle: usize },
}

impl TickOutcome {
    pub fn is_collision(&self) -> bool {
        matches!(self, TickOutcome::Collided { .. })
    }
}

/// Advance the game state by one tick
///
/// Does nothing unless a run is in progress. Heights for new obstacles are
/// drawn from `heights`; nothing else is random.
pub fn tick(state: &mut GameState, heights: &mut impl HeightSource) -> TickOutcome {
    if !state.is_active() {
        return TickOutcome::Idle;
    }

    // Integrate position, then velocity
    state.player_y += state.player_velocity;
    state.player_velocity += GRAVITY;

    // Ground
    if state.player_y > GROUND_Y {
        state.player_y = GROUND_Y;
        state.player_velocity = 0.0;
    }
    // Ceiling
    if state.player_y < 0.0 {
        state.player_y = 0.0;
        state.player_velocity = 0.0;
    }

    // Scroll obstacles, dropping the ones that left the scene
    for obs in &mut state.obstacles {
        obs.x -= GAME_SPEED;
    }
    state.obstacles.retain(|obs| !obs.is_off_screen());

    if needs_spawn(&state.obstacles) {
        state.obstacles.push(spawn_obstacle(heights.next_height()));
    }

    // Collision ends the run before this tick scores
    if let Some(obstacle) = first_hit(&state.player_rect(), &state.obstacles) {
        state.game_over = true;
        return TickOutcome::Collided { obstacle };
    }

    state.score += 1;
    if state.score >= REVEAL_SCORE && state.secret_code.is_none() {
        state.secret_code = Some(SECRET_CODE.to_string());
        return TickOutcome::Revealed;
    }

    TickOutcome::Advanced
}
