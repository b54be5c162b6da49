//! Simulation engine: the command surface a host drives
//!
//! Owns the single `GameState` and the height source, applies `start`,
//! `reset` and `jump` commands, and tells the host whether to keep
//! delivering frames.

use super::spawn::{HeightSource, SeededHeights};
use super::state::GameState;
use super::tick::{TickOutcome, tick};
use crate::consts::*;

/// The game engine
#[derive(Debug, Clone)]
pub struct Engine<H: HeightSource = SeededHeights> {
    state: GameState,
    heights: H,
}

impl Engine<SeededHeights> {
    /// Create an idle engine with seeded obstacle heights
    pub fn new(seed: u64) -> Self {
        Self::with_heights(SeededHeights::new(seed))
    }
}

impl<H: HeightSource> Engine<H> {
    /// Create an idle engine drawing obstacle heights from `heights`
    pub fn with_heights(heights: H) -> Self {
        Self {
            state: GameState::idle(),
            heights,
        }
    }

    /// Read-only snapshot for rendering
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begin a fresh run
    pub fn start(&mut self) {
        if self.state.game_over {
            log::info!("Restarting after game over (score {})", self.state.score);
        }
        self.state = GameState::running();
        log::info!("Run started");
    }

    /// Back to the idle snapshot
    pub fn reset(&mut self) {
        self.state = GameState::idle();
        log::info!("Game reset");
    }

    /// Kick the player upward; ignored unless a run is in progress
    ///
    /// Returns whether the jump applied. The impulse replaces the current
    /// velocity, so repeated calls between ticks do not stack.
    pub fn jump(&mut self) -> bool {
        if !self.state.is_active() {
            return false;
        }
        self.state.player_velocity = JUMP_IMPULSE;
        true
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickOutcome {
        let outcome = tick(&mut self.state, &mut self.heights);
        match outcome {
            TickOutcome::Idle => {}
            TickOutcome::Advanced => {
                log::trace!("Tick: score {}", self.state.score);
            }
            TickOutcome::Revealed => {
                log::info!("Secret code revealed at score {}", self.state.score);
            }
            TickOutcome::Collided { obstacle } => {
                log::info!(
                    "Game over: hit obstacle {} with score {}",
                    obstacle,
                    self.state.score
                );
            }
        }
        outcome
    }

    /// Whether the host should keep calling `tick` every frame
    pub fn wants_frames(&self) -> bool {
        self.state.is_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Obstacle;

    fn engine() -> Engine<impl HeightSource> {
        Engine::with_heights(|| 50.0)
    }

    #[test]
    fn test_new_engine_is_idle() {
        let engine = Engine::new(12345);
        assert_eq!(engine.state(), &GameState::idle());
        assert!(!engine.wants_frames());
    }

    #[test]
    fn test_start_arms_frames() {
        let mut engine = engine();
        engine.start();
        assert!(engine.state().is_playing);
        assert!(!engine.state().game_over);
        assert!(engine.wants_frames());
    }

    #[test]
    fn test_jump_ignored_when_inactive() {
        let mut engine = engine();
        assert!(!engine.jump());
        assert_eq!(engine.state(), &GameState::idle());

        engine.start();
        while !engine.tick().is_collision() {}
        let over = engine.state().clone();
        assert!(!engine.jump());
        assert_eq!(engine.state(), &over);
    }

    #[test]
    fn test_double_jump_does_not_stack() {
        let mut engine = engine();
        engine.start();
        assert!(engine.jump());
        assert!(engine.jump());
        assert_eq!(engine.state().player_velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_jump_mid_air_overwrites_velocity() {
        let mut engine = engine();
        engine.start();
        engine.jump();
        for _ in 0..5 {
            engine.tick();
        }
        assert!(engine.state().player_velocity > JUMP_IMPULSE);
        engine.jump();
        assert_eq!(engine.state().player_velocity, JUMP_IMPULSE);
    }

    #[test]
    fn test_reset_mid_run_restores_idle() {
        let mut engine = engine();
        engine.start();
        for _ in 0..80 {
            engine.tick();
        }
        engine.jump();
        engine.tick();
        assert!(engine.state().score > 0);
        assert!(!engine.state().obstacles.is_empty());

        engine.reset();
        assert_eq!(engine.state(), &GameState::idle());
        assert!(!engine.wants_frames());
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut engine = engine();
        engine.start();
        while !engine.tick().is_collision() {}
        engine.reset();
        assert_eq!(engine.state(), &GameState::idle());
    }

    #[test]
    fn test_game_over_drops_frames_and_freezes_score() {
        let mut engine = engine();
        engine.start();
        while !engine.tick().is_collision() {}
        assert!(engine.state().game_over);
        assert!(!engine.wants_frames());

        let score = engine.state().score;
        for _ in 0..20 {
            assert_eq!(engine.tick(), TickOutcome::Idle);
        }
        assert_eq!(engine.state().score, score);
    }

    #[test]
    fn test_start_after_game_over_begins_fresh_run() {
        let mut engine = engine();
        engine.start();
        while !engine.tick().is_collision() {}

        engine.start();
        assert_eq!(engine.state(), &GameState::running());
        assert!(engine.wants_frames());
        engine.tick();
        assert_eq!(engine.state().score, 1);
    }

    #[test]
    fn test_frames_follow_active_state() {
        let mut engine = engine();
        let check = |engine: &Engine<_>| {
            assert_eq!(engine.wants_frames(), engine.state().is_active());
        };
        check(&engine);
        engine.start();
        check(&engine);
        for _ in 0..10 {
            engine.tick();
            check(&engine);
        }
        engine.reset();
        check(&engine);
        engine.tick();
        check(&engine);
        engine.start();
        while !engine.tick().is_collision() {
            check(&engine);
        }
        check(&engine);
        engine.start();
        check(&engine);
    }

    #[test]
    fn test_secret_scenario() {
        let mut engine = engine();
        engine.start();
        for _ in 0..99 {
            engine.tick();
        }
        assert_eq!(engine.state().score, 99);
        assert_eq!(engine.state().secret_code, None);

        assert_eq!(engine.tick(), TickOutcome::Revealed);
        assert_eq!(engine.state().score, 100);
        assert_eq!(engine.state().secret_code.as_deref(), Some(SECRET_CODE));
    }

    #[test]
    fn test_collision_with_placed_obstacle() {
        let mut engine = engine();
        engine.start();
        engine.state.obstacles.push(Obstacle {
            x: PLAYER_X + GAME_SPEED,
            y: GROUND_LINE - 40.0,
            width: OBSTACLE_WIDTH,
            height: 40.0,
        });
        assert_eq!(engine.tick(), TickOutcome::Collided { obstacle: 0 });
        assert_eq!(engine.state().score, 0);
    }
}
