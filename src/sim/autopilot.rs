//! Demo-mode autopilot
//!
//! Jumps when the next obstacle is close enough that a jump started now
//! carries the player over it. Used for the attract/demo toggle in the
//! browser and by the headless native run.

use super::state::GameState;
use crate::consts::*;

/// Jump once the next obstacle's left edge is this close to the player's front
pub const LOOKAHEAD: f32 = 80.0;

/// Decide whether to jump this tick
pub fn should_jump(state: &GameState) -> bool {
    if !state.is_active() || !state.on_ground() {
        return false;
    }
    let front = PLAYER_X + PLAYER_WIDTH;
    state
        .obstacles
        .iter()
        .find(|obs| obs.x + obs.width > PLAYER_X)
        .is_some_and(|obs| obs.x - front <= LOOKAHEAD)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::engine::Engine;
    use crate::sim::spawn::spawn_obstacle;

    #[test]
    fn test_waits_for_obstacle() {
        let mut state = GameState::running();
        assert!(!should_jump(&state));

        state.obstacles.push(spawn_obstacle(50.0));
        assert!(!should_jump(&state));

        state.obstacles[0].x = PLAYER_X + PLAYER_WIDTH + LOOKAHEAD;
        assert!(should_jump(&state));
    }

    #[test]
    fn test_ignores_passed_obstacles() {
        let mut state = GameState::running();
        let mut passed = spawn_obstacle(50.0);
        passed.x = PLAYER_X - OBSTACLE_WIDTH;
        let far = spawn_obstacle(50.0);
        state.obstacles = vec![passed, far];
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_no_jump_mid_air_or_inactive() {
        let mut state = GameState::running();
        let mut near = spawn_obstacle(50.0);
        near.x = PLAYER_X + PLAYER_WIDTH + 10.0;
        state.obstacles.push(near);

        state.player_y = GROUND_Y - 50.0;
        assert!(!should_jump(&state));

        state.player_y = GROUND_Y;
        state.game_over = true;
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_autopilot_survives_past_reveal() {
        let mut engine = Engine::new(4242);
        engine.start();
        for _ in 0..1000 {
            if should_jump(engine.state()) {
                engine.jump();
            }
            if engine.tick().is_collision() {
                break;
            }
        }
        assert!(!engine.state().game_over, "crashed at score {}", engine.state().score);
        assert_eq!(engine.state().secret_code.as_deref(), Some(SECRET_CODE));
    }
}
