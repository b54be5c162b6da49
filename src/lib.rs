//! Jump Runner - A side-scrolling jump game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `hud`: DOM overlay visibility and tap handling
//! - `settings`: Player preferences (key bindings, HUD)

pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{Engine, GameState, Obstacle};

/// Game configuration constants
///
/// Scene coordinates have their origin at the top-left corner with y pointing
/// down, so an upward jump is a negative velocity.
pub mod consts {
    /// Nominal tick period (ticks are one per animation frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum ticks per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Scene dimensions
    pub const SCENE_WIDTH: f32 = 800.0;
    pub const SCENE_HEIGHT: f32 = 400.0;

    /// Player box - x never changes, only y
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;

    /// Largest player_y: the player box resting on the ground
    pub const GROUND_Y: f32 = 320.0;
    /// The ground surface that obstacles stand on
    pub const GROUND_LINE: f32 = GROUND_Y + PLAYER_HEIGHT;

    /// Physics (per tick)
    pub const GRAVITY: f32 = 0.8;
    pub const JUMP_IMPULSE: f32 = -15.0;
    pub const GAME_SPEED: f32 = 5.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 30.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 70.0;
    pub const OBSTACLE_SPAWN_X: f32 = SCENE_WIDTH;
    /// A new obstacle spawns once the newest one has scrolled left of this
    pub const SPAWN_THRESHOLD: f32 = 500.0;

    /// Easter egg
    pub const REVEAL_SCORE: u32 = 100;
    pub const SECRET_CODE: &str = "HOP-HOP-HOORAY";
}
