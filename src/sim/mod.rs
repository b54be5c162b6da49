//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed constants
//! - Randomness only through an injected `HeightSource`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod driver;
pub mod engine;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, first_hit};
pub use driver::{FrameDriver, FrameReport};
pub use engine::Engine;
pub use spawn::{HeightSource, SeededHeights, needs_spawn, spawn_obstacle};
pub use state::{GameState, Obstacle};
pub use tick::{TickOutcome, tick};
