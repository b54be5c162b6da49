//! Obstacle spawning
//!
//! Spawning is distance-based: a new obstacle appears when the newest one has
//! scrolled past `SPAWN_THRESHOLD`, no matter how many ticks that took.
//! Heights are the only random input to the simulation and come from a
//! `HeightSource` so runs can be seeded or scripted.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::Obstacle;
use crate::consts::*;

/// Supplies the height of each newly spawned obstacle
pub trait HeightSource {
    fn next_height(&mut self) -> f32;
}

/// Any closure works as a height source (scripted runs, tests)
impl<F: FnMut() -> f32> HeightSource for F {
    fn next_height(&mut self) -> f32 {
        self()
    }
}

/// Seeded PCG height source - same seed, same obstacle course
#[derive(Debug, Clone)]
pub struct SeededHeights {
    seed: u64,
    rng: Pcg32,
}

impl SeededHeights {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl HeightSource for SeededHeights {
    fn next_height(&mut self) -> f32 {
        self.rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT)
    }
}

/// Whether the course needs another obstacle
pub fn needs_spawn(obstacles: &[Obstacle]) -> bool {
    match obstacles.last() {
        None => true,
        Some(last) => last.x < SPAWN_THRESHOLD,
    }
}

/// Build an obstacle at the spawn line with its base on the ground
pub fn spawn_obstacle(height: f32) -> Obstacle {
    let height = height.clamp(OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT);
    Obstacle {
        x: OBSTACLE_SPAWN_X,
        y: GROUND_LINE - height,
        width: OBSTACLE_WIDTH,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawned_obstacle_sits_on_ground() {
        let obs = spawn_obstacle(50.0);
        assert_eq!(obs.x, OBSTACLE_SPAWN_X);
        assert_eq!(obs.width, OBSTACLE_WIDTH);
        assert_eq!(obs.y + obs.height, GROUND_LINE);
    }

    #[test]
    fn test_height_clamped_into_range() {
        assert_eq!(spawn_obstacle(5.0).height, OBSTACLE_MIN_HEIGHT);
        assert_eq!(spawn_obstacle(500.0).height, OBSTACLE_MAX_HEIGHT);
    }

    #[test]
    fn test_needs_spawn() {
        assert!(needs_spawn(&[]));

        let mut obs = spawn_obstacle(40.0);
        assert!(!needs_spawn(&[obs]));

        obs.x = SPAWN_THRESHOLD;
        assert!(!needs_spawn(&[obs]));

        obs.x = SPAWN_THRESHOLD - 0.5;
        assert!(needs_spawn(&[obs]));
    }

    #[test]
    fn test_only_last_obstacle_counts() {
        let mut far_left = spawn_obstacle(40.0);
        far_left.x = 10.0;
        let fresh = spawn_obstacle(40.0);
        assert!(!needs_spawn(&[far_left, fresh]));
    }

    #[test]
    fn test_seeded_heights_deterministic_and_in_range() {
        let mut a = SeededHeights::new(7);
        let mut b = SeededHeights::new(7);
        for _ in 0..100 {
            let h = a.next_height();
            assert_eq!(h, b.next_height());
            assert!((OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT).contains(&h));
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_closure_source() {
        let mut next = 30.0;
        let mut source = || {
            next += 10.0;
            next
        };
        assert_eq!(source.next_height(), 40.0);
        assert_eq!(source.next_height(), 50.0);
    }
}
