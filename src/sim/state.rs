//! Game state and the run state machine
//!
//! [`Simulation`] owns every mutable piece of gameplay state; the outside
//! world observes it only through [`Snapshot`]s and [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::{GravityDir, Player};
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting at the start screen (initial, also post-reset)
    #[default]
    Inactive,
    /// Run in progress
    Active,
    /// Run ended by collision; terminal until start or reset
    GameOver,
}

/// Terminal notification emitted by the state machine, exactly once per
/// Active -> GameOver transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameOver { score: u64 },
}

/// Read-only scene view handed to the renderer and HUD
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub gravity_direction: GravityDir,
    pub score: u64,
    pub phase: GamePhase,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Run seed for reproducibility
    seed: u64,
    /// Spawn RNG, reseeded on reset
    pub(super) rng: Pcg32,
    /// Playfield dimensions
    pub(super) bounds: Vec2,
    pub phase: GamePhase,
    /// Ticks elapsed in the current run
    pub frame_count: u32,
    pub score: u64,
    pub player: Player,
    /// Live obstacles in spawn order
    pub obstacles: Vec<Obstacle>,
}

impl Simulation {
    /// Create a fresh Inactive simulation with the default playfield
    pub fn new(seed: u64) -> Self {
        Self::with_bounds(seed, Vec2::new(BOUNDS_WIDTH, BOUNDS_HEIGHT))
    }

    pub fn with_bounds(seed: u64, bounds: Vec2) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            phase: GamePhase::Inactive,
            frame_count: 0,
            score: 0,
            player: Player::new(bounds.y),
            obstacles: Vec::new(),
        }
    }

    #[inline]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Begin a run. Valid from Inactive or GameOver; ignored while Active.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Active {
            return;
        }
        self.player = Player::new(self.bounds.y);
        self.obstacles.clear();
        self.frame_count = 0;
        self.score = 0;
        self.phase = GamePhase::Active;
        log::info!("Run started (seed {})", self.seed);
    }

    /// Return to a fresh Inactive simulation. Valid from any state;
    /// does not auto-start.
    pub fn reset(&mut self) {
        *self = Self::with_bounds(self.seed, self.bounds);
    }

    /// Gravity flip input. Live only while Active; silently discarded
    /// otherwise.
    pub fn flip_gravity(&mut self) {
        if self.phase == GamePhase::Active {
            self.player.flip();
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            obstacles: &self.obstacles,
            gravity_direction: self.player.gravity,
            score: self.score,
            phase: self.phase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_simulation_is_inactive() {
        let sim = Simulation::new(1);
        assert_eq!(sim.phase, GamePhase::Inactive);
        assert_eq!(sim.frame_count, 0);
        assert_eq!(sim.score, 0);
        assert!(sim.obstacles.is_empty());
    }

    #[test]
    fn test_start_transitions_to_active() {
        let mut sim = Simulation::new(1);
        sim.start();
        assert_eq!(sim.phase, GamePhase::Active);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut sim = Simulation::new(1);
        sim.start();
        sim.flip_gravity();
        for _ in 0..120 {
            sim.tick();
        }
        sim.reset();

        assert_eq!(sim.phase, GamePhase::Inactive);
        assert_eq!(sim.frame_count, 0);
        assert_eq!(sim.score, 0);
        assert_eq!(sim.player.gravity, GravityDir::Down);
        assert_eq!(sim.player.y, BOUNDS_HEIGHT / 2.0);
        assert_eq!(sim.player.vy, 0.0);
        assert!(sim.obstacles.is_empty());
    }

    #[test]
    fn test_flip_discarded_unless_active() {
        let mut sim = Simulation::new(1);
        sim.flip_gravity();
        assert_eq!(sim.player.gravity, GravityDir::Down);

        sim.start();
        sim.flip_gravity();
        assert_eq!(sim.player.gravity, GravityDir::Up);
        sim.flip_gravity();
        assert_eq!(sim.player.gravity, GravityDir::Down);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut sim = Simulation::new(1);
        sim.start();
        sim.flip_gravity();
        sim.tick();

        let snapshot = sim.snapshot();
        assert_eq!(snapshot.phase, GamePhase::Active);
        assert_eq!(snapshot.gravity_direction, GravityDir::Up);
        assert_eq!(snapshot.score, sim.score);
        assert_eq!(snapshot.obstacles.len(), sim.obstacles.len());
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = Simulation::new(777);
        let mut b = Simulation::new(777);
        a.start();
        b.start();
        for _ in 0..200 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.frame_count, b.frame_count);
        assert_eq!(a.obstacles.len(), b.obstacles.len());
        for (oa, ob) in a.obstacles.iter().zip(&b.obstacles) {
            assert_eq!(oa.x, ob.x);
            assert_eq!(oa.height, ob.height);
            assert_eq!(oa.edge, ob.edge);
        }
    }
}
