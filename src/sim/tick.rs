//! Frame advancement
//!
//! The scheduler calls [`run_frame`] exactly once per animation frame:
//! pending input commands are applied between ticks, then the state machine
//! advances one deterministic step.

use super::obstacle::{self, Obstacle};
use super::rect::overlaps;
use super::state::{GameEvent, GamePhase, Simulation};
use crate::consts::*;

/// Input commands gathered since the previous frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Flip gravity (space / pointer press)
    pub flip: bool,
    /// Begin a run
    pub start: bool,
    /// Return to the start screen
    pub reset: bool,
}

impl Simulation {
    /// Advance one frame. No-op unless Active.
    ///
    /// Returns the game-over event on the tick that detects a collision;
    /// every other tick returns `None`.
    pub fn tick(&mut self) -> Option<GameEvent> {
        if self.phase != GamePhase::Active {
            return None;
        }

        self.frame_count += 1;
        if self.frame_count % SCORE_INTERVAL_TICKS == 0 {
            self.score += 1;
        }

        let bounds = self.bounds;
        self.player.integrate(bounds.y);

        if self.frame_count % SPAWN_INTERVAL_TICKS == 0 {
            let spawned = Obstacle::spawn(&mut self.rng, bounds);
            self.obstacles.push(spawned);
        }

        obstacle::advance(&mut self.obstacles, OBSTACLE_SPEED);

        // Collision runs against the pre-prune set so an obstacle still
        // counts on its last visible frame.
        let player_rect = self.player.rect();
        let hit = self
            .obstacles
            .iter()
            .any(|o| overlaps(&player_rect, &o.rect()));
        obstacle::prune(&mut self.obstacles);

        if hit {
            self.phase = GamePhase::GameOver;
            log::info!(
                "Game over at frame {} with score {}",
                self.frame_count,
                self.score
            );
            return Some(GameEvent::GameOver { score: self.score });
        }
        None
    }
}

/// Apply pending input commands, then advance one frame.
///
/// Commands land between ticks: reset first, then start, then flip.
pub fn run_frame(sim: &mut Simulation, input: &TickInput) -> Option<GameEvent> {
    if input.reset {
        sim.reset();
    }
    if input.start {
        sim.start();
    }
    if input.flip {
        sim.flip_gravity();
    }
    sim.tick()
}
