//! Obstacle lifecycle: spawn, advance, prune
//!
//! Spikes spawn just past the right boundary, scroll left at a constant
//! speed, and are dropped once fully off the left edge. Spawn cadence is
//! owned by the simulation core; this module only constructs and moves
//! entities.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Which boundary a spike grows from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Bottom,
}

/// A spike obstacle scrolling right-to-left
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub edge: Edge,
}

impl Obstacle {
    /// Construct one obstacle at the right boundary: uniformly random edge,
    /// height drawn uniformly from `[OBSTACLE_MIN_HEIGHT, OBSTACLE_MAX_HEIGHT)`.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, bounds: Vec2) -> Self {
        let edge = if rng.random_bool(0.5) {
            Edge::Top
        } else {
            Edge::Bottom
        };
        let height = rng.random_range(OBSTACLE_MIN_HEIGHT..OBSTACLE_MAX_HEIGHT);
        let y = match edge {
            Edge::Top => 0.0,
            Edge::Bottom => bounds.y - height,
        };

        Self {
            x: bounds.x,
            y,
            width: OBSTACLE_WIDTH,
            height,
            edge,
        }
    }

    /// Collision footprint
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Fully left of the playfield
    #[inline]
    pub fn offscreen(&self) -> bool {
        self.x + self.width < 0.0
    }
}

/// Scroll every obstacle left by `speed`. Order-preserving.
pub fn advance(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles {
        obstacle.x -= speed;
    }
}

/// Drop obstacles that have fully left the playfield.
pub fn prune(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|o| !o.offscreen());
}
