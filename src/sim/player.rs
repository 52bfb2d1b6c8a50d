//! Player physics
//!
//! The player block never moves horizontally; the only simulated axis is
//! vertical velocity under a sign-flippable gravity constant.

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;

/// Signed gravity multiplier: `Down` accelerates toward the floor,
/// `Up` toward the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GravityDir {
    #[default]
    Down,
    Up,
}

impl GravityDir {
    #[inline]
    pub fn signum(self) -> f32 {
        match self {
            GravityDir::Down => 1.0,
            GravityDir::Up => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            GravityDir::Down => GravityDir::Up,
            GravityDir::Up => GravityDir::Down,
        }
    }
}

/// The player block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Vertical position (top edge)
    pub y: f32,
    /// Vertical velocity
    pub vy: f32,
    /// Current gravity direction
    pub gravity: GravityDir,
}

impl Player {
    pub fn new(bounds_height: f32) -> Self {
        Self {
            y: bounds_height / 2.0,
            vy: 0.0,
            gravity: GravityDir::Down,
        }
    }

    /// Advance one tick of vertical physics, then clamp to the playfield.
    ///
    /// Floor and ceiling are inert walls: clamping zeroes velocity but never
    /// ends the run.
    pub fn integrate(&mut self, bounds_height: f32) {
        self.vy += GRAVITY_FORCE * self.gravity.signum();
        self.y += self.vy;

        if self.y < 0.0 {
            self.y = 0.0;
            self.vy = 0.0;
        } else if self.y + PLAYER_SIZE > bounds_height {
            self.y = bounds_height - PLAYER_SIZE;
            self.vy = 0.0;
        }
    }

    /// Toggle the gravity direction. Velocity is untouched, so momentum
    /// carries across the flip; the new sign applies from the next
    /// integration step.
    pub fn flip(&mut self) {
        self.gravity = self.gravity.flipped();
    }

    /// Collision footprint
    pub fn rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_SIZE, PLAYER_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integrate_accelerates_down() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.integrate(BOUNDS_HEIGHT);
        assert_eq!(player.vy, GRAVITY_FORCE);
        assert_eq!(player.y, BOUNDS_HEIGHT / 2.0 + GRAVITY_FORCE);
    }

    #[test]
    fn test_integrate_accelerates_up_after_flip() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.flip();
        player.integrate(BOUNDS_HEIGHT);
        assert_eq!(player.vy, -GRAVITY_FORCE);
    }

    #[test]
    fn test_flip_preserves_velocity() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.vy = 4.2;
        player.flip();
        assert_eq!(player.gravity, GravityDir::Up);
        assert_eq!(player.vy, 4.2);
    }

    #[test]
    fn test_flip_twice_restores_direction() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.flip();
        player.flip();
        assert_eq!(player.gravity, GravityDir::Down);
    }

    #[test]
    fn test_floor_clamp_zeroes_velocity() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.y = BOUNDS_HEIGHT - PLAYER_SIZE - 1.0;
        player.vy = 50.0;
        player.integrate(BOUNDS_HEIGHT);
        assert_eq!(player.y, BOUNDS_HEIGHT - PLAYER_SIZE);
        assert_eq!(player.vy, 0.0);
    }

    #[test]
    fn test_ceiling_clamp_zeroes_velocity() {
        let mut player = Player::new(BOUNDS_HEIGHT);
        player.gravity = GravityDir::Up;
        player.y = 1.0;
        player.vy = -50.0;
        player.integrate(BOUNDS_HEIGHT);
        assert_eq!(player.y, 0.0);
        assert_eq!(player.vy, 0.0);
    }
}
