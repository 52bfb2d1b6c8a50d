//! Gravity Flip - a gravity-flipping dodge arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacles, game state)
//! - `renderer`: Canvas-2D scene drawing
//! - `scores`: High score sync through an injected store
//! - `commentary`: Game-over commentary client
//! - `settings`: Player preferences

pub mod commentary;
#[cfg(target_arch = "wasm32")]
pub mod renderer;
pub mod scores;
pub mod settings;
pub mod sim;

pub use scores::ScoreBoard;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (CSS pixels)
    pub const BOUNDS_WIDTH: f32 = 800.0;
    pub const BOUNDS_HEIGHT: f32 = 450.0;

    /// Gravity acceleration per tick, scaled by the current direction sign
    pub const GRAVITY_FORCE: f32 = 0.6;

    /// Horizontal obstacle scroll speed (units per tick)
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Ticks between obstacle spawns
    pub const SPAWN_INTERVAL_TICKS: u32 = 90;
    /// Active ticks per score point
    pub const SCORE_INTERVAL_TICKS: u32 = 10;

    /// Player block - fixed horizontal position, square footprint
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_SIZE: f32 = 30.0;

    /// Obstacle defaults - height is drawn from [min, max)
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_MIN_HEIGHT: f32 = 40.0;
    pub const OBSTACLE_MAX_HEIGHT: f32 = 100.0;
}
