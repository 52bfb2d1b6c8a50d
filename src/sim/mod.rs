//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, fixed integration constants
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod obstacle;
pub mod player;
pub mod rect;
pub mod state;
pub mod tick;

pub use obstacle::{Edge, Obstacle, advance, prune};
pub use player::{GravityDir, Player};
pub use rect::{Rect, overlaps};
pub use state::{GameEvent, GamePhase, Simulation, Snapshot};
pub use tick::{TickInput, run_frame};
