//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, clamp_to_road};
pub use spawn::{ObstacleTemplate, TEMPLATES, spawn_obstacle};
pub use state::{
    Building, GamePhase, GameState, Obstacle, ObstacleKind, PlayerCar, ScoreState,
};
pub use tick::{TickInput, tick};
