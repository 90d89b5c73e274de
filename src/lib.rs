//! Rush Lane - a vertical-road lane dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, spawning, collisions, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `settings`: Player preferences
//! - `highscores`: Local leaderboard

pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical screen size (the road scene is designed in these units)
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Road layout
    pub const SIDEWALK_WIDTH: f32 = 50.0;
    pub const ROAD_LEFT: f32 = SIDEWALK_WIDTH;
    pub const ROAD_RIGHT: f32 = SCREEN_WIDTH - SIDEWALK_WIDTH;
    pub const ROAD_WIDTH: f32 = SCREEN_WIDTH - 2.0 * SIDEWALK_WIDTH;
    pub const LANE_COUNT: u32 = 4;
    pub const LANE_WIDTH: f32 = ROAD_WIDTH / LANE_COUNT as f32;

    /// Player car
    pub const CAR_WIDTH: f32 = 40.0;
    pub const CAR_HEIGHT: f32 = 60.0;
    pub const CAR_Y: f32 = SCREEN_HEIGHT - CAR_HEIGHT - 10.0;
    /// Steering speed in px/s
    pub const CAR_STEER_SPEED: f32 = 300.0;
    /// Visual bounce: offset = sin(elapsed * BOUNCE_RATE) * BOUNCE_AMPLITUDE
    pub const BOUNCE_RATE: f32 = 20.0;
    pub const BOUNCE_AMPLITUDE: f32 = 2.0;

    /// Obstacle scrolling
    pub const BASE_SCROLL_SPEED: f32 = 300.0;
    /// Scroll speed gain per elapsed session second (px/s per s)
    pub const SCROLL_RAMP: f32 = 6.0;
    /// Seconds between obstacle spawns
    pub const SPAWN_INTERVAL: f32 = 1.0;

    /// Ticks the crash animation holds before GameOver
    pub const CRASH_HOLD_TICKS: u32 = 30;
}
