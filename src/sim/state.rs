//! Game state and core simulation types
//!
//! All mutable simulation state lives here, owned by the loop driver and
//! handed read-only to the renderer. Determinism rules:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Elapsed time accumulated from dt, never read from a wall clock

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawn::spawn_obstacle;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Crash animation hold after a fatal hazard collision
    Crashing,
    /// Run ended; waits for an explicit reset
    GameOver,
}

/// Obstacle kinds; `RivalCar` is the hazard class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    RivalCar,
    MoneySmall,
    MoneyLarge,
    Equipment,
}

impl ObstacleKind {
    /// Whether colliding with this kind can end the run
    #[inline]
    pub fn is_hazard(&self) -> bool {
        matches!(self, ObstacleKind::RivalCar)
    }
}

/// A scrolling obstacle
#[derive(Debug, Clone)]
pub struct Obstacle {
    pub id: u32,
    pub kind: ObstacleKind,
    /// Top-left corner; y increases each tick
    pub pos: Vec2,
    pub size: Vec2,
    /// Applied to money on collision (may be negative)
    pub money: i32,
    /// Applied to equipment on collision (never negative)
    pub equipment: u32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// The player's car: horizontal position on a fixed vertical line
#[derive(Debug, Clone)]
pub struct PlayerCar {
    /// Left edge, clamped to road bounds
    pub x: f32,
}

impl Default for PlayerCar {
    fn default() -> Self {
        Self {
            // Centered on the road
            x: ROAD_LEFT + ROAD_WIDTH / 2.0 - CAR_WIDTH / 2.0,
        }
    }
}

impl PlayerCar {
    /// Small sinusoidal vertical offset simulating engine bounce
    #[inline]
    pub fn bounce_offset(elapsed: f32) -> f32 {
        (elapsed * BOUNCE_RATE).sin() * BOUNCE_AMPLITUDE
    }

    /// Collision box at a given session time (includes the bounce offset)
    pub fn collision_rect(&self, elapsed: f32) -> Rect {
        Rect::new(
            self.x,
            CAR_Y + Self::bounce_offset(elapsed),
            CAR_WIDTH,
            CAR_HEIGHT,
        )
    }
}

/// Score counters, mutated only by collision resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    /// May go negative; a hazard hit that drives this negative ends the run
    pub money: i32,
    /// Monotonically non-decreasing
    pub equipment: u32,
}

/// Roadside scenery, pre-generated per run (render-only)
#[derive(Debug, Clone)]
pub struct Building {
    pub rect: Rect,
}

/// Complete game state (deterministic under a fixed seed)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG driving spawning and scenery
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Player car
    pub player: PlayerCar,
    /// Active obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Score counters
    pub score: ScoreState,
    /// Session seconds since the last reset (advances only while Playing)
    pub elapsed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds accumulated since the last spawn
    pub spawn_timer: f32,
    /// Ticks spent in the Crashing phase
    pub crash_ticks: u32,
    /// Center of the obstacle that ended the run, for the crash burst
    pub crash_pos: Option<Vec2>,
    /// Buildings lining both sidewalks
    pub buildings: Vec<Building>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let buildings = generate_buildings(&mut rng);
        Self {
            seed,
            rng,
            phase: GamePhase::Playing,
            player: PlayerCar::default(),
            obstacles: Vec::new(),
            score: ScoreState::default(),
            elapsed: 0.0,
            time_ticks: 0,
            spawn_timer: 0.0,
            crash_ticks: 0,
            crash_pos: None,
            buildings,
            next_id: 1,
        }
    }

    /// Reinitialize everything to startup values from the stored seed.
    ///
    /// Only honored by `tick` while the phase is GameOver; the platform
    /// layer may instead build a fresh `GameState` with a new seed.
    pub fn reset(&mut self) {
        *self = GameState::new(self.seed);
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn one obstacle and append it
    pub fn spawn(&mut self) {
        let id = self.next_entity_id();
        let obstacle = spawn_obstacle(&mut self.rng, id);
        self.obstacles.push(obstacle);
    }

    /// Current obstacle scroll speed in px/s: base plus a linear ramp in
    /// elapsed session seconds, so difficulty is frame-rate independent
    #[inline]
    pub fn scroll_speed(&self) -> f32 {
        BASE_SCROLL_SPEED + self.elapsed * SCROLL_RAMP
    }
}

/// Fill both sidewalks with buildings of random height with 20 px gaps
fn generate_buildings(rng: &mut Pcg32) -> Vec<Building> {
    let mut buildings = Vec::new();
    for side in [0.0, SCREEN_WIDTH - SIDEWALK_WIDTH] {
        let mut y = 0.0;
        while y < SCREEN_HEIGHT {
            let height = rng.random_range(60.0..=150.0);
            buildings.push(Building {
                rect: Rect::new(side, y, SIDEWALK_WIDTH, height),
            });
            y += height + 20.0;
        }
    }
    buildings
}
