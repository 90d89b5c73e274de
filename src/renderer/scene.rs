//! Scene assembly
//!
//! Converts a `GameState` into a flat vertex list each frame. Read-only
//! over the state; draw order is back to front.

use glam::Vec2;

use super::shapes::{self, SpriteShape};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::sim::{GamePhase, GameState, ObstacleKind, PlayerCar, Rect};

/// Restart control, hit-tested against pointer clicks while GameOver
pub const RESTART_BUTTON: Rect = Rect::new(
    SCREEN_WIDTH / 2.0 - 60.0,
    SCREEN_HEIGHT / 2.0 + 40.0,
    120.0,
    40.0,
);

fn obstacle_visual(kind: ObstacleKind) -> (SpriteShape, [f32; 4]) {
    match kind {
        ObstacleKind::RivalCar => (SpriteShape::Car, colors::RIVAL_CAR),
        ObstacleKind::MoneySmall | ObstacleKind::MoneyLarge => {
            (SpriteShape::Money, colors::MONEY)
        }
        ObstacleKind::Equipment => (SpriteShape::Equipment, colors::EQUIPMENT),
    }
}

/// Build the vertex list for one frame.
///
/// `reduced_motion` suppresses the visual bounce and the crash burst; the
/// simulation is unaffected.
pub fn build_scene(state: &GameState, reduced_motion: bool) -> Vec<Vertex> {
    let mut out = Vec::with_capacity(1024);

    // Sidewalks
    shapes::rect(
        &mut out,
        Vec2::ZERO,
        Vec2::new(SIDEWALK_WIDTH, SCREEN_HEIGHT),
        colors::SIDEWALK,
    );
    shapes::rect(
        &mut out,
        Vec2::new(SCREEN_WIDTH - SIDEWALK_WIDTH, 0.0),
        Vec2::new(SIDEWALK_WIDTH, SCREEN_HEIGHT),
        colors::SIDEWALK,
    );

    // Buildings
    for building in &state.buildings {
        shapes::rect(
            &mut out,
            building.rect.pos,
            building.rect.size,
            colors::BUILDING,
        );
    }

    // Road and lane lines
    shapes::rect(
        &mut out,
        Vec2::new(ROAD_LEFT, 0.0),
        Vec2::new(ROAD_WIDTH, SCREEN_HEIGHT),
        colors::ROAD,
    );
    for i in 1..LANE_COUNT {
        let x = ROAD_LEFT + i as f32 * LANE_WIDTH;
        shapes::line(
            &mut out,
            Vec2::new(x, 0.0),
            Vec2::new(x, SCREEN_HEIGHT),
            2.0,
            colors::LANE_LINE,
        );
    }

    // Obstacles
    for obstacle in &state.obstacles {
        let (shape, color) = obstacle_visual(obstacle.kind);
        shapes::sprite(&mut out, shape, obstacle.pos, obstacle.size, color);
    }

    // Player car, bouncing unless reduced motion is on
    let bounce = if reduced_motion {
        0.0
    } else {
        PlayerCar::bounce_offset(state.elapsed)
    };
    shapes::sprite(
        &mut out,
        SpriteShape::Car,
        Vec2::new(state.player.x, CAR_Y + bounce),
        Vec2::new(CAR_WIDTH, CAR_HEIGHT),
        colors::PLAYER_CAR,
    );

    // Crash burst: a circle expanding over the hold window
    if state.phase != GamePhase::Playing && !reduced_motion {
        if let Some(pos) = state.crash_pos {
            let t = (state.crash_ticks as f32 / CRASH_HOLD_TICKS as f32).min(1.0);
            let radius = 10.0 + t * 50.0;
            shapes::circle(&mut out, pos, radius, colors::CRASH_BURST, 24);
        }
    }

    // Game over overlay and restart control
    if state.phase == GamePhase::GameOver {
        shapes::rect(
            &mut out,
            Vec2::ZERO,
            Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            colors::GAME_OVER_DIM,
        );
        shapes::rect(
            &mut out,
            RESTART_BUTTON.pos,
            RESTART_BUTTON.size,
            colors::RESTART_BUTTON,
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_scene_nonempty_in_all_phases() {
        let mut state = GameState::new(5);
        assert!(!build_scene(&state, false).is_empty());

        state.phase = GamePhase::Crashing;
        state.crash_pos = Some(Vec2::new(200.0, 400.0));
        assert!(!build_scene(&state, false).is_empty());

        state.phase = GamePhase::GameOver;
        let over = build_scene(&state, false);
        // Overlay adds vertices beyond the crashing scene
        assert!(over.len() > build_scene(&GameState::new(5), false).len());
    }

    #[test]
    fn test_scene_triangle_aligned() {
        let mut state = GameState::new(5);
        for _ in 0..600 {
            tick(&mut state, &TickInput::default(), SIM_DT);
        }
        let scene = build_scene(&state, false);
        assert_eq!(scene.len() % 3, 0);
    }

    #[test]
    fn test_restart_button_on_screen() {
        assert!(RESTART_BUTTON.left() >= 0.0);
        assert!(RESTART_BUTTON.right() <= SCREEN_WIDTH);
        assert!(RESTART_BUTTON.bottom() <= SCREEN_HEIGHT);
    }
}
