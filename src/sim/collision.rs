//! Axis-aligned rectangle geometry
//!
//! All entities in the game (car, obstacles, buildings, UI controls) are
//! axis-aligned boxes in screen space, with y growing downward.

use glam::Vec2;

/// An axis-aligned rectangle: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Standard AABB overlap test. Touching edges do not count as overlap,
    /// so a spawned obstacle at y = -height never collides before entering
    /// the screen.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Same rect shifted by `offset`
    pub fn offset(&self, offset: Vec2) -> Rect {
        Rect {
            pos: self.pos + offset,
            size: self.size,
        }
    }
}

/// Clamp a car's left edge so the whole car stays on the road
#[inline]
pub fn clamp_to_road(x: f32, width: f32) -> f32 {
    use crate::consts::{ROAD_LEFT, ROAD_RIGHT};
    x.clamp(ROAD_LEFT, ROAD_RIGHT - width)
}
