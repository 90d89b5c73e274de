//! Procedural sprite generation
//!
//! Pure, stateless shape functions: given a logical size, color, and shape
//! hint, they emit the triangles for a drawable placeholder that
//! approximates the object (car silhouette, money note, equipment crate).
//! No external image assets are loaded; these placeholders are the
//! fallback visuals the game ships with.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};

/// Shape hint for sprite resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteShape {
    Plain,
    Car,
    Money,
    Equipment,
}

/// Resolve a sprite: emit the placeholder for `shape` at `pos` with the
/// given size and color
pub fn sprite(out: &mut Vec<Vertex>, shape: SpriteShape, pos: Vec2, size: Vec2, color: [f32; 4]) {
    match shape {
        SpriteShape::Plain => rect(out, pos, size, color),
        SpriteShape::Car => car(out, pos, size, color),
        SpriteShape::Money => money_note(out, pos, size, color),
        SpriteShape::Equipment => equipment_crate(out, pos, size, color),
    }
}

/// Emit a filled axis-aligned rectangle (two triangles)
pub fn rect(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);

    out.push(Vertex::new(x0, y0, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x0, y1, color));

    out.push(Vertex::new(x0, y1, color));
    out.push(Vertex::new(x1, y0, color));
    out.push(Vertex::new(x1, y1, color));
}

/// Emit a filled circle as a triangle fan
pub fn circle(out: &mut Vec<Vertex>, center: Vec2, radius: f32, color: [f32; 4], segments: u32) {
    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        out.push(Vertex::new(center.x, center.y, color));
        out.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        out.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }
}

/// Emit a thick line segment as a quad
pub fn line(out: &mut Vec<Vertex>, from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) {
    let dir = (to - from).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    out.push(Vertex::new(a.x, a.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(c.x, c.y, color));

    out.push(Vertex::new(c.x, c.y, color));
    out.push(Vertex::new(b.x, b.y, color));
    out.push(Vertex::new(d.x, d.y, color));
}

/// Car silhouette: body, roof, two wheels
fn car(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let body_pos = pos + Vec2::new(0.0, size.y * 0.3);
    let body_size = Vec2::new(size.x, size.y * 0.55);
    rect(out, body_pos, body_size, color);

    let roof_pos = pos + Vec2::new(size.x * 0.2, size.y * 0.05);
    let roof_size = Vec2::new(size.x * 0.6, size.y * 0.35);
    rect(out, roof_pos, roof_size, color);

    let wheel_radius = (size.x / 8.0).max(2.0);
    let wheel_y = pos.y + size.y * 0.9;
    circle(
        out,
        Vec2::new(pos.x + size.x * 0.25, wheel_y),
        wheel_radius,
        colors::OUTLINE,
        12,
    );
    circle(
        out,
        Vec2::new(pos.x + size.x * 0.75, wheel_y),
        wheel_radius,
        colors::OUTLINE,
        12,
    );
}

/// Money note: filled rectangle with a dark border
fn money_note(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    let border = 2.0;
    rect(out, pos, size, colors::OUTLINE);
    rect(
        out,
        pos + Vec2::splat(border),
        size - Vec2::splat(border * 2.0),
        color,
    );
}

/// Equipment crate: filled rectangle with a diagonal cross
fn equipment_crate(out: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: [f32; 4]) {
    rect(out, pos, size, color);
    line(out, pos, pos + size, 2.0, colors::OUTLINE);
    line(
        out,
        pos + Vec2::new(size.x, 0.0),
        pos + Vec2::new(0.0, size.y),
        2.0,
        colors::OUTLINE,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_emits_two_triangles() {
        let mut out = Vec::new();
        rect(&mut out, Vec2::ZERO, Vec2::new(10.0, 20.0), [1.0; 4]);
        assert_eq!(out.len(), 6);
        // Corners covered
        assert!(out.iter().any(|v| v.position == [0.0, 0.0]));
        assert!(out.iter().any(|v| v.position == [10.0, 20.0]));
    }

    #[test]
    fn test_circle_vertex_count() {
        let mut out = Vec::new();
        circle(&mut out, Vec2::ZERO, 5.0, [1.0; 4], 16);
        assert_eq!(out.len(), 16 * 3);
    }

    #[test]
    fn test_sprite_dispatch_nonempty() {
        for shape in [
            SpriteShape::Plain,
            SpriteShape::Car,
            SpriteShape::Money,
            SpriteShape::Equipment,
        ] {
            let mut out = Vec::new();
            sprite(&mut out, shape, Vec2::ZERO, Vec2::new(40.0, 60.0), [1.0; 4]);
            assert!(!out.is_empty(), "{shape:?} emitted no vertices");
            assert_eq!(out.len() % 3, 0, "{shape:?} emitted partial triangles");
        }
    }
}
