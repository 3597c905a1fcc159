//! Axis-aligned collision tests
//!
//! Projectiles are zero-size points; ships and invaders are boxes centered
//! on their position. The point test is edge-inclusive, the box-pair test
//! strict, matching the simulation's hit rules.

use glam::Vec2;

/// Zero-size projectile vs centered box (edges count as hits)
pub fn point_in_box(point: Vec2, center: Vec2, width: f32, height: f32) -> bool {
    point.x >= center.x - width / 2.0
        && point.x <= center.x + width / 2.0
        && point.y >= center.y - height / 2.0
        && point.y <= center.y + height / 2.0
}

/// Centered box vs centered box (touching edges do not overlap)
pub fn boxes_overlap(
    a_center: Vec2,
    a_width: f32,
    a_height: f32,
    b_center: Vec2,
    b_width: f32,
    b_height: f32,
) -> bool {
    a_center.x + a_width / 2.0 > b_center.x - b_width / 2.0
        && a_center.x - a_width / 2.0 < b_center.x + b_width / 2.0
        && a_center.y + a_height / 2.0 > b_center.y - b_height / 2.0
        && a_center.y - a_height / 2.0 < b_center.y + b_height / 2.0
}
