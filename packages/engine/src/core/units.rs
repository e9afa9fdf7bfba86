//! UnitConverter - simulation units <-> screen pixels
//!
//! One linear scale for both axes. No offset, no rotation: the simulation
//! origin is the top-left corner of the viewport and +Y points down.

use crate::rigid_body::{Size, Vec2};

/// Screen pixels per simulation unit.
pub const SCALE: f32 = 100.0;

#[inline]
pub fn to_screen(sim: f32) -> f32 {
    sim * SCALE
}

#[inline]
pub fn to_sim(screen: f32) -> f32 {
    screen / SCALE
}

#[inline]
pub fn point_to_screen(p: Vec2) -> Vec2 {
    Vec2::new(to_screen(p.x), to_screen(p.y))
}

#[inline]
pub fn point_to_sim(p: Vec2) -> Vec2 {
    Vec2::new(to_sim(p.x), to_sim(p.y))
}

#[inline]
pub fn size_to_screen(s: Size) -> Size {
    Size::new(to_screen(s.width), to_screen(s.height))
}
