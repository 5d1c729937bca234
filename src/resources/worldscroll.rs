//! Per-tick world scroll delta.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Scroll delta the host supplies for the current tick.
///
/// Backgrounds and background-carried sprites consume it; the runtime never
/// changes it on its own.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WorldScroll {
    pub delta: Vec2,
}

impl WorldScroll {
    pub fn new(dx: f32, dy: f32) -> Self {
        Self {
            delta: Vec2::new(dx, dy),
        }
    }
}
