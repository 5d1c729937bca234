//! Kinematic body component storing velocity.
//!
//! The [`RigidBody`] component stores a velocity for an entity. The runtime
//! never integrates it into position; host code reads the stored velocity,
//! validates the intended move with the collider lookahead tests, and commits
//! the position itself.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Stored velocity in pixels per tick, applied by the host.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct RigidBody {
    pub velocity: Vec2,
}

impl RigidBody {
    pub fn new() -> Self {
        Self {
            velocity: Vec2::ZERO,
        }
    }

    pub fn with_velocity(dx: f32, dy: f32) -> Self {
        Self {
            velocity: Vec2::new(dx, dy),
        }
    }

    /// Set the velocity of the RigidBody.
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    /// Translate the RigidBody velocity by a delta vector.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.velocity.x += dx;
        self.velocity.y += dy;
    }
}
