//! Screen size resource.
//!
//! Stores the output surface dimensions in pixels. The background systems
//! read it for horizontal wrap-around.

use bevy_ecs::prelude::Resource;

/// Current screen size in pixels.
#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
