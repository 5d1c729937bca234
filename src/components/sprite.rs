use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Sprite is identified by a texture key, a source rectangle read from that
/// texture and a destination size drawn to the output surface.
///
/// `offset` selects the top-left of the source rectangle; the animation
/// systems rewrite it (and for variable-frame sheets, `width`/`height` too)
/// each tick to display the current frame. `use_width`/`use_height` are the
/// on-screen size and double as the collision box size for entities that
/// collide.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub offset: Vec2,
    pub width: f32,
    pub height: f32,
    pub use_width: f32,
    pub use_height: f32,
    pub alpha: f32,
    pub visible: bool,
}

impl Sprite {
    /// Create a sprite drawn at its source size, fully opaque and visible.
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            offset: Vec2::ZERO,
            width,
            height,
            use_width: width,
            use_height: height,
            alpha: 1.0,
            visible: true,
        }
    }

    /// Override the on-screen size.
    pub fn with_use_size(mut self, use_width: f32, use_height: f32) -> Self {
        self.use_width = use_width;
        self.use_height = use_height;
        self
    }

    /// Select a different source rectangle origin.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}
