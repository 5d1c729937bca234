//! Draw pass through the host renderer capability.
//!
//! Backgrounds draw first: the tile at its scrolled offset, then a ghost copy
//! one tile-dimension away in the direction of travel, which is what makes
//! the wrap seamless. Sprites follow, sorted by [`ZIndex`] (entities without
//! one draw at z 0), invisible sprites skipped, alpha passed through.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::background::ScrollingBackground;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::render::RenderSink;

/// Blit every visible background tile and sprite for this frame.
pub fn render_pass(
    backgrounds: Query<(&MapPosition, &Sprite, &ScrollingBackground)>,
    sprites: Query<(&MapPosition, &Sprite, Option<&ZIndex>), Without<ScrollingBackground>>,
    mut sink: NonSendMut<RenderSink>,
) {
    for (position, sprite, bg) in backgrounds.iter() {
        if !sprite.visible {
            continue;
        }
        let primary = position.pos + bg.offset;
        blit_sprite(&mut *sink, sprite, primary);
        let ghost = bg.ghost_offset();
        // Right after a reset the ghost coincides with the primary tile.
        if ghost != Vec2::ZERO {
            blit_sprite(&mut *sink, sprite, primary + ghost);
        }
    }

    let mut to_draw: Vec<(Vec2, &Sprite, i32)> = sprites
        .iter()
        .filter(|(_, sprite, _)| sprite.visible)
        .map(|(position, sprite, z)| (position.pos, sprite, z.map(|z| z.0).unwrap_or(0)))
        .collect();
    to_draw.sort_by_key(|(_, _, z)| *z);

    for (position, sprite, _z) in to_draw {
        blit_sprite(&mut *sink, sprite, position);
    }
}

fn blit_sprite(sink: &mut RenderSink, sprite: &Sprite, dst: Vec2) {
    sink.0.blit(
        &sprite.tex_key,
        sprite.offset.x,
        sprite.offset.y,
        sprite.width,
        sprite.height,
        dst.x,
        dst.y,
        sprite.use_width,
        sprite.use_height,
        sprite.alpha,
    );
}
