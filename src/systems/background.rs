//! Background systems.
//!
//! [`scroll_backgrounds`] feeds the per-tick world scroll delta into every
//! advancing [`ScrollingBackground`]. [`carry_with_background`] shifts
//! [`MoveWithBackground`] sprites by the same delta and wraps them across the
//! horizontal screen edges.

use bevy_ecs::prelude::*;

use crate::components::background::{MoveWithBackground, ScrollingBackground};
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldscroll::WorldScroll;

/// Accumulate the world scroll delta into each advancing background.
pub fn scroll_backgrounds(mut query: Query<&mut ScrollingBackground>, scroll: Res<WorldScroll>) {
    for mut bg in query.iter_mut() {
        if bg.advance {
            bg.scroll(scroll.delta);
        }
    }
}

/// Carry marked sprites along with the scroll and wrap them horizontally:
/// fully off the left edge re-enters at the right edge and vice versa.
pub fn carry_with_background(
    mut query: Query<(&mut MapPosition, &Sprite), With<MoveWithBackground>>,
    scroll: Res<WorldScroll>,
    screen: Res<ScreenSize>,
) {
    for (mut position, sprite) in query.iter_mut() {
        position.pos += scroll.delta;
        if position.pos.x < -sprite.use_width {
            position.pos.x = screen.w as f32;
        } else if position.pos.x > screen.w as f32 {
            position.pos.x = -sprite.use_width;
        }
    }
}
