//! Gravity and the jump state machine.
//!
//! Runs once per tick for every entity with a
//! [`SheetAnimation`](crate::components::sheetanimation::SheetAnimation).
//! While jumping, the entity rises `gravity + 1` pixels and the jump counter
//! decrements; hitting zero returns it to grounded and releases the jump key
//! in the input state, so a held key does not immediately re-trigger. While
//! grounded, gravity pulls the entity down unconditionally; landing is the
//! caller's business (lookahead-check, then snap). The two branches are
//! exclusive, so jump lift and gravity never compound in one tick.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sheetanimation::SheetAnimation;
use crate::resources::input::InputState;

/// Apply one tick of the jump/gravity state machine.
pub fn jump_physics(
    mut query: Query<(&mut MapPosition, &mut SheetAnimation)>,
    mut input: ResMut<InputState>,
) {
    for (mut position, mut anim) in query.iter_mut() {
        if anim.jump.is_jumping {
            position.pos.y -= anim.jump.gravity + 1.0;
            anim.jump.jump_count = anim.jump.jump_count.saturating_sub(1);
            if anim.jump.jump_count == 0 {
                anim.jump.stop();
                let binding = input.jump_binding;
                input.set_down(binding, false);
            }
        } else {
            position.pos.y += anim.jump.gravity;
        }
    }
}
