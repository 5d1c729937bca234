//! Animation systems.
//!
//! [`advance_animations`] steps every animation variant once per tick and
//! rewrites the entity's [`Sprite`] to display the new frame:
//!
//! - [`SheetAnimation`] selects a cell of a uniform grid, column = frame,
//!   row = direction.
//! - [`VariableSheet`] copies the current frame's sub-rectangle, including
//!   its per-frame size.
//! - [`ImageStrip`] swaps the sprite's texture key to the current image.
//!
//! Entities whose sprite has no animation component are left untouched.

use bevy_ecs::prelude::*;
use glam::Vec2;

use crate::components::imagestrip::ImageStrip;
use crate::components::sheetanimation::SheetAnimation;
use crate::components::sprite::Sprite;
use crate::components::varsheet::VariableSheet;

/// Advance all animation state and project it into sprites.
pub fn advance_animations(
    mut query: Query<(
        &mut Sprite,
        Option<&mut SheetAnimation>,
        Option<&mut VariableSheet>,
        Option<&mut ImageStrip>,
    )>,
) {
    for (mut sprite, sheet, varsheet, strip) in query.iter_mut() {
        if let Some(mut sheet) = sheet {
            sheet.advance_frame();
            sprite.offset = Vec2::new(
                sheet.current_frame as f32 * sprite.width,
                sheet.current_dir as f32 * sprite.height,
            );
        }

        if let Some(mut varsheet) = varsheet {
            varsheet.advance_frame();
            let frame = *varsheet.frame();
            sprite.offset = Vec2::new(frame.x, frame.y);
            sprite.width = frame.width;
            sprite.height = frame.height;
        }

        if let Some(mut strip) = strip {
            strip.advance_frame();
            if let Some(key) = strip.current() {
                if sprite.tex_key != key {
                    sprite.tex_key = key.to_string();
                }
            }
        }
    }
}
