//! Demo scene and player control.
//!
//! A small side-scrolling scene exercising the whole runtime: a wrapping
//! background, drifting props carried by the scroll, two platforms, a
//! sheet-animated player with jump physics, a variable-frame torch and a
//! coin image strip. [`steer_player`] shows the intended movement pattern:
//! ask the lookahead predicates whether the next step collides, and only
//! commit positions that pass.

use bevy_ecs::prelude::*;

use crate::components::background::{MoveWithBackground, ScrollingBackground};
use crate::components::boxcollider::{Aabb, BoxCollider};
use crate::components::group::Group;
use crate::components::imagestrip::ImageStrip;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sheetanimation::SheetAnimation;
use crate::components::sprite::Sprite;
use crate::components::varsheet::{FrameRect, VariableSheet};
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::audio::AudioBus;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::keymap::KeyId;
use crate::resources::worldclock::WorldClock;

/// Spritesheet row for facing right.
pub const DIR_RIGHT: i32 = 0;
/// Spritesheet row for facing left.
pub const DIR_LEFT: i32 = 1;

/// Spawn the demo scene into the world.
pub fn setup_demo(world: &mut World) {
    let (gravity, screen_w, screen_h) = {
        let config = world.resource::<GameConfig>();
        (
            config.gravity,
            config.screen_width as f32,
            config.screen_height as f32,
        )
    };

    // Wrapping backdrop, one tile the size of the screen.
    world.spawn((
        Group::new("background"),
        MapPosition::new(0.0, 0.0),
        Sprite::new("bg_hills", screen_w, screen_h),
        ScrollingBackground::new(screen_w, screen_h),
    ));

    // Clouds drifting with the scroll.
    for _ in 0..4 {
        let x = fastrand::f32() * screen_w;
        let y = 32.0 + fastrand::f32() * 96.0;
        world.spawn((
            Group::new("prop"),
            MapPosition::new(x, y),
            Sprite::new("cloud", 48.0, 24.0),
            MoveWithBackground,
            ZIndex(-5),
        ));
    }

    // Ground and one floating ledge.
    world.spawn((
        Group::new("platform"),
        MapPosition::new(0.0, screen_h - 80.0),
        Sprite::new("ground", screen_w, 80.0),
        BoxCollider::new(screen_w, 80.0),
        ZIndex(0),
    ));
    world.spawn((
        Group::new("platform"),
        MapPosition::new(screen_w * 0.4, screen_h - 180.0),
        Sprite::new("ledge", 120.0, 16.0),
        BoxCollider::new(120.0, 16.0),
        ZIndex(0),
    ));

    // The player: 6-frame walk cycle, two facing rows, jump enabled.
    world.spawn((
        Group::new("player"),
        MapPosition::new(64.0, screen_h - 128.0),
        Sprite::new("hero", 32.0, 48.0),
        SheetAnimation::new(1, 5).with_jump(10, gravity),
        BoxCollider::new(32.0, 48.0),
        RigidBody::with_velocity(3.0, 0.0),
        ZIndex(1),
    ));

    // Torch with per-frame rectangles of different sizes.
    let torch = VariableSheet::new(vec![vec![
        FrameRect::new(0.0, 0.0, 16.0, 28.0),
        FrameRect::new(16.0, 0.0, 16.0, 30.0),
        FrameRect::new(32.0, 0.0, 18.0, 32.0),
    ]])
    .expect("torch sheet definition is non-empty");
    world.spawn((
        Group::new("prop"),
        MapPosition::new(screen_w * 0.4 + 48.0, screen_h - 212.0),
        Sprite::new("torch", 16.0, 28.0),
        torch,
        ZIndex(1),
    ));

    // Spinning coin cycling whole images.
    world.spawn((
        Group::new("prop"),
        MapPosition::new(screen_w * 0.6, screen_h - 140.0),
        Sprite::new("coin_0", 16.0, 16.0),
        ImageStrip::new(vec![
            "coin_0".into(),
            "coin_1".into(),
            "coin_2".into(),
        ]),
        ZIndex(1),
    ));
}

/// Input-driven horizontal movement and jump start.
///
/// Each intended step is validated with the one-pixel lookahead against the
/// platform boxes before the position is committed.
pub fn steer_player(
    mut query: Query<(
        &Group,
        &mut MapPosition,
        &RigidBody,
        &BoxCollider,
        Option<&mut SheetAnimation>,
    )>,
    input: Res<InputState>,
    audio: Res<AudioBus>,
    mut clock: ResMut<WorldClock>,
) {
    let walls: Vec<Aabb> = query
        .iter()
        .filter(|(group, ..)| group.name() == "platform")
        .map(|(_, position, _, collider, _)| collider.rect(position.pos))
        .collect();

    for (group, mut position, body, collider, anim) in query.iter_mut() {
        if group.name() != "player" {
            continue;
        }
        let Some(mut anim) = anim else {
            continue;
        };

        let me = collider.rect(position.pos);
        if input.is_down(KeyId::Right) && !walls.iter().any(|wall| me.hits_right(wall)) {
            position.pos.x += body.velocity.x;
            anim.change_dir(DIR_RIGHT);
        }
        if input.is_down(KeyId::Left) && !walls.iter().any(|wall| me.hits_left(wall)) {
            position.pos.x -= body.velocity.x;
            anim.change_dir(DIR_LEFT);
        }
        if input.is_down(input.jump_binding) && anim.jump.start() {
            audio.fire(AudioCmd::PlayFx { id: "jump".into() });
            clock.append(&format!("jump started at x={}", position.pos.x));
        }
    }
}

/// Landing and jump permission.
///
/// Runs after gravity: a grounded player that sank into a platform is snapped
/// back on top of it, and jumping is only allowed while a platform is one
/// pixel below.
pub fn support_player(
    mut query: Query<(
        &Group,
        &mut MapPosition,
        &BoxCollider,
        Option<&mut SheetAnimation>,
    )>,
) {
    let walls: Vec<Aabb> = query
        .iter()
        .filter(|(group, ..)| group.name() == "platform")
        .map(|(_, position, collider, _)| collider.rect(position.pos))
        .collect();

    for (group, mut position, collider, anim) in query.iter_mut() {
        if group.name() != "player" {
            continue;
        }
        let Some(mut anim) = anim else {
            continue;
        };

        if !anim.jump.is_jumping {
            for wall in &walls {
                let me = collider.rect(position.pos);
                if me.overlaps(wall) {
                    position.pos.y = wall.y - collider.size.y - collider.offset.y;
                }
            }
        }

        let me = collider.rect(position.pos);
        anim.jump.can_jump = walls.iter().any(|wall| me.hits_bottom(wall));
    }
}
