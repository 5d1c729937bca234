//! Spriterig demo entry point.
//!
//! Runs the sprite runtime headless for a fixed number of frames with a
//! scripted input track and a logging renderer standing in for the host's
//! blitter. Useful for eyeballing the runtime's behavior from the log:
//!
//! ```sh
//! RUST_LOG=debug cargo run -- --frames 120
//! ```

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;

use spriterig::events::collision::observe_collision_log;
use spriterig::events::input::HostInput;
use spriterig::game;
use spriterig::render::{RenderSink, Renderer};
use spriterig::resources::audio::setup_audio;
use spriterig::resources::gameconfig::GameConfig;
use spriterig::resources::input::InputState;
use spriterig::resources::screensize::ScreenSize;
use spriterig::resources::worldclock::WorldClock;
use spriterig::resources::worldscroll::WorldScroll;
use spriterig::systems::animation::advance_animations;
use spriterig::systems::background::{carry_with_background, scroll_backgrounds};
use spriterig::systems::collision::collision_detector;
use spriterig::systems::input::{apply_host_input, update_host_input_messages};
use spriterig::systems::physics::jump_physics;
use spriterig::systems::render::render_pass;
use spriterig::systems::time::advance_clock;

/// Spriterig 2D sprite runtime, headless demo
#[derive(Parser)]
#[command(version, about = "Headless demo of the spriterig 2D sprite runtime")]
struct Cli {
    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Override the number of frames to run.
    #[arg(long, value_name = "N")]
    frames: Option<u32>,
}

/// Renderer stand-in that traces every blit instead of drawing.
struct LogRenderer;

impl Renderer for LogRenderer {
    fn blit(
        &mut self,
        tex_key: &str,
        src_x: f32,
        src_y: f32,
        src_w: f32,
        src_h: f32,
        dst_x: f32,
        dst_y: f32,
        dst_w: f32,
        dst_h: f32,
        alpha: f32,
    ) {
        log::trace!(
            "blit {} src=({src_x}, {src_y}, {src_w}, {src_h}) dst=({dst_x}, {dst_y}, {dst_w}, {dst_h}) alpha={alpha}",
            tex_key
        );
    }

    fn pixel(&self, x: i32, y: i32) -> (u8, u8, u8) {
        (x.rem_euclid(256) as u8, y.rem_euclid(256) as u8, 0)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    if let Err(e) = config.load_from_file() {
        log::warn!("{e}; using defaults");
    }
    let frames = cli.frames.unwrap_or(config.demo_frames);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(ScreenSize {
        w: config.screen_width as i32,
        h: config.screen_height as i32,
    });
    world.insert_resource(WorldClock::default());
    world.insert_resource(WorldScroll::new(config.scroll_x, config.scroll_y));
    world.insert_resource(InputState::default());
    world.init_resource::<Messages<HostInput>>();
    let audio_rx = setup_audio(&mut world);
    world.insert_resource(config);
    world.insert_non_send_resource(RenderSink(Box::new(LogRenderer)));

    world.spawn(Observer::new(observe_collision_log));
    world.flush();

    game::setup_demo(&mut world);

    let mut update = Schedule::default();
    update.add_systems((update_host_input_messages, apply_host_input).chain());
    update.add_systems(advance_clock.after(apply_host_input));
    update.add_systems(game::steer_player.after(advance_clock));
    update.add_systems(jump_physics.after(game::steer_player));
    update.add_systems(game::support_player.after(jump_physics));
    update.add_systems(scroll_backgrounds.after(game::support_player));
    update.add_systems(carry_with_background.after(scroll_backgrounds));
    update.add_systems(collision_detector.after(carry_with_background));
    update.add_systems(advance_animations.after(collision_detector));
    update.add_systems(render_pass.after(advance_animations));

    log::info!("running demo for {frames} frames");

    // --------------- Main loop ---------------
    for frame in 0..frames {
        // Scripted input track: walk right the whole run, hop twice a second.
        {
            let mut msgs = world.resource_mut::<Messages<HostInput>>();
            if frame == 0 {
                msgs.write(HostInput::KeyDown { code: 39 });
            }
            if frame % 60 == 30 {
                msgs.write(HostInput::KeyDown { code: 32 });
            }
        }

        update.run(&mut world);

        // Display sink: drain the clock's debug buffer once per tick.
        let dump = world.resource_mut::<WorldClock>().flush();
        for line in dump.lines() {
            log::debug!("{line}");
        }
        // Host side of the fire-and-forget audio channel.
        for cmd in audio_rx.try_iter() {
            log::info!("audio: {cmd}");
        }
    }

    let clock = world.resource::<WorldClock>();
    log::info!("demo finished at frame {}", clock.frame);
}
