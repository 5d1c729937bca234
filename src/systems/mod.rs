//! ECS systems run once per external frame tick.
//!
//! The caller schedules these in a fixed order: host input first, then
//! clock, physics, background, collision, animation and finally the draw
//! pass. Gravity/jump run before collision lookahead, lookahead
//! before position commits, so discrete movement cannot tunnel.
//!
//! Submodules overview:
//! - [`animation`] – advances every animation variant and updates sprites
//! - [`background`] – background scrolling and background-carried sprites
//! - [`collision`] – pairwise overlap detection and collision events
//! - [`input`] – drains host input messages into the input state
//! - [`physics`] – gravity and the jump state machine
//! - [`render`] – draw pass through the host renderer capability
//! - [`time`] – advances the world clock

pub mod animation;
pub mod background;
pub mod collision;
pub mod input;
pub mod physics;
pub mod render;
pub mod time;
