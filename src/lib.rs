//! Spriterig library.
//!
//! A small runtime for 2D sprite games: it positions drawable entities,
//! advances their animation state, detects axis-aligned collisions (including
//! directional one-step lookahead for platformer movement), scrolls a
//! seamlessly wrapping background, and tracks keyboard/mouse input as
//! persistent boolean state. Rendering and audio playback are capabilities the
//! host provides; the runtime only computes what to draw and what to trigger.

pub mod components;
pub mod events;
pub mod game;
pub mod render;
pub mod resources;
pub mod systems;
