//! ECS resources shared across systems.
//!
//! Process-wide state lives here rather than in globals: systems receive the
//! resources they need explicitly.
//!
//! Submodules overview:
//! - [`audio`] – fire-and-forget command channel toward the host's audio
//! - [`gameconfig`] – INI-backed runtime settings
//! - [`input`] – persistent keyboard/mouse boolean state
//! - [`keymap`] – static key-code to identifier lookup table
//! - [`screensize`] – output surface dimensions
//! - [`worldclock`] – frame counter and debug buffer
//! - [`worldscroll`] – per-tick world scroll delta supplied by the host

pub mod audio;
pub mod gameconfig;
pub mod input;
pub mod keymap;
pub mod screensize;
pub mod worldclock;
pub mod worldscroll;
