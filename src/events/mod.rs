//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`audio`] – commands toward the host's audio playback
//! - [`collision`] – collision notifications emitted by the collision system
//! - [`input`] – host input events feeding the input state

pub mod audio;
pub mod collision;
pub mod input;
