//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world. Components define data such as position, rendering,
//! collision, animation state, and background behavior.
//!
//! Submodules overview:
//! - [`background`] – scrolling background tile and background-carried sprites
//! - [`boxcollider`] – axis-aligned collider with overlap and lookahead tests
//! - [`group`] – tag component for grouping entities by name
//! - [`imagestrip`] – animation over an ordered list of whole images
//! - [`mapposition`] – world-space position for an entity
//! - [`rigidbody`] – stored velocity, applied by the host
//! - [`sheetanimation`] – row/column spritesheet playback and jump state
//! - [`sprite`] – 2D sprite rendering component
//! - [`varsheet`] – spritesheet with independently sized per-frame rectangles
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod background;
pub mod boxcollider;
pub mod group;
pub mod imagestrip;
pub mod mapposition;
pub mod rigidbody;
pub mod sheetanimation;
pub mod sprite;
pub mod varsheet;
pub mod zindex;
