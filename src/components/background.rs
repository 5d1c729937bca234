//! Scrolling background tile and background-carried sprites.
//!
//! A [`ScrollingBackground`] accumulates the world scroll delta into an
//! offset bounded by one tile dimension per axis. Drawing the tile at the
//! offset plus a ghost copy one tile-dimension away in the direction of
//! travel produces a seamless wrap; the offset snaps back to zero the moment
//! its magnitude reaches the tile size, which is exactly when primary and
//! ghost have swapped roles.
//!
//! [`MoveWithBackground`] marks foreground sprites that ride the same scroll
//! delta and wrap horizontally across the screen edges.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Background tile with wrap-around scrolling state.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScrollingBackground {
    /// Tile dimensions in pixels; both axes must be positive.
    pub tile: Vec2,
    /// Accumulated scroll, bounded to `[-tile, tile]` per axis.
    pub offset: Vec2,
    /// Whether the scroll system applies the world delta to this background.
    pub advance: bool,
}

impl ScrollingBackground {
    pub fn new(tile_width: f32, tile_height: f32) -> Self {
        Self {
            tile: Vec2::new(tile_width, tile_height),
            offset: Vec2::ZERO,
            advance: true,
        }
    }

    /// Accumulate a scroll delta, snapping an axis back to zero when its
    /// magnitude reaches one tile dimension.
    pub fn scroll(&mut self, delta: Vec2) {
        self.offset += delta;
        if self.offset.x.abs() >= self.tile.x {
            self.offset.x = 0.0;
        }
        if self.offset.y.abs() >= self.tile.y {
            self.offset.y = 0.0;
        }
    }

    /// Displacement of the ghost tile: one tile dimension away from the
    /// primary, opposite the offset sign, on each scrolled axis.
    pub fn ghost_offset(&self) -> Vec2 {
        let x = if self.offset.x > 0.0 {
            -self.tile.x
        } else if self.offset.x < 0.0 {
            self.tile.x
        } else {
            0.0
        };
        let y = if self.offset.y > 0.0 {
            -self.tile.y
        } else if self.offset.y < 0.0 {
            self.tile.y
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Marker for sprites carried along by the background scroll.
///
/// Carried sprites wrap horizontally: leaving through the left edge re-enters
/// at the right edge of the screen and vice versa.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MoveWithBackground;
