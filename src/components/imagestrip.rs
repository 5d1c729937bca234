//! Animation over an ordered list of whole images.
//!
//! An [`ImageStrip`] cycles a texture key through a list of images. The wrap
//! test fires one element early, so the final image in the list is never
//! selected as current; a strip of three images plays `0, 1, 0, 1, …`. This
//! reproduces the behavior games built on this runtime already depend on, so
//! it is kept as-is rather than corrected.

use bevy_ecs::prelude::Component;

/// Frame index over an ordered list of texture keys.
#[derive(Debug, Clone, Component)]
pub struct ImageStrip {
    frames: Vec<String>,
    current_frame: usize,
}

impl ImageStrip {
    pub fn new(frames: Vec<String>) -> Self {
        Self {
            frames,
            current_frame: 0,
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Texture key of the current frame, if the strip holds any images.
    pub fn current(&self) -> Option<&str> {
        self.frames.get(self.current_frame).map(String::as_str)
    }

    /// Step to the next image, wrapping to 0 one element before the end of
    /// the list.
    pub fn advance_frame(&mut self) {
        if self.frames.is_empty() {
            return;
        }
        if self.current_frame + 1 >= self.frames.len() - 1 {
            self.current_frame = 0;
        } else {
            self.current_frame += 1;
        }
    }
}
