//! Game configuration resource.
//!
//! Manages runtime settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 640
//! height = 480
//!
//! [world]
//! gravity = 2.0
//! scroll_x = -1.0
//! scroll_y = 0.0
//!
//! [demo]
//! frames = 300
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 640;
const DEFAULT_SCREEN_HEIGHT: u32 = 480;
const DEFAULT_GRAVITY: f32 = 2.0;
const DEFAULT_SCROLL_X: f32 = -1.0;
const DEFAULT_SCROLL_Y: f32 = 0.0;
const DEFAULT_DEMO_FRAMES: u32 = 300;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Runtime configuration resource.
///
/// Stores screen dimensions, world defaults and demo settings. Missing values
/// in the file retain their defaults.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Output surface width in pixels.
    pub screen_width: u32,
    /// Output surface height in pixels.
    pub screen_height: u32,
    /// Default downward pull per grounded tick.
    pub gravity: f32,
    /// World scroll delta per tick, x axis.
    pub scroll_x: f32,
    /// World scroll delta per tick, y axis.
    pub scroll_y: f32,
    /// Number of ticks the demo binary runs.
    pub demo_frames: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            gravity: DEFAULT_GRAVITY,
            scroll_x: DEFAULT_SCROLL_X,
            scroll_y: DEFAULT_SCROLL_Y,
            demo_frames: DEFAULT_DEMO_FRAMES,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }

        // [world] section
        if let Some(gravity) = config.getfloat("world", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(sx) = config.getfloat("world", "scroll_x").ok().flatten() {
            self.scroll_x = sx as f32;
        }
        if let Some(sy) = config.getfloat("world", "scroll_y").ok().flatten() {
            self.scroll_y = sy as f32;
        }

        // [demo] section
        if let Some(frames) = config.getuint("demo", "frames").ok().flatten() {
            self.demo_frames = frames as u32;
        }

        info!(
            "Loaded config: {}x{} screen, gravity={}, scroll=({}, {}), demo_frames={}",
            self.screen_width,
            self.screen_height,
            self.gravity,
            self.scroll_x,
            self.scroll_y,
            self.demo_frames
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("screen", "width", Some(self.screen_width.to_string()));
        config.set("screen", "height", Some(self.screen_height.to_string()));

        config.set("world", "gravity", Some(self.gravity.to_string()));
        config.set("world", "scroll_x", Some(self.scroll_x.to_string()));
        config.set("world", "scroll_y", Some(self.scroll_y.to_string()));

        config.set("demo", "frames", Some(self.demo_frames.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::new();
        assert_eq!(config.screen_width, DEFAULT_SCREEN_WIDTH);
        assert_eq!(config.screen_height, DEFAULT_SCREEN_HEIGHT);
        assert_eq!(config.gravity, DEFAULT_GRAVITY);
        assert_eq!(config.demo_frames, DEFAULT_DEMO_FRAMES);
    }

    #[test]
    fn test_load_missing_file_errors_and_keeps_defaults() {
        let mut config = GameConfig::with_path("/nonexistent/spriterig.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.screen_width, DEFAULT_SCREEN_WIDTH);
    }
}
