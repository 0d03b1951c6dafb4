//! Court geometry and tuning
//!
//! Everything here is fixed for the lifetime of a match and passed in at construction.
//! Settings can be read from a JSON file; missing fields take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Color;

/// Match settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    /// Play area width (pixels)
    pub court_width: f32,
    /// Play area height (pixels)
    pub court_height: f32,
    /// Thickness of the walls around the play area
    pub wall_thickness: f32,

    // === Paddles ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Pixels per millisecond
    pub paddle_speed: f32,
    /// Distance from each side edge to the paddle center
    pub paddle_inset: f32,
    pub paddle_color: Color,

    // === Ball ===
    pub ball_size: f32,
    /// Pixels per millisecond
    pub ball_speed: f32,
    pub ball_color: Color,

    // === Match ===
    pub win_score: u8,
    /// Seed for serve directions
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_width: COURT_WIDTH,
            court_height: COURT_HEIGHT,
            wall_thickness: WALL_THICKNESS,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_inset: PADDLE_INSET,
            paddle_color: Color::WHITE,

            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            ball_color: Color::YELLOW,

            win_score: WIN_SCORE,
            seed: 12345,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults when the file is
    /// missing or malformed
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings.warn_suspicious();
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Distance the ball covers in one fixed simulation step
    pub fn ball_step(&self) -> f32 {
        self.ball_speed.abs() * SIM_DT
    }

    /// Whether a single step can carry the ball clean across a paddle, skipping the
    /// overlap test
    pub fn ball_can_tunnel(&self) -> bool {
        self.ball_step() > self.paddle_width + self.ball_size
    }

    /// Log settings that load fine but make for a broken match
    pub fn warn_suspicious(&self) {
        if self.win_score == 0 {
            log::warn!("win_score is 0: the first point ends the match");
        }
        if self.ball_can_tunnel() {
            log::warn!(
                "ball moves {:.1}px per step, more than paddle width + ball size ({:.1}px): \
                 the ball can pass through paddles",
                self.ball_step(),
                self.paddle_width + self.ball_size
            );
        }
    }

    /// Play area center
    pub fn court_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.court_width / 2.0, self.court_height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "ball_speed": 0.6, "seed": 9 }"#).unwrap();
        assert_eq!(settings.ball_speed, 0.6);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.court_width, COURT_WIDTH);
        assert_eq!(settings.win_score, WIN_SCORE);
    }

    #[test]
    fn test_json_round_trip_preserves_colors() {
        let mut settings = Settings::default();
        settings.ball_color = Color::RED;
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ court_width: ").is_err());
        assert!(Settings::from_json(r#"{ "win_score": -1 }"#).is_err());
    }

    #[test]
    fn test_ball_tunneling_threshold() {
        let settings = Settings::default();
        assert!(!settings.ball_can_tunnel());

        let limit = (settings.paddle_width + settings.ball_size) / SIM_DT;
        let fast = Settings {
            ball_speed: limit * 1.1,
            ..Settings::default()
        };
        assert!(fast.ball_can_tunnel());

        let fast_reversed = Settings {
            ball_speed: -limit * 1.1,
            ..Settings::default()
        };
        assert!(fast_reversed.ball_can_tunnel());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let settings = Settings::load("/nonexistent/court-pong/settings.json");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir()
            .join(format!("court-pong-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "court_width": 1024.0, "win_score": 3 }"#).unwrap();
        let settings = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(settings.court_width, 1024.0);
        assert_eq!(settings.win_score, 3);
        assert_eq!(settings.court_center(), glam::Vec2::new(512.0, COURT_HEIGHT / 2.0));
    }
}
