//! Court Pong - two-player Pong on a rectangular court
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, frame loop, scoring)
//! - `renderer`: Rectangle drawing surface and a text-grid implementation
//! - `settings`: Court geometry and tuning, loadable from JSON

pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
///
/// Distances are in pixels, durations in milliseconds and speeds in pixels per millisecond.
pub mod consts {
    /// Fixed simulation timestep (120 Hz)
    pub const SIM_DT: f32 = 1000.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Court dimensions (play area, walls sit outside it)
    pub const COURT_WIDTH: f32 = 800.0;
    pub const COURT_HEIGHT: f32 = 600.0;
    pub const WALL_THICKNESS: f32 = 10.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 16.0;
    pub const PADDLE_HEIGHT: f32 = 96.0;
    pub const PADDLE_SPEED: f32 = 0.35;
    /// Distance from the side edge to the paddle center
    pub const PADDLE_INSET: f32 = 40.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 0.4;

    /// Points needed to win a match
    pub const WIN_SCORE: u8 = 5;
}
