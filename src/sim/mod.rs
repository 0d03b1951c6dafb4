//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied elapsed time only
//! - Seeded RNG only
//! - Fixed check order (walls, then paddles, then scoring)
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod state;
pub mod tick;

pub use ball::{Ball, Direction, Sign};
pub use collision::{Bounds, rects_overlap, wall_contact};
pub use state::{Color, GameEvent, GamePhase, GameState, Player, PlayerId, Score, Wall, WallId};
pub use tick::{TickInput, autopilot, tick, tick_fixed};
