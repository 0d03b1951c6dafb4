//! The ball: position, constant speed and a per-axis direction sign
//!
//! Caller contract for every method: elapsed times are non-negative and the speed is
//! finite and non-zero. Neither is checked at runtime.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Bounds, rects_overlap, wall_contact};
use super::state::{Color, Player, PlayerId, Wall, WallId};

/// Sign of movement along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Negative,
    Positive,
}

impl Sign {
    #[inline]
    pub fn value(self) -> f32 {
        match self {
            Sign::Negative => -1.0,
            Sign::Positive => 1.0,
        }
    }

    /// Fair coin flip
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random_bool(0.5) {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// Direction signs for both axes (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub x: Sign,
    pub y: Sign,
}

impl Direction {
    pub const fn new(x: Sign, y: Sign) -> Self {
        Self { x, y }
    }

    /// Independent fair coin flip per axis
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let x = Sign::random(rng);
        let y = Sign::random(rng);
        Self { x, y }
    }

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x.value(), self.y.value())
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pos: Vec2,
    width: f32,
    height: f32,
    color: Color,
    speed: f32,
    direction: Direction,
}

impl Ball {
    /// Create a ball with a random direction drawn from thread-local entropy
    pub fn new(cx: f32, cy: f32, width: f32, height: f32, color: Color, speed: f32) -> Self {
        Self::with_rng(cx, cy, width, height, color, speed, &mut rand::rng())
    }

    /// Create a ball whose direction comes from a seeded generator
    pub fn with_seed(
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
        color: Color,
        speed: f32,
        seed: u64,
    ) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        Self::with_rng(cx, cy, width, height, color, speed, &mut rng)
    }

    /// Create a ball drawing its direction from `rng`
    pub fn with_rng<R: Rng + ?Sized>(
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
        color: Color,
        speed: f32,
        rng: &mut R,
    ) -> Self {
        let direction = Direction::random(rng);
        Self::with_direction(cx, cy, width, height, color, speed, direction)
    }

    /// Create a ball with a fixed direction
    pub fn with_direction(
        cx: f32,
        cy: f32,
        width: f32,
        height: f32,
        color: Color,
        speed: f32,
        direction: Direction,
    ) -> Self {
        Self {
            pos: Vec2::new(cx, cy),
            width,
            height,
            color,
            speed,
            direction,
        }
    }

    /// Advance position by `elapsed` milliseconds at constant velocity
    pub fn advance(&mut self, elapsed: f32) {
        self.pos += self.velocity() * elapsed;
    }

    /// One-axis test against the side of the court `wall` guards
    pub fn collides_with_wall(&self, wall: &Wall) -> bool {
        wall_contact(&self.bounds(), wall)
    }

    /// Strict overlap with a registered player's paddle
    pub fn collides_with_player(&self, player: &Player) -> bool {
        player.id.is_registered() && rects_overlap(&self.bounds(), &player.bounds())
    }

    /// Point the ball back into the court along the axis `wall` guards
    pub fn on_wall_collision(&mut self, wall: WallId) {
        match wall {
            WallId::Top => self.direction.y = Sign::Positive,
            WallId::Bottom => self.direction.y = Sign::Negative,
            WallId::Left => self.direction.x = Sign::Positive,
            WallId::Right => self.direction.x = Sign::Negative,
        }
    }

    /// Send the ball away from a paddle. Only the left player sends it right; every
    /// other identity sends it left. Vertical direction is never changed.
    pub fn on_player_collision(&mut self, player: &PlayerId) {
        self.direction.x = match player {
            PlayerId::Player1 => Sign::Positive,
            _ => Sign::Negative,
        };
    }

    #[inline]
    pub fn cx(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn cy(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Speed as passed at construction
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction signs scaled by the speed magnitude
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.direction.as_vec2() * self.speed.abs()
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.pos, self.width, self.height)
    }
}
