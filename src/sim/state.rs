//! Game state and court entities
//!
//! Walls and paddles are plain records: the ball reads them during collision checks
//! and never mutates them.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::collision::Bounds;
use crate::settings::Settings;

/// RGBA color tag, opaque to the physics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color(pub [f32; 4]);

impl Color {
    pub const WHITE: Color = Color([1.0, 1.0, 1.0, 1.0]);
    pub const GRAY: Color = Color([0.5, 0.5, 0.5, 1.0]);
    pub const RED: Color = Color([1.0, 0.2, 0.2, 1.0]);
    pub const GREEN: Color = Color([0.2, 1.0, 0.4, 1.0]);
    pub const BLUE: Color = Color([0.2, 0.4, 1.0, 1.0]);
    pub const YELLOW: Color = Color([1.0, 0.85, 0.2, 1.0]);

    pub fn rgba(&self) -> [f32; 4] {
        self.0
    }

    /// Perceived brightness in [0, 1], alpha-weighted
    pub fn luminance(&self) -> f32 {
        let [r, g, b, a] = self.0;
        (0.299 * r + 0.587 * g + 0.114 * b) * a
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// Court side a wall guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallId {
    Top,
    Bottom,
    Left,
    Right,
}

impl WallId {
    pub const ALL: [WallId; 4] = [WallId::Top, WallId::Bottom, WallId::Left, WallId::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            WallId::Top => "TOP",
            WallId::Bottom => "BOTTOM",
            WallId::Left => "LEFT",
            WallId::Right => "RIGHT",
        }
    }

    /// Parse a wall tag. Tags match exactly; anything else yields `None` and therefore
    /// never takes part in a collision.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "TOP" => Some(WallId::Top),
            "BOTTOM" => Some(WallId::Bottom),
            "LEFT" => Some(WallId::Left),
            "RIGHT" => Some(WallId::Right),
            _ => None,
        }
    }

    /// Walls the ball bounces off during play
    pub fn is_horizontal(&self) -> bool {
        matches!(self, WallId::Top | WallId::Bottom)
    }
}

impl fmt::Display for WallId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Paddle owner
///
/// `Other` carries identities that are not one of the two registered players. Collision
/// detection ignores them, while the collision reaction treats them like the right-hand
/// player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerId {
    /// Left paddle
    Player1,
    /// Right paddle
    Player2,
    Other(String),
}

impl PlayerId {
    pub fn as_str(&self) -> &str {
        match self {
            PlayerId::Player1 => "Player 1",
            PlayerId::Player2 => "Player 2",
            PlayerId::Other(name) => name.as_str(),
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, PlayerId::Player1 | PlayerId::Player2)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        match s {
            "Player 1" => PlayerId::Player1,
            "Player 2" => PlayerId::Player2,
            other => PlayerId::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed court boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub id: WallId,
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    #[serde(default = "wall_color")]
    pub color: Color,
}

fn wall_color() -> Color {
    Color::GRAY
}

impl Wall {
    pub fn new(id: WallId, center: Vec2, width: f32, height: f32) -> Self {
        Self {
            id,
            center,
            width,
            height,
            color: wall_color(),
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.width, self.height)
    }

    /// Build the wall guarding `side` of a court spanning `(0, 0)..(width, height)`
    ///
    /// Walls sit just outside the play area and extend over the corners so each one
    /// covers its whole side.
    pub fn for_court(side: WallId, width: f32, height: f32, thickness: f32) -> Self {
        let half_t = thickness / 2.0;
        match side {
            WallId::Top => Self::new(
                side,
                Vec2::new(width / 2.0, -half_t),
                width + 2.0 * thickness,
                thickness,
            ),
            WallId::Bottom => Self::new(
                side,
                Vec2::new(width / 2.0, height + half_t),
                width + 2.0 * thickness,
                thickness,
            ),
            WallId::Left => Self::new(
                side,
                Vec2::new(-half_t, height / 2.0),
                thickness,
                height + 2.0 * thickness,
            ),
            WallId::Right => Self::new(
                side,
                Vec2::new(width + half_t, height / 2.0),
                thickness,
                height + 2.0 * thickness,
            ),
        }
    }
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub center: Vec2,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub color: Color,
}

impl Player {
    pub fn new(id: PlayerId, center: Vec2, width: f32, height: f32, color: Color) -> Self {
        Self {
            id,
            center,
            width,
            height,
            color,
        }
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.center, self.width, self.height)
    }

    /// Move vertically by `dir` (-1 up, 0 stop, 1 down) at `speed` for `elapsed` ms,
    /// keeping the whole paddle within `min_y..=max_y`
    pub fn move_vertical(&mut self, dir: i8, speed: f32, elapsed: f32, min_y: f32, max_y: f32) {
        let half_h = self.height / 2.0;
        let y = self.center.y + dir.signum() as f32 * speed * elapsed;
        let (lo, hi) = (min_y + half_h, max_y - half_h);
        self.center.y = if lo <= hi { y.clamp(lo, hi) } else { (min_y + max_y) / 2.0 };
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award a point. Unregistered identities score nothing.
    pub fn award(&mut self, player: &PlayerId) {
        match player {
            PlayerId::Player1 => self.left = self.left.saturating_add(1),
            PlayerId::Player2 => self.right = self.right.saturating_add(1),
            PlayerId::Other(_) => {}
        }
    }

    pub fn points(&self, player: &PlayerId) -> u8 {
        match player {
            PlayerId::Player1 => self.left,
            PlayerId::Player2 => self.right,
            PlayerId::Other(_) => 0,
        }
    }

    /// Check whether the side that just scored has reached `win_score`
    pub fn winner(&self, scorer: &PlayerId, win_score: u8) -> Option<PlayerId> {
        if scorer.is_registered() && self.points(scorer) >= win_score {
            Some(scorer.clone())
        } else {
            None
        }
    }
}

/// Current phase of the match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    GameOver { winner: PlayerId },
}

/// Something that happened during a tick, for logging and presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce(WallId),
    PaddleHit(PlayerId),
    Scored(PlayerId),
    GameOver(PlayerId),
}

/// Complete match state
#[derive(Debug, Clone)]
pub struct GameState {
    pub settings: Settings,
    pub ball: Ball,
    /// Top, bottom, left, right
    pub walls: Vec<Wall>,
    /// Left paddle first
    pub players: Vec<Player>,
    pub score: Score,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events raised since the last drain
    pub events: Vec<GameEvent>,
    rng: Pcg32,
}

impl GameState {
    /// Create a new match from settings; the serve direction comes from `settings.seed`
    pub fn new(settings: Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let ball = Self::serve_ball(&settings, &mut rng);

        let walls = WallId::ALL
            .iter()
            .map(|&side| {
                Wall::for_court(
                    side,
                    settings.court_width,
                    settings.court_height,
                    settings.wall_thickness,
                )
            })
            .collect();

        let mid_y = settings.court_height / 2.0;
        let players = vec![
            Player::new(
                PlayerId::Player1,
                Vec2::new(settings.paddle_inset, mid_y),
                settings.paddle_width,
                settings.paddle_height,
                settings.paddle_color,
            ),
            Player::new(
                PlayerId::Player2,
                Vec2::new(settings.court_width - settings.paddle_inset, mid_y),
                settings.paddle_width,
                settings.paddle_height,
                settings.paddle_color,
            ),
        ];

        log::info!(
            "New match: court {}x{}, seed {}",
            settings.court_width,
            settings.court_height,
            settings.seed
        );

        Self {
            settings,
            ball,
            walls,
            players,
            score: Score::new(),
            phase: GamePhase::Playing,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    fn serve_ball(settings: &Settings, rng: &mut Pcg32) -> Ball {
        let center = settings.court_center();
        Ball::with_rng(
            center.x,
            center.y,
            settings.ball_size,
            settings.ball_size,
            settings.ball_color,
            settings.ball_speed,
            rng,
        )
    }

    /// Replace the ball with a fresh one at the court center
    pub fn reset_ball(&mut self) {
        self.ball = Self::serve_ball(&self.settings, &mut self.rng);
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, GamePhase::GameOver { .. })
    }

    /// Take all events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_id_parse() {
        assert_eq!(WallId::parse("TOP"), Some(WallId::Top));
        assert_eq!(WallId::parse("BOTTOM"), Some(WallId::Bottom));
        assert_eq!(WallId::parse("RIGHT"), Some(WallId::Right));
        assert_eq!(WallId::parse("CEILING"), None);
        // Tags are case-sensitive, like player identities
        assert_eq!(WallId::parse("top"), None);
        assert_eq!(WallId::parse("bottom"), None);
        assert_eq!(WallId::parse("Left"), None);
        assert_eq!(PlayerId::from("player 1"), PlayerId::Other("player 1".to_string()));
        for id in WallId::ALL {
            assert_eq!(WallId::parse(id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_player_id_from_str() {
        assert_eq!(PlayerId::from("Player 1"), PlayerId::Player1);
        assert_eq!(PlayerId::from("Player 2"), PlayerId::Player2);
        let spectator = PlayerId::from("Spectator");
        assert_eq!(spectator, PlayerId::Other("Spectator".to_string()));
        assert!(!spectator.is_registered());
        assert_eq!(spectator.to_string(), "Spectator");
    }

    #[test]
    fn test_court_walls_enclose_play_area() {
        let top = Wall::for_court(WallId::Top, 800.0, 600.0, 10.0);
        assert_eq!(top.bounds().bottom, 0.0);
        assert_eq!(top.bounds().width(), 820.0);

        let bottom = Wall::for_court(WallId::Bottom, 800.0, 600.0, 10.0);
        assert_eq!(bottom.bounds().top, 600.0);

        let left = Wall::for_court(WallId::Left, 800.0, 600.0, 10.0);
        assert_eq!(left.bounds().right, 0.0);

        let right = Wall::for_court(WallId::Right, 800.0, 600.0, 10.0);
        assert_eq!(right.bounds().left, 800.0);
        assert_eq!(right.bounds().height(), 620.0);
    }

    #[test]
    fn test_paddle_movement_is_clamped() {
        let mut paddle = Player::new(
            PlayerId::Player1,
            Vec2::new(40.0, 300.0),
            16.0,
            100.0,
            Color::WHITE,
        );

        paddle.move_vertical(-1, 0.5, 100.0, 0.0, 600.0);
        assert_eq!(paddle.center.y, 250.0);

        paddle.move_vertical(-1, 0.5, 10_000.0, 0.0, 600.0);
        assert_eq!(paddle.center.y, 50.0, "Paddle top should stop at the court edge");

        paddle.move_vertical(1, 0.5, 10_000.0, 0.0, 600.0);
        assert_eq!(paddle.center.y, 550.0);

        paddle.move_vertical(0, 0.5, 100.0, 0.0, 600.0);
        assert_eq!(paddle.center.y, 550.0);
    }

    #[test]
    fn test_score_winner() {
        let mut score = Score::new();
        assert_eq!(score.winner(&PlayerId::Player1, 2), None);

        score.award(&PlayerId::Player2);
        score.award(&PlayerId::Other("Spectator".into()));
        assert_eq!(score, Score { left: 0, right: 1 });

        score.award(&PlayerId::Player2);
        assert_eq!(score.winner(&PlayerId::Player2, 2), Some(PlayerId::Player2));
    }

    #[test]
    fn test_zero_win_score_credits_the_scorer() {
        let mut score = Score::new();
        score.award(&PlayerId::Player2);
        assert_eq!(score.winner(&PlayerId::Player2, 0), Some(PlayerId::Player2));
        assert_eq!(score.winner(&PlayerId::Other("Spectator".into()), 0), None);
    }

    #[test]
    fn test_game_state_layout() {
        let state = GameState::new(Settings::default());
        let s = &state.settings;

        assert_eq!(state.walls.len(), 4);
        assert_eq!(state.players.len(), 2);
        assert_eq!(state.players[0].id, PlayerId::Player1);
        assert!(state.players[0].center.x < state.players[1].center.x);
        assert_eq!(state.ball.cx(), s.court_width / 2.0);
        assert_eq!(state.ball.cy(), s.court_height / 2.0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.wall(WallId::Top).is_some());
        assert!(state.player(&PlayerId::Player2).is_some());
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(Settings::default());
        let b = GameState::new(Settings::default());
        assert_eq!(a.ball.direction(), b.ball.direction());
    }
}
