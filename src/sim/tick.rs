//! Frame stepping
//!
//! Each tick moves the paddles, advances the ball, checks it against the top and
//! bottom walls and both paddles, then checks whether a point was scored.

use super::state::{GameEvent, GamePhase, GameState, PlayerId};
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Paddle intents for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left paddle: -1 = up, 0 = stop, 1 = down
    pub left: i8,
    /// Right paddle: -1 = up, 0 = stop, 1 = down
    pub right: i8,
}

/// Advance the match by `elapsed` milliseconds
pub fn tick(state: &mut GameState, input: &TickInput, elapsed: f32) {
    if state.is_over() {
        return;
    }
    state.time_ticks += 1;

    move_paddles(state, input, elapsed);
    state.ball.advance(elapsed);
    check_walls(state);
    check_paddles(state);
    check_scoring(state);
}

/// Advance by a whole frame in fixed `SIM_DT` substeps
///
/// The final substep takes whatever remains. Time beyond `MAX_SUBSTEPS` steps is
/// dropped. Returns the number of substeps run.
pub fn tick_fixed(state: &mut GameState, input: &TickInput, frame_dt: f32) -> u32 {
    let mut remaining = frame_dt;
    let mut substeps = 0;
    while remaining > 0.0 && substeps < MAX_SUBSTEPS && !state.is_over() {
        let dt = remaining.min(SIM_DT);
        remaining -= dt;
        tick(state, input, dt);
        substeps += 1;
    }
    substeps
}

fn move_paddles(state: &mut GameState, input: &TickInput, elapsed: f32) {
    let speed = state.settings.paddle_speed;
    let max_y = state.settings.court_height;
    for paddle in &mut state.players {
        let dir = match paddle.id {
            PlayerId::Player1 => input.left,
            PlayerId::Player2 => input.right,
            PlayerId::Other(_) => 0,
        };
        if dir != 0 {
            paddle.move_vertical(dir, speed, elapsed, 0.0, max_y);
        }
    }
}

fn check_walls(state: &mut GameState) {
    // Side walls are scoring lines; the ball passes through them
    for wall in state.walls.iter().filter(|w| w.id.is_horizontal()) {
        if state.ball.collides_with_wall(wall) {
            let before = state.ball.direction();
            state.ball.on_wall_collision(wall.id);
            if state.ball.direction() != before {
                log::debug!("Ball bounced off {} wall at tick {}", wall.id, state.time_ticks);
                state.events.push(GameEvent::WallBounce(wall.id));
            }
        }
    }
}

fn check_paddles(state: &mut GameState) {
    for paddle in &state.players {
        if state.ball.collides_with_player(paddle) {
            let before = state.ball.direction();
            state.ball.on_player_collision(&paddle.id);
            if state.ball.direction() != before {
                log::debug!("Ball hit {} paddle at tick {}", paddle.id, state.time_ticks);
                state.events.push(GameEvent::PaddleHit(paddle.id.clone()));
            }
        }
    }
}

fn check_scoring(state: &mut GameState) {
    let scorer = if state.ball.cx() < 0.0 {
        PlayerId::Player2
    } else if state.ball.cx() > state.settings.court_width {
        PlayerId::Player1
    } else {
        return;
    };

    state.score.award(&scorer);
    log::info!(
        "{} scores ({} - {})",
        scorer,
        state.score.left,
        state.score.right
    );
    let winner = state.score.winner(&scorer, state.settings.win_score);
    state.events.push(GameEvent::Scored(scorer));

    match winner {
        Some(winner) => {
            log::info!("Game over, {} wins", winner);
            state.events.push(GameEvent::GameOver(winner.clone()));
            state.phase = GamePhase::GameOver { winner };
        }
        None => state.reset_ball(),
    }
}

/// Simple tracking AI for both paddles
///
/// A paddle follows the ball while it is heading its way and drifts back to the
/// middle otherwise.
pub fn autopilot(state: &GameState) -> TickInput {
    let ball = &state.ball;
    let mid_y = state.settings.court_height / 2.0;
    let mut input = TickInput::default();

    for paddle in &state.players {
        let incoming = match paddle.id {
            PlayerId::Player1 => ball.velocity().x < 0.0,
            PlayerId::Player2 => ball.velocity().x > 0.0,
            PlayerId::Other(_) => continue,
        };
        let target = if incoming { ball.cy() } else { mid_y };
        let dead_zone = paddle.height / 4.0;
        let dir = if target < paddle.center.y - dead_zone {
            -1
        } else if target > paddle.center.y + dead_zone {
            1
        } else {
            0
        };
        match paddle.id {
            PlayerId::Player1 => input.left = dir,
            _ => input.right = dir,
        }
    }

    input
}
