//! Court Pong entry point
//!
//! Runs a headless autopilot match and prints the final court.
//!
//! Usage: `court-pong [settings.json]`

use court_pong::Settings;
use court_pong::consts::SIM_DT;
use court_pong::renderer::{TextSurface, draw_state};
use court_pong::sim::{GameEvent, GamePhase, GameState, autopilot, tick_fixed};

/// Simulated frame length (60 Hz display)
const FRAME_DT: f32 = 1000.0 / 60.0;
/// Stop after this many frames even without a winner (10 minutes of play)
const MAX_FRAMES: u32 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Court Pong (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    log::info!("Game initialized with seed: {}", settings.seed);

    let mut state = GameState::new(settings);
    let mut frames = 0;
    let mut rallies = 0u32;

    while !state.is_over() && frames < MAX_FRAMES {
        let input = autopilot(&state);
        tick_fixed(&mut state, &input, FRAME_DT);
        frames += 1;

        for event in state.drain_events() {
            match event {
                GameEvent::PaddleHit(_) => rallies += 1,
                GameEvent::Scored(player) => {
                    log::info!("Point to {} after {} paddle hits", player, rallies);
                    rallies = 0;
                }
                GameEvent::WallBounce(_) | GameEvent::GameOver(_) => {}
            }
        }
    }

    let mut surface = TextSurface::for_state(&state, 81, 31);
    draw_state(&state, &mut surface);
    println!("{}", surface.render());

    let seconds = frames as f32 * FRAME_DT / 1000.0;
    match &state.phase {
        GamePhase::GameOver { winner } => println!(
            "{} wins {} - {} after {:.1}s ({} ticks of {:.2}ms)",
            winner, state.score.left, state.score.right, seconds, state.time_ticks, SIM_DT
        ),
        GamePhase::Playing => println!(
            "No winner after {:.1}s, score {} - {}",
            seconds, state.score.left, state.score.right
        ),
    }
}
