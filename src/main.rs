//! Vector Dodge entry point
//!
//! Headless driver: the autopilot plays a few rounds at the target frame
//! rate while the log reports what happens. A windowed front end would swap
//! `autopilot::steer` for keyboard input and draw `GameState::view()`.

use std::path::Path;

use env_logger::Env;

use vector_dodge::consts::SETTINGS_FILE;
use vector_dodge::sim::{GameEvent, GameState, TickInput, tick};
use vector_dodge::{Clock, FileStore, HighScoreStore, Settings, autopilot};

/// Log a HUD line this often (baseline frames)
const STATUS_EVERY: u64 = 300;

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    log::info!("Vector Dodge (headless) starting...");

    let settings = Settings::load_or_default(Path::new(SETTINGS_FILE));
    let mut store = FileStore::new(&settings.highscore_file);
    let seed = settings.resolve_seed();
    log::info!("Seed {}, high score file {}", seed, store.path().display());

    let mut state = GameState::new(seed, settings.tuning.clone(), store.load());
    let mut clock = Clock::new(settings.target_fps);
    let mut round = 1;
    let mut input = TickInput::default();

    log::info!(
        "Round {} of {} (high score {})",
        round,
        settings.demo_rounds,
        state.high_score()
    );
    loop {
        let dt = clock.tick();
        input.axis = autopilot::steer(&state);
        tick(&mut state, &input, dt, &mut store);
        input.restart = false;

        for event in &state.events {
            match event {
                GameEvent::GameOver { score } => {
                    log::info!("Round {} over: score {}", round, score);
                }
                GameEvent::NewHighScore { score } => {
                    log::info!("New high score {} saved", score);
                }
                _ => {}
            }
        }

        if state.is_game_over() {
            if round >= settings.demo_rounds {
                break;
            }
            round += 1;
            input.restart = true;
            log::info!(
                "Round {} of {} (high score {})",
                round,
                settings.demo_rounds,
                state.high_score()
            );
            continue;
        }

        if state.frames % STATUS_EVERY == 0 {
            let view = state.view();
            log::info!(
                "Score {} | High {} | Enemies {} | Orbs {}{}",
                view.score,
                view.high_score,
                view.enemies.len(),
                view.orbs.len(),
                view.slow_percent
                    .map(|p| format!(" | Time slowed {}%", p))
                    .unwrap_or_default()
            );
            if log::log_enabled!(log::Level::Trace) {
                if let Ok(json) = serde_json::to_string(&view) {
                    log::trace!("{}", json);
                }
            }
        }
    }

    log::info!("Done. Best score: {}", state.high_score());
}
