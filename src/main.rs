//! Squishy Sprite entry point
//!
//! Owns the window and the game loop: input, simulation tick, draw, then wait
//! out the rest of the frame budget.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::IVec2;
use macroquad::miniquad::conf::Platform;
use macroquad::prelude::{Conf, KeyCode, is_key_down, next_frame, screen_height, screen_width};

use squishy_sprite::Settings;
use squishy_sprite::consts::TARGET_FPS;
use squishy_sprite::platform::FrameClock;
use squishy_sprite::renderer::{Assets, SceneRenderer};
use squishy_sprite::sim::{GameEvent, GameState, TickInput, tick};

fn window_conf() -> Conf {
    let settings = Settings::default();
    Conf {
        window_title: settings.window_title,
        window_width: settings.window_width,
        window_height: settings.window_height,
        window_resizable: true,
        // FrameClock paces the loop; vsync would block a second time
        platform: Platform {
            swap_interval: Some(0),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Sample the arrow keys once for this tick
fn read_input() -> TickInput {
    TickInput {
        left: is_key_down(KeyCode::Left),
        right: is_key_down(KeyCode::Right),
        up: is_key_down(KeyCode::Up),
        down: is_key_down(KeyCode::Down),
    }
}

fn window_size() -> IVec2 {
    IVec2::new(screen_width() as i32, screen_height() as i32)
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn log_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::Spawned { id, kind } => {
                log::debug!("Spawned {} obstacle {}", kind.as_str(), id)
            }
            GameEvent::ScoreReset { id, lost } => {
                log::info!("Hazard {} reset the score (lost {})", id, lost)
            }
            GameEvent::PlacementFallback { id } => {
                log::debug!("Obstacle {} placed at center, no free spot", id)
            }
            other => log::debug!("{:?}", other),
        }
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::init();
    log::info!("Squishy Sprite starting...");

    let settings = Settings::default();
    log::info!("Settings: {}", settings.to_json());

    let assets = match Assets::load(&settings).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let seed = settings.effective_seed(time_seed());
    let mut state = GameState::new(seed, window_size(), assets.aspects());
    log::info!("Game initialized with seed: {}", state.seed);

    let renderer = SceneRenderer::new(&settings);
    let mut clock = FrameClock::new(TARGET_FPS);

    loop {
        let size = window_size();
        if size != state.viewport {
            log::info!("Window resized to {}x{}", size.x, size.y);
            state.resize(size);
        }

        let input = read_input();
        tick(&mut state, &input, clock.now_ms());
        log_events(&state.events);

        renderer.render(&state, &assets, &settings, clock.fps());

        clock.wait();
        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_conf_leaves_pacing_to_frame_clock() {
        let conf = window_conf();
        assert_eq!(conf.platform.swap_interval, Some(0));
        assert!(conf.window_resizable);
    }
}
