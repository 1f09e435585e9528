use log::{error, info, trace};
use macroquad::prelude::*;

use tile_snake::consts::{FRAME_MILLIS, SCREEN_HEIGHT, SCREEN_WIDTH};
use tile_snake::frontend::{self, Frontend, frame_delay};
use tile_snake::render::MacroquadFrontend;
use tile_snake::{GameConfig, GameContext, GameError, GameState};

fn window_conf() -> Conf {
    Conf {
        window_title: "Snake".to_owned(),
        window_width: SCREEN_WIDTH,
        window_height: SCREEN_HEIGHT,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), GameError> {
    let config = GameConfig::default();
    info!("starting: {}", serde_json::to_string(&config)?);

    let mut ctx = GameContext::new(config);
    let mut game = GameState::new(&mut ctx)?;
    let mut window = MacroquadFrontend::new();
    let mut summary_logged = false;

    loop {
        let start = window.now_millis();

        let report = game.tick(&mut ctx);
        trace!("tick: {report:?}");
        if !game.is_running() && !summary_logged {
            info!("final state: {}", serde_json::to_string(&game.summary())?);
            summary_logged = true;
        }

        frontend::draw_state(&mut window, &ctx, &game);
        next_frame().await;

        // Input read now steers the next tick.
        let input = window.poll_events();
        if input.quit_requested {
            info!("quit requested, score {}", game.score());
            return Ok(());
        }
        if let Some(direction) = input.direction {
            game.steer(direction);
        }

        let now = window.now_millis();
        let delay = frame_delay(start, now, FRAME_MILLIS);
        if delay == 0 {
            trace!("frame over budget by {} ms", now.saturating_sub(start + FRAME_MILLIS));
        }
        window.wait_until(now + delay);
    }
}
