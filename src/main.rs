use anyhow::Context;
use clap::Parser;
use macroquad::prelude::*;
use sparse_life::{Config, GameState, input, rendering, ui};

fn window_conf(config: &Config) -> Conf {
    let (window_width, window_height) = ui::window_size(config.width, config.height);
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width,
        window_height,
        window_resizable: false,
        ..Default::default()
    }
}

async fn run(mut state: GameState) {
    loop {
        if input::quit_requested() {
            break;
        }

        input::handle_mouse_paint(&mut state, mouse_position());
        state = input::process_keyboard_input(state);

        state = state.tick(get_frame_time());

        rendering::draw_board(&state.life);
        rendering::draw_controls(&state);

        next_frame().await;
    }
    log::info!("exiting at generation {}", state.life.generation());
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse().validate().context("invalid configuration")?;
    let state = GameState::new(&config).context("failed to create board")?;
    log::info!(
        "board {}x{} at {} fps, patterns in {}",
        config.width,
        config.height,
        config.fps,
        config.pattern.display()
    );

    macroquad::Window::from_config(window_conf(&config), run(state));
    Ok(())
}
