use macroquad::prelude::*;

use crate::application::GameState;
use crate::domain::Life;
use crate::ui::{CELL_SIZE, CONTROL_BAR_HEIGHT, CONTROLS_HELP, board_area_height};

const BACKGROUND: Color = WHITE;
const GRID_LINE: Color = Color::new(0.86, 0.86, 0.86, 1.0);
const LIVE_CELL: Color = BLACK;
const BAR_BACKGROUND: Color = Color::new(0.94, 0.94, 0.94, 1.0);
const TEXT: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Draw the board: background, grid lines, then live cells
pub fn draw_board(life: &Life) {
    clear_background(BACKGROUND);

    let (w, h) = life.dimensions();
    let area_width = w as f32 * CELL_SIZE;
    let area_height = board_area_height(h);

    for col in 0..=w {
        let x = col as f32 * CELL_SIZE;
        draw_line(x, 0.0, x, area_height, 1.0, GRID_LINE);
    }
    for row in 0..=h {
        let y = row as f32 * CELL_SIZE;
        draw_line(0.0, y, area_width, y, 1.0, GRID_LINE);
    }

    // Inset by one pixel so grid lines stay visible between neighbors
    for cell in life.live_cells() {
        draw_rectangle(
            cell.x as f32 * CELL_SIZE + 1.0,
            cell.y as f32 * CELL_SIZE + 1.0,
            CELL_SIZE - 1.0,
            CELL_SIZE - 1.0,
            LIVE_CELL,
        );
    }
}

/// Status line text shown under the controls help
pub fn status_line(state: &GameState) -> String {
    let run_state = if state.is_running { "Running" } else { "Paused" };
    format!(
        "Generation: {}    Live cells: {}    FPS: {}    {}",
        state.life.generation(),
        state.life.population(),
        state.fps,
        run_state
    )
}

/// Draw the control bar below the board
pub fn draw_controls(state: &GameState) {
    let top = board_area_height(state.life.height());
    draw_rectangle(0.0, top, screen_width(), CONTROL_BAR_HEIGHT, BAR_BACKGROUND);

    draw_text(CONTROLS_HELP, 10.0, top + 15.0, 16.0, TEXT);

    let status = match &state.message {
        Some(msg) => format!("{}    {}", status_line(state), msg),
        None => status_line(state),
    };
    draw_text(&status, 10.0, top + 32.0, 16.0, TEXT);
}
