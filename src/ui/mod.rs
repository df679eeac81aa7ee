//! Window layout: a board area of `CELL_SIZE` squares with a control bar
//! underneath.

pub const CELL_SIZE: f32 = 15.0;
pub const CONTROL_BAR_HEIGHT: f32 = 40.0;

pub const CONTROLS_HELP: &str =
    "Space: Play/Pause  N: Step  C: Clear  R: Random  S: Save  L: Load  Esc: Quit";

/// Pixel size of the window for a board of the given dimensions
pub fn window_size(board_width: u32, board_height: u32) -> (i32, i32) {
    let width = board_width as f32 * CELL_SIZE;
    let height = board_height as f32 * CELL_SIZE + CONTROL_BAR_HEIGHT;
    (width as i32, height as i32)
}

/// Height in pixels of the board area (control bar excluded)
pub fn board_area_height(board_height: u32) -> f32 {
    board_height as f32 * CELL_SIZE
}

/// Convert a cursor position to board coordinates.
/// Returns `None` over the control bar or anywhere off the board.
pub fn screen_to_board(
    mouse_pos: (f32, f32),
    board_width: u32,
    board_height: u32,
) -> Option<(i32, i32)> {
    let (mx, my) = mouse_pos;
    if mx < 0.0 || my < 0.0 || my >= board_area_height(board_height) {
        return None;
    }

    let x = (mx / CELL_SIZE) as i32;
    let y = (my / CELL_SIZE) as i32;
    (x < board_width as i32 && y < board_height as i32).then_some((x, y))
}
