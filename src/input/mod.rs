use macroquad::prelude::*;

use crate::application::GameState;
use crate::ui::screen_to_board;

/// Left click paints, right click erases; only over the board area
pub fn handle_mouse_paint(state: &mut GameState, mouse_pos: (f32, f32)) {
    let (width, height) = state.life.dimensions();
    let Some((x, y)) = screen_to_board(mouse_pos, width, height) else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        state.paint(x, y);
    } else if is_mouse_button_pressed(MouseButton::Right) {
        state.erase(x, y);
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(state: GameState) -> GameState {
    type KeyAction = (KeyCode, fn(GameState) -> GameState);

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, GameState::toggle_running),
        (KeyCode::N, GameState::step),
        (KeyCode::C, GameState::clear),
        (KeyCode::R, GameState::randomize),
        (KeyCode::S, GameState::save),
        (KeyCode::L, GameState::load),
    ];

    actions.iter().fold(state, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    })
}

/// Whether the user asked to leave the loop
pub fn quit_requested() -> bool {
    is_key_pressed(KeyCode::Escape)
}
