mod config;
mod game_state;
pub mod storage;

pub use config::Config;
pub use game_state::GameState;
