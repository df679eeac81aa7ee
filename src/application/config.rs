use std::path::PathBuf;

use clap::Parser;

use crate::error::ConfigError;

/// Command line options for the interactive simulator
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Conway's Game of Life", long_about = None)]
pub struct Config {
    /// Width of the game board in cells
    #[arg(long, default_value_t = 60)]
    pub width: u32,

    /// Height of the game board in cells
    #[arg(long, default_value_t = 30)]
    pub height: u32,

    /// Frames (and generations while running) per second
    #[arg(long, default_value_t = 10)]
    pub fps: u32,

    /// File used by the save and load keys
    #[arg(long, value_name = "PATH", default_value = "patterns.txt")]
    pub pattern: PathBuf,

    /// Seed for the random fill, for reproducible sessions
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 60,
            height: 30,
            fps: 10,
            pattern: PathBuf::from("patterns.txt"),
            seed: None,
        }
    }
}

impl Config {
    /// Reject non-positive sizes and rates before anything is built
    pub fn validate(self) -> Result<Self, ConfigError> {
        let fields = [("width", self.width), ("height", self.height), ("fps", self.fps)];
        match fields.into_iter().find(|&(_, value)| value == 0) {
            Some((name, value)) => Err(ConfigError::NonPositive { name, value }),
            None => Ok(self),
        }
    }
}
