use std::path::PathBuf;

use crate::domain::Life;
use crate::error::LifeError;

use super::{Config, storage};

/// GameState orchestrates the simulation.
/// Every control the shell exposes is a method here, so the frame loop
/// only maps input events to calls.
pub struct GameState {
    pub life: Life,
    pub is_running: bool,
    pub fps: u32,
    pub update_timer: f32,
    pub pattern_path: PathBuf,
    /// Outcome of the last save/load, shown in the status bar
    pub message: Option<String>,
}

impl GameState {
    /// Build the engine described by a validated config. Starts paused.
    pub fn new(config: &Config) -> Result<Self, LifeError> {
        let life = match config.seed {
            Some(seed) => Life::with_seed(config.width, config.height, seed)?,
            None => Life::new(config.width, config.height)?,
        };
        Ok(Self {
            life,
            is_running: false,
            fps: config.fps,
            update_timer: 0.0,
            pattern_path: config.pattern.clone(),
            message: None,
        })
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Advance exactly one generation, paused or not
    pub fn step(mut self) -> Self {
        self.life.advance();
        self
    }

    pub fn clear(mut self) -> Self {
        self.life.clear();
        self
    }

    pub fn randomize(mut self) -> Self {
        self.life.randomize_default();
        log::info!("random fill: {} live cells", self.life.population());
        self
    }

    pub fn save(mut self) -> Self {
        self.message = Some(match storage::save_pattern(&self.life, &self.pattern_path) {
            Ok(()) => {
                log::info!(
                    "saved {} cells to {}",
                    self.life.population(),
                    self.pattern_path.display()
                );
                format!("Saved {}", self.pattern_path.display())
            }
            Err(err) => {
                log::warn!("save failed: {err}");
                format!("Save failed: {err}")
            }
        });
        self
    }

    /// Load the pattern file. A failed load leaves the board cleared.
    pub fn load(mut self) -> Self {
        self.message = Some(match storage::load_pattern(&mut self.life, &self.pattern_path) {
            Ok(()) => {
                log::info!(
                    "loaded {} cells from {}",
                    self.life.population(),
                    self.pattern_path.display()
                );
                format!("Loaded {}", self.pattern_path.display())
            }
            Err(err) => {
                log::warn!("load failed: {err}");
                format!("Load failed: {err}")
            }
        });
        self
    }

    /// Bring a board cell alive; off-board coordinates are ignored
    pub fn paint(&mut self, x: i32, y: i32) {
        self.life.try_set_alive(x, y);
    }

    /// Kill a board cell; off-board coordinates are ignored
    pub fn erase(&mut self, x: i32, y: i32) {
        self.life.try_set_dead(x, y);
    }

    /// Update simulation by one frame.
    /// Runs at most one generation per `1 / fps` seconds while running.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.fps as f32;

        if self.update_timer >= update_interval {
            self.life.advance();
            log::trace!(
                "generation {}: {} live cells",
                self.life.generation(),
                self.life.population()
            );
            self.update_timer = 0.0;
        }

        self
    }
}
