// Domain layer - sparse simulation engine and pattern format
pub mod domain;
pub mod error;

// Application layer - configuration, persistence and loop state
pub mod application;

// Infrastructure layer - layout, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Coord, Life, Pattern, presets};
pub use application::{Config, GameState};
pub use error::{ConfigError, LifeError, PatternError};
