mod cell;
mod coord;
mod life;
mod patterns;
pub mod pattern_file;

pub use cell::Cell;
pub use coord::{Coord, NEIGHBOR_OFFSETS};
pub use life::{Life, DEFAULT_DENSITY};
pub use patterns::{Pattern, presets};
