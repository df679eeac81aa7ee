use super::Life;

/// A named shape that can be stamped onto a board
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: i32,
    pub height: i32,
    pub cells: Vec<(i32, i32)>,  // Offsets from the pattern's top-left corner
}

impl Pattern {
    /// Create a new pattern from live cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(i32, i32)>) -> Self {
        let width = cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp the pattern with its top-left corner at `(x, y)`.
    /// Cells that fall off the board are skipped; returns how many landed.
    pub fn place_on(&self, life: &mut Life, x: i32, y: i32) -> usize {
        self.cells
            .iter()
            .filter(|&&(dx, dy)| life.try_set_alive(x + dx, y + dy))
            .count()
    }
}

/// Small library of classic shapes
pub mod presets {
    use super::*;

    /// Glider - moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ]
        )
    }

    /// Lightweight spaceship, travels left
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Spaceship (period 4)",
            vec![
                (1, 0), (4, 0),
                (0, 1),
                (0, 2), (4, 2),
                (0, 3), (1, 3), (2, 3), (3, 3),
            ]
        )
    }

    /// R-pentomino - long-lived methuselah, good for stressing advance
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ]
        )
    }

    /// Block - simplest still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            glider(),
            blinker(),
            toad(),
            beacon(),
            lwss(),
            r_pentomino(),
            block(),
        ]
    }
}
