//! Sparse Game of Life engine.
//!
//! Only live coordinates are stored. Advancing a generation examines the
//! live cells and their neighbors, so the cost tracks population rather
//! than board area.

use std::collections::HashSet;

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::{Cell, Coord, pattern_file};
use crate::error::{LifeError, PatternError};

/// Fraction of cells set alive by [`Life::randomize_default`].
pub const DEFAULT_DENSITY: f64 = 0.3;

/// Bounded, non-wrapping Game of Life board.
#[derive(Clone)]
pub struct Life {
    width: u32,
    height: u32,
    live: HashSet<Coord>,
    generation: u64,
    rng: StdRng,
}

impl Life {
    /// Create an empty board with an OS-seeded random source
    pub fn new(width: u32, height: u32) -> Result<Self, LifeError> {
        Self::with_rng(width, height, StdRng::from_os_rng())
    }

    /// Create an empty board whose `randomize` output is reproducible
    pub fn with_seed(width: u32, height: u32, seed: u64) -> Result<Self, LifeError> {
        Self::with_rng(width, height, StdRng::seed_from_u64(seed))
    }

    /// Create an empty board drawing randomness from `rng`
    pub fn with_rng(width: u32, height: u32, rng: StdRng) -> Result<Self, LifeError> {
        let max = i32::MAX as u32;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            live: HashSet::new(),
            generation: 0,
            rng,
        })
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get board dimensions
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of generations computed since the last clear or load
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Whether `(x, y)` lies on the board
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn is_alive(&self, x: i32, y: i32) -> bool {
        self.live.contains(&Coord::new(x, y))
    }

    /// Iterate over live cells in no particular order
    pub fn live_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.live.iter().copied()
    }

    /// Live cells in ascending `(x, y)` order
    pub fn sorted_cells(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.live_cells().collect();
        cells.sort_unstable();
        cells
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.live.clear();
        self.generation = 0;
    }

    /// Clear, then bring each board cell alive independently with
    /// `probability` (clamped into `[0, 1]`).
    pub fn randomize(&mut self, probability: f64) {
        self.clear();
        let p = probability.clamp(0.0, 1.0);
        // Board dimensions fit in i32, checked at construction.
        let (w, h) = (self.width as i32, self.height as i32);
        for y in 0..h {
            for x in 0..w {
                if self.rng.random::<f64>() < p {
                    self.live.insert(Coord::new(x, y));
                }
            }
        }
        log::debug!("randomized {}x{} board: {} live cells", w, h, self.live.len());
    }

    /// Randomize with [`DEFAULT_DENSITY`]
    pub fn randomize_default(&mut self) {
        self.randomize(DEFAULT_DENSITY);
    }

    /// Count live cells among the 8 neighbors of `(x, y)`.
    /// Neighbor coordinates are looked up as-is, without bounds checks.
    pub fn count_neighbors(&self, x: i32, y: i32) -> u8 {
        Coord::new(x, y)
            .neighbors()
            .filter(|n| self.live.contains(n))
            .count() as u8
    }

    /// Compute the next generation and replace the live set.
    ///
    /// Candidates are the live cells plus their neighbors; a dead cell
    /// with no live neighbor cannot be born, so nothing else needs to be
    /// visited. Candidates off the board are dropped, which gives the
    /// board closed, non-wrapping edges.
    pub fn advance(&mut self) {
        let candidates: HashSet<Coord> = self
            .live
            .iter()
            .flat_map(|&c| std::iter::once(c).chain(c.neighbors()))
            .collect();

        let next: HashSet<Coord> = candidates
            .into_iter()
            .filter(|c| self.contains(c.x, c.y))
            .filter(|c| {
                let current = Cell::from(self.live.contains(c));
                current.evolve(self.count_neighbors(c.x, c.y)).is_alive()
            })
            .collect();

        self.live = next;
        self.generation += 1;
    }

    /// Mark `(x, y)` alive.
    ///
    /// The coordinate is not checked: callers must ensure it lies on the
    /// board (see [`Life::contains`]) or use [`Life::try_set_alive`].
    pub fn set_alive(&mut self, x: i32, y: i32) {
        self.live.insert(Coord::new(x, y));
    }

    /// Mark `(x, y)` dead. Removing a dead cell is a no-op.
    pub fn set_dead(&mut self, x: i32, y: i32) {
        self.live.remove(&Coord::new(x, y));
    }

    /// Bounds-checked [`Life::set_alive`]. Returns whether the edit applied.
    pub fn try_set_alive(&mut self, x: i32, y: i32) -> bool {
        let inside = self.contains(x, y);
        if inside {
            self.set_alive(x, y);
        }
        inside
    }

    /// Bounds-checked [`Life::set_dead`]. Returns whether the edit applied.
    pub fn try_set_dead(&mut self, x: i32, y: i32) -> bool {
        let inside = self.contains(x, y);
        if inside {
            self.set_dead(x, y);
        }
        inside
    }

    /// Pattern file text for the current live set, stamped with the time.
    /// The generation counter is not included.
    pub fn serialize(&self) -> String {
        self.serialize_with_header(&pattern_file::timestamp_header())
    }

    pub fn serialize_with_header(&self, header: &str) -> String {
        pattern_file::encode(self.live_cells(), header)
    }

    /// Replace the live set with the cells listed in `text`.
    ///
    /// The board is cleared first. If any line is malformed the error is
    /// returned and the board stays empty.
    pub fn deserialize(&mut self, text: &str) -> Result<(), PatternError> {
        self.clear();
        let cells = pattern_file::decode(text)?;
        self.live.extend(cells);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;

    fn board(w: u32, h: u32) -> Life {
        Life::with_seed(w, h, 7).unwrap()
    }

    fn cells(life: &Life) -> HashSet<Coord> {
        life.live_cells().collect()
    }

    fn coords(list: &[(i32, i32)]) -> HashSet<Coord> {
        list.iter().copied().map(Coord::from).collect()
    }

    /// Full-board scan used to cross-check the sparse update
    fn dense_step(life: &Life) -> HashSet<Coord> {
        let mut next = HashSet::new();
        for y in 0..life.height() as i32 {
            for x in 0..life.width() as i32 {
                let current = Cell::from(life.is_alive(x, y));
                if current.evolve(life.count_neighbors(x, y)).is_alive() {
                    next.insert(Coord::new(x, y));
                }
            }
        }
        next
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert_eq!(
            Life::new(0, 10).err(),
            Some(LifeError::InvalidDimensions { width: 0, height: 10 })
        );
        assert!(Life::new(10, 0).is_err());
        assert!(Life::new(1, 1).is_ok());
    }

    #[test]
    fn test_new_is_empty() {
        let life = board(60, 30);
        assert_eq!(life.dimensions(), (60, 30));
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let mut life = board(20, 20);
        life.advance();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 1);
        life.advance();
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_count_neighbors() {
        let mut life = board(10, 10);
        for (x, y) in [(4, 5), (5, 5), (6, 5)] {
            life.set_alive(x, y);
        }
        assert_eq!(life.count_neighbors(5, 5), 2);
        assert_eq!(life.count_neighbors(5, 4), 3);
        assert_eq!(life.count_neighbors(5, 6), 3);
        assert_eq!(life.count_neighbors(0, 0), 0);
    }

    #[test]
    fn test_count_neighbors_full_ring() {
        let mut life = board(5, 5);
        life.randomize(1.0);
        assert_eq!(life.count_neighbors(2, 2), 8);
        assert_eq!(life.count_neighbors(0, 0), 3);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut life = board(10, 10);
        presets::blinker().place_on(&mut life, 4, 4);
        let horizontal = coords(&[(4, 5), (5, 5), (6, 5)]);
        let vertical = coords(&[(5, 4), (5, 5), (5, 6)]);
        assert_eq!(cells(&life), horizontal);

        for _ in 0..5 {
            life.advance();
            assert_eq!(cells(&life), vertical);
            life.advance();
            assert_eq!(cells(&life), horizontal);
        }
        assert_eq!(life.generation(), 10);
    }

    #[test]
    fn test_block_still_life() {
        let mut life = board(10, 10);
        presets::block().place_on(&mut life, 4, 4);
        let before = cells(&life);
        for _ in 0..50 {
            life.advance();
            assert_eq!(cells(&life), before);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut life = board(40, 40);
        presets::glider().place_on(&mut life, 10, 10);
        let start = cells(&life);

        for _ in 0..4 {
            life.advance();
        }

        let shifted: HashSet<Coord> = start.iter().map(|c| c.offset(1, 1)).collect();
        assert_eq!(cells(&life), shifted);
        assert_eq!(life.generation(), 4);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let mut life = board(10, 10);
        // Vertical blinker on the left edge would need x = -1 to oscillate
        for y in 4..=6 {
            life.set_alive(0, y);
        }
        life.advance();
        assert_eq!(cells(&life), coords(&[(0, 5), (1, 5)]));
    }

    #[test]
    fn test_corner_block_never_escapes() {
        let mut life = board(2, 2);
        life.set_alive(0, 0);
        life.set_alive(1, 0);
        life.set_alive(0, 1);
        for _ in 0..10 {
            life.advance();
            assert!(life.live_cells().all(|c| life.contains(c.x, c.y)));
        }
        // L-tromino completes to a block and stays
        assert_eq!(life.population(), 4);
    }

    #[test]
    fn test_cells_stay_on_board() {
        let mut life = board(16, 9);
        life.randomize(0.5);
        for _ in 0..30 {
            life.advance();
            for c in life.live_cells() {
                assert!(c.x >= 0 && c.y >= 0 && c.x < 16 && c.y < 9, "escaped: {c}");
            }
        }
    }

    #[test]
    fn test_sparse_matches_dense_scan() {
        let mut life = board(37, 23);
        life.randomize(0.35);
        for _ in 0..25 {
            let expected = dense_step(&life);
            life.advance();
            assert_eq!(cells(&life), expected, "mismatch at generation {}", life.generation());
        }
    }

    #[test]
    fn test_randomize_extremes() {
        let mut life = board(12, 7);
        life.randomize(0.0);
        assert_eq!(life.population(), 0);

        life.randomize(1.0);
        assert_eq!(life.population(), 12 * 7);
        assert!(life.is_alive(0, 0));
        assert!(life.is_alive(11, 6));
    }

    #[test]
    fn test_randomize_clamps_probability() {
        let mut life = board(8, 8);
        life.randomize(-2.0);
        assert_eq!(life.population(), 0);
        life.randomize(5.0);
        assert_eq!(life.population(), 64);
    }

    #[test]
    fn test_randomize_resets_generation() {
        let mut life = board(8, 8);
        life.advance();
        life.randomize_default();
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_seeded_randomize_is_reproducible() {
        let mut a = Life::with_seed(30, 30, 42).unwrap();
        let mut b = Life::with_seed(30, 30, 42).unwrap();
        a.randomize_default();
        b.randomize_default();
        assert_eq!(cells(&a), cells(&b));
        assert!(a.population() > 0);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut life = board(10, 10);
        life.randomize(0.5);
        life.advance();
        life.advance();
        life.clear();
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_toggle_idempotent() {
        let mut life = board(10, 10);
        life.set_alive(3, 3);
        life.set_alive(3, 3);
        assert_eq!(cells(&life), coords(&[(3, 3)]));

        life.set_dead(7, 7);
        assert_eq!(cells(&life), coords(&[(3, 3)]));

        life.set_dead(3, 3);
        life.set_dead(3, 3);
        assert_eq!(life.population(), 0);
    }

    #[test]
    fn test_guarded_toggle_checks_bounds() {
        let mut life = board(10, 10);
        assert!(!life.try_set_alive(-1, 0));
        assert!(!life.try_set_alive(10, 0));
        assert!(!life.try_set_alive(0, 10));
        assert_eq!(life.population(), 0);

        assert!(life.try_set_alive(9, 9));
        assert!(life.is_alive(9, 9));
        assert!(life.try_set_dead(9, 9));
        assert!(!life.is_alive(9, 9));
    }

    #[test]
    fn test_unchecked_toggle_allows_off_board() {
        let mut life = board(4, 4);
        life.set_alive(-1, 2);
        assert!(life.is_alive(-1, 2));
        // Off-board cells are counted but never survive an advance
        assert_eq!(life.count_neighbors(0, 2), 1);
        life.advance();
        assert!(!life.is_alive(-1, 2));
    }

    #[test]
    fn test_serialize_is_sorted() {
        let mut life = board(10, 10);
        for (x, y) in [(5, 1), (0, 9), (5, 0), (2, 2)] {
            life.set_alive(x, y);
        }
        let text = life.serialize_with_header("test");
        assert_eq!(text, "# test\n0,9\n2,2\n5,0\n5,1\n");
        assert!(life.serialize().starts_with("# Pattern saved at "));
    }

    #[test]
    fn test_serialize_round_trip() {
        let mut life = board(25, 25);
        life.randomize(0.4);
        life.advance();
        let before = cells(&life);

        let text = life.serialize();
        life.deserialize(&text).unwrap();
        assert_eq!(cells(&life), before);
        assert_eq!(life.generation(), 0);
    }

    #[test]
    fn test_deserialize_failure_leaves_board_cleared() {
        let mut life = board(10, 10);
        life.randomize(0.5);
        life.advance();

        let err = life.deserialize("# header\n1,1\n2,x\n3,3\n").unwrap_err();
        assert!(matches!(err, PatternError::Parse { line: 3, .. }));
        assert_eq!(life.population(), 0);
        assert_eq!(life.generation(), 0);
    }
}
