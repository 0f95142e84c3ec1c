use crate::grid::{Cell, GridCatalog, Move};

pub type ScoreType = i64;

/// Flat bitset over the H×W cells. Cloning a board copies a handful of
/// words instead of rehashing a set, which matters on the planner's hot
/// path (up to 4×K clone/step/evaluate cycles per turn).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visited {
    words: Vec<u64>,
    width: usize,
}

impl Visited {
    pub fn new(height: usize, width: usize) -> Self {
        Visited {
            words: vec![0; (height * width).div_ceil(64)],
            width,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> bool {
        let bit = row * self.width + col;
        self.words[bit / 64] >> (bit % 64) & 1 == 1
    }

    pub fn set(&mut self, row: usize, col: usize) {
        let bit = row * self.width + col;
        self.words[bit / 64] |= 1 << (bit % 64);
    }

    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// One simulated trajectory over one candidate grid.
///
/// A trap visit flags the board done for planning, nothing more: the driver
/// keeps stepping it and its position, visited set, turn and score keep
/// evolving. `turn` never clamps.
#[derive(Debug, Clone)]
pub struct Board {
    pub grid_id: usize,
    pub position: (usize, usize),
    visited: Visited,
    pub turn: usize,
    pub score: ScoreType,
    trapped: bool,
}

impl Board {
    pub fn new(catalog: &GridCatalog, grid_id: usize) -> Self {
        let grid = catalog.grid(grid_id);
        let position = grid.start();
        let mut visited = Visited::new(grid.height(), grid.width());
        // The start cell is visited but awards no point: score stays
        // |visited| - 1 for the whole lifetime.
        visited.set(position.0, position.1);
        Board {
            grid_id,
            position,
            visited,
            turn: 0,
            score: 0,
            trapped: false,
        }
    }

    /// Advances the board by one move. The turn counter increments
    /// unconditionally; a wall target leaves everything else untouched.
    pub fn step(&mut self, catalog: &GridCatalog, mv: Move) {
        let (di, dj) = mv.delta();
        let ni = self.position.0.wrapping_add(di);
        let nj = self.position.1.wrapping_add(dj);
        self.turn += 1;
        let grid = catalog.grid(self.grid_id);
        match grid.at(ni, nj) {
            Cell::Wall => {}
            Cell::Trap => {
                // The board lands on the trap and is done for planning.
                // Trap cells are never marked visited and never score.
                self.position = (ni, nj);
                self.trapped = true;
            }
            _ => {
                self.position = (ni, nj);
                if !self.visited.get(ni, nj) {
                    self.visited.set(ni, nj);
                    self.score += 1;
                }
            }
        }
    }

    /// Done as the planner sees it: a trap was visited at some point, or
    /// the turn counter reached the horizon. Purely a predicate over
    /// history; it never blocks further `step` calls.
    pub fn is_done(&self, horizon: usize) -> bool {
        self.trapped || self.turn >= horizon
    }

    /// Read-only probe: would `mv` land on a coin not yet collected?
    /// Extension point for richer evaluators; the default scorer ignores it.
    pub fn peek_bonus(&self, catalog: &GridCatalog, mv: Move) -> bool {
        let (di, dj) = mv.delta();
        let ni = self.position.0.wrapping_add(di);
        let nj = self.position.1.wrapping_add(dj);
        catalog.grid(self.grid_id).at(ni, nj) == Cell::Bonus && !self.visited.get(ni, nj)
    }

    pub fn visited(&self, row: usize, col: usize) -> bool {
        self.visited.get(row, col)
    }

    pub fn visited_count(&self) -> usize {
        self.visited.count()
    }
}

/// Scoring strategy the planner aggregates over. Injectable so that shaped
/// heuristics can be tried without touching the planner or the driver. The
/// catalog is threaded in so evaluators can look at the grid (for example
/// through `peek_bonus`).
pub trait Evaluator {
    fn evaluate(&self, catalog: &GridCatalog, board: &Board) -> ScoreType;
}

/// The default policy: the raw game score, no positional shaping.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameScore;

impl Evaluator for GameScore {
    fn evaluate(&self, _catalog: &GridCatalog, board: &Board) -> ScoreType {
        board.score
    }
}
