use crate::config::Config;
use proconio::input;
use proconio::marker::Chars;
use proconio::source::once::OnceSource;
use thiserror::Error;

/// One cell of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Plain passable cell.
    Floor,
    /// Impassable.
    Wall,
    /// Entering one flags the board as done for planning; simulation goes on.
    Trap,
    /// Passable cell carrying a coin; interesting to richer evaluators.
    Bonus,
    /// The agent's initial cell. Behaves like floor afterwards.
    Start,
}

impl Cell {
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Floor),
            '#' => Some(Cell::Wall),
            'x' => Some(Cell::Trap),
            'o' => Some(Cell::Bonus),
            '@' => Some(Cell::Start),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Cell::Floor => '.',
            Cell::Wall => '#',
            Cell::Trap => 'x',
            Cell::Bonus => 'o',
            Cell::Start => '@',
        }
    }
}

/// The four moves. The declaration order of `ALL` is load-bearing: the
/// planner breaks aggregate ties in favor of the earliest move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Left,
    Right,
    Up,
    Down,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Left, Move::Right, Move::Up, Move::Down];

    /// Row/column delta in wrapping arithmetic (`!0` is -1 on usize).
    /// Bordered grids guarantee the target stays in bounds; on malformed
    /// input the wrapped index faults instead of silently wrapping around.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Move::Left => (0, !0),
            Move::Right => (0, 1),
            Move::Up => (!0, 0),
            Move::Down => (1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Move::Left => 'L',
            Move::Right => 'R',
            Move::Up => 'U',
            Move::Down => 'D',
        }
    }

    pub fn from_char(c: char) -> Option<Move> {
        match c {
            'L' => Some(Move::Left),
            'R' => Some(Move::Right),
            'U' => Some(Move::Up),
            'D' => Some(Move::Down),
            _ => None,
        }
    }
}

/// Malformed input. All of these are fatal: the core assumes well-formed,
/// bordered grids and performs no further checking at simulation time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("grid {grid}: unknown cell character '{ch}' at ({row}, {col})")]
    UnknownCell {
        grid: usize,
        ch: char,
        row: usize,
        col: usize,
    },
    #[error("grid {grid}: row {row} has {len} cells, expected {expected}")]
    BadRowLength {
        grid: usize,
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("grid {grid}: expected {expected} rows, got {got}")]
    BadRowCount {
        grid: usize,
        expected: usize,
        got: usize,
    },
    #[error("grid {grid}: no start cell")]
    MissingStart { grid: usize },
    #[error("grid {grid}: more than one start cell")]
    DuplicateStart { grid: usize },
    #[error("grid {grid}: border cell ({row}, {col}) is not a wall")]
    OpenBorder { grid: usize, row: usize, col: usize },
}

/// One immutable H×W layout, stored row-major. Boards reference grids by id
/// through the catalog and never copy them.
#[derive(Debug, Clone)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
    start: (usize, usize),
}

impl Grid {
    pub fn from_rows(
        grid_id: usize,
        rows: &[Vec<char>],
        height: usize,
        width: usize,
    ) -> Result<Grid, ParseError> {
        if rows.len() != height {
            return Err(ParseError::BadRowCount {
                grid: grid_id,
                expected: height,
                got: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(height * width);
        let mut start = None;
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::BadRowLength {
                    grid: grid_id,
                    row: i,
                    len: row.len(),
                    expected: width,
                });
            }
            for (j, &ch) in row.iter().enumerate() {
                let cell = Cell::from_char(ch).ok_or(ParseError::UnknownCell {
                    grid: grid_id,
                    ch,
                    row: i,
                    col: j,
                })?;
                let on_border = i == 0 || i == height - 1 || j == 0 || j == width - 1;
                if on_border && cell != Cell::Wall {
                    return Err(ParseError::OpenBorder {
                        grid: grid_id,
                        row: i,
                        col: j,
                    });
                }
                if cell == Cell::Start {
                    if start.replace((i, j)).is_some() {
                        return Err(ParseError::DuplicateStart { grid: grid_id });
                    }
                }
                cells.push(cell);
            }
        }
        let start = start.ok_or(ParseError::MissingStart { grid: grid_id })?;
        Ok(Grid {
            height,
            width,
            cells,
            start,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at (row, col). Faults on out-of-range indices.
    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.width + col]
    }

    pub fn start(&self) -> (usize, usize) {
        self.start
    }
}

/// The immutable collection of all N candidate layouts.
#[derive(Debug, Clone)]
pub struct GridCatalog {
    grids: Vec<Grid>,
}

impl GridCatalog {
    pub fn new(grids: Vec<Grid>) -> Self {
        GridCatalog { grids }
    }

    /// Parses the contest input: one header line (five integers, read and
    /// discarded — the config rules), then `n_grids` blocks of `height`
    /// rows of `width` cells each.
    pub fn parse(input: &str, cfg: &Config) -> Result<GridCatalog, ParseError> {
        let mut src = OnceSource::from(input);
        input! {
            from &mut src,
            _n: usize,
            _k: usize,
            _h: usize,
            _w: usize,
            _t: usize,
            rows: [Chars; cfg.n_grids * cfg.height],
        }
        let mut grids = Vec::with_capacity(cfg.n_grids);
        for (grid_id, block) in rows.chunks(cfg.height).enumerate() {
            grids.push(Grid::from_rows(grid_id, block, cfg.height, cfg.width)?);
        }
        Ok(GridCatalog { grids })
    }

    pub fn grid(&self, id: usize) -> &Grid {
        &self.grids[id]
    }

    pub fn len(&self) -> usize {
        self.grids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(lines: &[&str]) -> Vec<Vec<char>> {
        lines.iter().map(|l| l.chars().collect()).collect()
    }

    #[test]
    fn parses_a_valid_grid() {
        let g = Grid::from_rows(0, &rows(&["#####", "#.o.#", "#.@x#", "#####"]), 4, 5).unwrap();
        assert_eq!(g.start(), (2, 2));
        assert_eq!(g.at(1, 2), Cell::Bonus);
        assert_eq!(g.at(2, 3), Cell::Trap);
        assert_eq!(g.at(0, 0), Cell::Wall);
        assert_eq!(g.at(1, 1), Cell::Floor);
    }

    #[test]
    fn rejects_malformed_grids() {
        let e = Grid::from_rows(3, &rows(&["###", "#?#", "###"]), 3, 3).unwrap_err();
        assert_eq!(
            e,
            ParseError::UnknownCell {
                grid: 3,
                ch: '?',
                row: 1,
                col: 1
            }
        );
        let e = Grid::from_rows(0, &rows(&["###", "#@", "###"]), 3, 3).unwrap_err();
        assert_eq!(
            e,
            ParseError::BadRowLength {
                grid: 0,
                row: 1,
                len: 2,
                expected: 3
            }
        );
        let e = Grid::from_rows(0, &rows(&["###", "#@#"]), 3, 3).unwrap_err();
        assert_eq!(
            e,
            ParseError::BadRowCount {
                grid: 0,
                expected: 3,
                got: 2
            }
        );
        let e = Grid::from_rows(0, &rows(&["###", "#.#", "###"]), 3, 3).unwrap_err();
        assert_eq!(e, ParseError::MissingStart { grid: 0 });
        let e = Grid::from_rows(0, &rows(&["#####", "#@.@#", "#####"]), 3, 5).unwrap_err();
        assert_eq!(e, ParseError::DuplicateStart { grid: 0 });
        let e = Grid::from_rows(0, &rows(&["##.##", "#.@.#", "#####"]), 3, 5).unwrap_err();
        assert_eq!(
            e,
            ParseError::OpenBorder {
                grid: 0,
                row: 0,
                col: 2
            }
        );
    }

    #[test]
    fn parses_a_catalog_with_header() {
        let cfg = Config {
            n_grids: 2,
            n_selected: 1,
            height: 3,
            width: 3,
            horizon: 10,
            seed: 0,
            time_limit: 3.9,
        };
        let input = "2 1 3 3 10\n###\n#@#\n###\n###\n#@#\n###\n";
        let catalog = GridCatalog::parse(input, &cfg).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.grid(1).start(), (1, 1));
    }

    #[test]
    fn move_order_and_deltas() {
        assert_eq!(
            Move::ALL,
            [Move::Left, Move::Right, Move::Up, Move::Down]
        );
        assert_eq!(Move::Left.delta(), (0, !0));
        assert_eq!(Move::Right.delta(), (0, 1));
        assert_eq!(Move::Up.delta(), (!0, 0));
        assert_eq!(Move::Down.delta(), (1, 0));
        for mv in Move::ALL {
            assert_eq!(Move::from_char(mv.as_char()), Some(mv));
        }
    }
}
