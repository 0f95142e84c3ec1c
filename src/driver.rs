use crate::board::{Board, Evaluator};
use crate::config::Config;
use crate::grid::{GridCatalog, Move};
use crate::planner::greedy_action;
use crate::select::choose_boards;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Wall-clock observer for the soft time budget. The budget is reported,
/// never enforced: the driver runs to the horizon no matter what the clock
/// says, and callers wanting a hard cutoff must add one themselves.
pub struct TimeKeeper {
    start: std::time::Instant,
    time_threshold: f64,
}

impl TimeKeeper {
    pub fn new(time_threshold: f64) -> Self {
        TimeKeeper {
            start: std::time::Instant::now(),
            time_threshold,
        }
    }

    /// Whether the soft budget has elapsed.
    pub fn is_timeover(&self) -> bool {
        self.start.elapsed().as_secs_f64() >= self.time_threshold
    }

    /// Elapsed time in milliseconds.
    pub fn time(&self) -> usize {
        (self.start.elapsed().as_secs_f64() * 1000.) as usize
    }
}

/// What a run produces: the selected grid ids (selection order), the shared
/// move trace, and the number of planning iterations for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub choice: Vec<usize>,
    pub trace: Vec<Move>,
    pub iterations: usize,
}

/// Renders a trace as the contiguous LRUD output line.
pub fn trace_string(trace: &[Move]) -> String {
    trace.iter().map(|mv| mv.as_char()).collect()
}

/// Runs the whole game: select K candidate boards with the configured seed,
/// then loop to the horizon, each turn committing the planner's move to
/// every board — including boards already done, whose state keeps evolving
/// silently even though the planner no longer consults them.
pub fn run(catalog: &GridCatalog, cfg: &Config, evaluator: &impl Evaluator) -> Outcome {
    let mut rng = ChaCha20Rng::seed_from_u64(cfg.seed);
    let choice = choose_boards(&mut rng, cfg.n_grids, cfg.n_selected);
    let mut boards = choice
        .iter()
        .map(|&id| Board::new(catalog, id))
        .collect::<Vec<_>>();

    let mut turn = 0;
    let mut trace = Vec::new();
    let mut iterations = 0;
    while turn < cfg.horizon {
        iterations += 1;
        let Some(mv) = greedy_action(catalog, &boards, evaluator, cfg.horizon) else {
            // Unreachable with K >= 1, but a planner without a move ends
            // the run without recording anything further.
            break;
        };
        turn += 1;
        trace.push(mv);
        for board in boards.iter_mut() {
            board.step(catalog, mv);
        }
    }
    Outcome {
        choice,
        trace,
        iterations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameScore;
    use crate::grid::Grid;

    fn small_cfg(n_grids: usize, n_selected: usize, h: usize, w: usize, horizon: usize) -> Config {
        Config {
            n_grids,
            n_selected,
            height: h,
            width: w,
            horizon,
            seed: 20210325,
            time_limit: 3.9,
        }
    }

    fn catalog(grids: &[&[&str]]) -> GridCatalog {
        let grids = grids
            .iter()
            .enumerate()
            .map(|(id, lines)| {
                let rows: Vec<Vec<char>> = lines.iter().map(|l| l.chars().collect()).collect();
                Grid::from_rows(id, &rows, lines.len(), lines[0].len()).unwrap()
            })
            .collect();
        GridCatalog::new(grids)
    }

    #[test]
    fn bonus_above_then_left_by_tie_break() {
        // Start mid-grid, one coin directly above, walls everywhere else.
        // Turn 1 collects the coin; turn 2 has equal aggregates in every
        // direction, so Left wins the tie.
        let grid: &[&str] = &["#####", "##o##", "##@##", "#####"];
        let cfg = small_cfg(1, 1, 4, 5, 2);
        let outcome = run(&catalog(&[grid]), &cfg, &GameScore);
        assert_eq!(outcome.choice, vec![0]);
        assert_eq!(trace_string(&outcome.trace), "UL");
        assert_eq!(outcome.iterations, 2);
    }

    #[test]
    fn trace_never_exceeds_horizon() {
        let grid: &[&str] = &["#####", "#.@.#", "#####"];
        let cfg = small_cfg(1, 1, 3, 5, 7);
        let outcome = run(&catalog(&[grid]), &cfg, &GameScore);
        assert_eq!(outcome.trace.len(), 7);
        assert_eq!(outcome.iterations, 7);
    }

    #[test]
    fn done_boards_are_still_stepped_to_the_horizon() {
        // Board 0 pays off to the right twice; board 1 has a trap there.
        // The planner follows board 0's coins, trapping board 1 on turn 1,
        // after which board 1 no longer votes but is still stepped every
        // turn — and even scores again when a step clears the trap cell.
        let a: &[&str] = &["#####", "#@oo#", "#####"];
        let b: &[&str] = &["#####", "#@x.#", "#####"];
        let cfg = small_cfg(2, 2, 3, 5, 4);
        let cat = catalog(&[a, b]);
        let outcome = run(&cat, &cfg, &GameScore);
        assert_eq!(outcome.trace.len(), 4);
        assert_eq!(
            outcome.trace,
            vec![Move::Right, Move::Right, Move::Left, Move::Left]
        );

        // Replay the trace to observe what the driver did to board 1.
        let mut board = Board::new(&cat, 1);
        for &mv in &outcome.trace {
            board.step(&cat, mv);
            assert!(board.is_done(cfg.horizon));
        }
        assert_eq!(board.turn, 4);
        assert_eq!(board.position, (1, 1));
        // One coin collected after falling into the trap.
        assert_eq!(board.score, 1);
    }

    #[test]
    fn trapped_board_keeps_evolving_when_stepped() {
        // Right traps the board on turn 1. Unconditional steps keep coming;
        // by the horizon it has wandered off the trap and scored again.
        let grid: &[&str] = &["#####", "#@xo#", "#####"];
        let cat = catalog(&[grid]);
        let mut board = Board::new(&cat, 0);
        board.step(&cat, Move::Right);
        assert!(board.is_done(10));
        for _ in 1..10 {
            board.step(&cat, Move::Right);
        }
        assert!(board.is_done(10));
        assert_eq!(board.turn, 10);
        assert_eq!(board.position, (1, 3));
        assert_eq!(board.score, 1); // the coin past the trap
    }

    #[test]
    fn same_seed_gives_identical_outcomes() {
        let a: &[&str] = &["#####", "#.o.#", "#o@x#", "#####"];
        let b: &[&str] = &["#####", "#x..#", "#.@o#", "#####"];
        let c: &[&str] = &["#####", "#...#", "#.@.#", "#####"];
        let cat = catalog(&[a, b, c]);
        let cfg = small_cfg(3, 2, 4, 5, 20);
        let first = run(&cat, &cfg, &GameScore);
        let second = run(&cat, &cfg, &GameScore);
        assert_eq!(first, second);
    }

    #[test]
    fn timekeeper_measures_without_cutting_short() {
        // A zero budget is over immediately, yet the run still fills the
        // whole horizon.
        let keeper = TimeKeeper::new(0.0);
        let grid: &[&str] = &["#####", "#.@.#", "#####"];
        let cfg = small_cfg(1, 1, 3, 5, 50);
        let outcome = run(&catalog(&[grid]), &cfg, &GameScore);
        assert!(keeper.is_timeover());
        assert_eq!(outcome.trace.len(), 50);
    }
}
