use crate::SetMinMax;
use crate::board::{Board, Evaluator, ScoreType};
use crate::grid::{GridCatalog, Move};

/// Tries all four moves and returns the one whose summed evaluation over
/// the candidate set is highest.
///
/// Boards that are already done contribute nothing; everyone else is
/// probed on a throwaway clone so the real boards stay untouched. The
/// strict `>` comparison means the earliest move in `Move::ALL` wins ties,
/// and when every board is done the zero aggregate still beats the initial
/// minimum, so `Left` comes back. `None` would require an empty move set
/// and is unreachable, but the driver handles it anyway.
pub fn greedy_action(
    catalog: &GridCatalog,
    boards: &[Board],
    evaluator: &impl Evaluator,
    horizon: usize,
) -> Option<Move> {
    let mut best_move = None;
    let mut best_score = ScoreType::MIN;
    for mv in Move::ALL {
        let mut aggregate: ScoreType = 0;
        for board in boards {
            if board.is_done(horizon) {
                // Trapped or out of turns: no vote this round.
                continue;
            }
            let mut probe = board.clone();
            probe.step(catalog, mv);
            aggregate += evaluator.evaluate(catalog, &probe);
        }
        if best_score.setmax(aggregate) {
            best_move = Some(mv);
        }
    }
    best_move
}
