// # Gridwalk: greedy solver for the hidden-layout coin walk
//
// One agent, one shared move sequence, K candidate grid layouts sampled
// from N. The crate simulates every candidate board in lockstep and picks
// each move greedily by one-ply lookahead over all of them, because the
// true layout is never revealed.

/// Run configuration (grid counts, dimensions, horizon, seed) and named presets.
pub mod config;

/// Cell kinds, the four moves, grid parsing and the immutable grid catalog.
pub mod grid;

/// Per-candidate simulation state: position, visited bitset, turn, score.
pub mod board;

/// Candidate set selection: K distinct grid ids drawn without replacement.
pub mod select;

/// One-ply greedy planner over the candidate set.
pub mod planner;

/// The main loop: plan, record, apply to every board, repeat to the horizon.
pub mod driver;

/// Tools for generating random input catalogs.
pub mod mapgen {
    /// A module for generating random grids.
    pub mod random;
}

/// A trait for conveniently updating a value to its minimum or maximum.
pub trait SetMinMax {
    /// If `v` is less than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmin(&mut self, v: Self) -> bool;
    /// If `v` is greater than `self`, updates `self` to `v` and returns `true`.
    /// Otherwise, returns `false`.
    fn setmax(&mut self, v: Self) -> bool;
}
impl<T> SetMinMax for T
where
    T: PartialOrd,
{
    fn setmin(&mut self, v: T) -> bool {
        *self > v && {
            *self = v;
            true
        }
    }
    fn setmax(&mut self, v: T) -> bool {
        *self < v && {
            *self = v;
            true
        }
    }
}
