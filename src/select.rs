use rand::prelude::*;

/// Picks `k` distinct grid ids uniformly at random from `0..n`, without
/// replacement: shuffle the full id range and keep the first `k`. The
/// caller supplies the (seeded) generator, so the same seed always yields
/// the same candidate set.
pub fn choose_boards(rng: &mut impl Rng, n: usize, k: usize) -> Vec<usize> {
    let mut ids = (0..n).collect::<Vec<_>>();
    ids.shuffle(rng);
    ids.truncate(k);
    ids
}
