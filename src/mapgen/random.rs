//! # Random Catalog Generation
//!
//! This module provides functions for generating random valid input
//! catalogs for local testing. Every generated grid is fully walled along
//! its border (the engine's one hard precondition) and carries exactly one
//! start cell.

use crate::config::Config;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// A generated catalog in its textual form: one vector of row strings per
/// grid. Serializable so tooling can pass catalogs around as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSpec {
    pub grids: Vec<Vec<String>>,
}

// Interior cell mix. Everything that is not one of these becomes floor.
const WALL_RATE: f64 = 0.15;
const TRAP_RATE: f64 = 0.05;
const BONUS_RATE: f64 = 0.30;

/// Generates one bordered random grid as rows of cell characters.
///
/// # Arguments
/// * `height`, `width` - Grid dimensions, both at least 3 so an interior exists.
/// * `rng` - Generator supplied by the caller for reproducibility.
pub fn generate_grid(height: usize, width: usize, rng: &mut impl Rng) -> Vec<String> {
    assert!(height >= 3 && width >= 3, "grid needs an interior");
    let mut rows = Vec::with_capacity(height);
    for i in 0..height {
        let mut row = String::with_capacity(width);
        for j in 0..width {
            let on_border = i == 0 || i == height - 1 || j == 0 || j == width - 1;
            let c = if on_border {
                '#'
            } else {
                let r: f64 = rng.random();
                if r < WALL_RATE {
                    '#'
                } else if r < WALL_RATE + TRAP_RATE {
                    'x'
                } else if r < WALL_RATE + TRAP_RATE + BONUS_RATE {
                    'o'
                } else {
                    '.'
                }
            };
            row.push(c);
        }
        rows.push(row);
    }
    // Exactly one start, on a random interior cell.
    let si = rng.random_range(1..height - 1);
    let sj = rng.random_range(1..width - 1);
    let row = &mut rows[si];
    let mut chars: Vec<char> = row.chars().collect();
    chars[sj] = '@';
    *row = chars.into_iter().collect();
    rows
}

/// Generates a full catalog of `cfg.n_grids` random grids.
///
/// # Arguments
/// * `cfg` - Supplies the grid count and dimensions.
/// * `seed` - An optional seed for the random number generator for reproducibility.
pub fn generate_catalog(cfg: &Config, seed: Option<u64>) -> CatalogSpec {
    let mut rng = match seed {
        Some(s) => rand::rngs::StdRng::seed_from_u64(s),
        None => rand::rngs::StdRng::from_os_rng(),
    };
    let grids = (0..cfg.n_grids)
        .map(|_| generate_grid(cfg.height, cfg.width, &mut rng))
        .collect();
    CatalogSpec { grids }
}

/// Renders a catalog in the contest input format: the `N K H W T` header
/// line followed by the grid blocks.
pub fn render_input(cfg: &Config, spec: &CatalogSpec) -> String {
    let mut out = format!(
        "{} {} {} {} {}\n",
        cfg.n_grids, cfg.n_selected, cfg.height, cfg.width, cfg.horizon
    );
    for grid in &spec.grids {
        for row in grid {
            out.push_str(row);
            out.push('\n');
        }
    }
    out
}
