use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Everything a run needs to be reproducible. Threaded explicitly through
/// catalog parsing, candidate selection and the driver; no component reads
/// ambient globals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Number of candidate grids in the input catalog (N).
    pub n_grids: usize,
    /// Number of grids selected for joint evaluation (K).
    pub n_selected: usize,
    /// Grid height (H).
    pub height: usize,
    /// Grid width (W).
    pub width: usize,
    /// Turn horizon (T).
    pub horizon: usize,
    /// Seed for candidate selection. Same seed, same choice, same trace.
    pub seed: u64,
    /// Soft wall-clock budget in seconds. Measured and logged, never
    /// enforced: the driver runs to the horizon regardless.
    pub time_limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub config: Config,
}

const PRESETS_DATA: &[Preset] = &[
    Preset {
        name: "full",
        config: Config {
            n_grids: 100,
            n_selected: 8,
            height: 50,
            width: 50,
            horizon: 2500,
            seed: 20210325,
            time_limit: 3.9,
        },
    },
    Preset {
        name: "small",
        config: Config {
            n_grids: 10,
            n_selected: 3,
            height: 10,
            width: 10,
            horizon: 100,
            seed: 20210325,
            time_limit: 3.9,
        },
    },
];

pub fn all_presets() -> &'static [Preset] {
    PRESETS_DATA
}

// Build a name -> preset map once for O(1) lookup.
static PRESET_MAP: Lazy<HashMap<&'static str, &'static Preset>> = Lazy::new(|| {
    let mut m = HashMap::new();
    for p in PRESETS_DATA.iter() {
        m.insert(p.name, p);
    }
    m
});

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    PRESET_MAP.get(name).copied()
}
