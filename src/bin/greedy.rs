use anyhow::Context;
use clap::Parser;
use gridwalk::board::GameScore;
use gridwalk::config::get_preset;
use gridwalk::driver::{TimeKeeper, run, trace_string};
use gridwalk::grid::GridCatalog;
use itertools::Itertools;
use std::io::Read;

/// Greedy solver: reads the grid catalog from stdin and prints the selected
/// grid ids and the shared move trace.
#[derive(Parser, Debug)]
struct Cli {
    /// Named configuration preset
    #[clap(long, short = 'p', default_value = "full")]
    preset: String,
    /// Override the candidate-selection seed
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = get_preset(&cli.preset)
        .with_context(|| format!("Unknown preset: {}", cli.preset))?
        .config;
    if let Some(seed) = cli.seed {
        cfg.seed = seed;
    }

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    let catalog = GridCatalog::parse(&input, &cfg)?;

    let timekeeper = TimeKeeper::new(cfg.time_limit);
    let outcome = run(&catalog, &cfg, &GameScore);

    println!("{}", outcome.choice.iter().join(" "));
    println!("{}", trace_string(&outcome.trace));
    eprintln!("loop_cnt: {}", outcome.iterations);
    eprintln!("time: {}", timekeeper.time());
    if timekeeper.is_timeover() {
        // Informational only. The loop always runs to the horizon.
        eprintln!("soft time budget of {} s exceeded", cfg.time_limit);
    }
    Ok(())
}
