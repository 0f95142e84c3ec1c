use anyhow::{Context, bail};
use clap::Parser;
use gridwalk::board::Board;
use gridwalk::config::get_preset;
use gridwalk::grid::{GridCatalog, Move};

/// Local tester: replays a solver's two output lines against an input
/// catalog and reports the total score over the selected boards.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file
    input: String,
    /// Path to the solver output file (ids line + trace line)
    output: String,
    /// Named configuration preset
    #[clap(long, short = 'p', default_value = "full")]
    preset: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = get_preset(&cli.preset)
        .with_context(|| format!("Unknown preset: {}", cli.preset))?
        .config;
    let input = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("No such input: {}", cli.input))?;
    let catalog = GridCatalog::parse(&input, &cfg)?;
    let output = std::fs::read_to_string(&cli.output)
        .with_context(|| format!("No such output: {}", cli.output))?;

    let mut lines = output.lines();
    let choice = lines
        .next()
        .context("output is missing the id line")?
        .split_whitespace()
        .map(|t| t.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .context("id line must be space-separated integers")?;
    let trace = lines
        .next()
        .unwrap_or("")
        .chars()
        .map(|c| Move::from_char(c).with_context(|| format!("bad move character '{}'", c)))
        .collect::<anyhow::Result<Vec<_>>>()?;

    if choice.len() != cfg.n_selected {
        eprintln!("!log status WA");
        bail!("expected {} grid ids, got {}", cfg.n_selected, choice.len());
    }
    if let Some(&id) = choice.iter().find(|&&id| id >= catalog.len()) {
        eprintln!("!log status WA");
        bail!("grid id {} out of range", id);
    }
    if trace.len() > cfg.horizon {
        eprintln!("!log status WA");
        bail!("trace has {} moves, horizon is {}", trace.len(), cfg.horizon);
    }

    let mut total = 0;
    for &id in &choice {
        let mut board = Board::new(&catalog, id);
        for &mv in &trace {
            board.step(&catalog, mv);
        }
        eprintln!("grid {}: score {}", id, board.score);
        total += board.score;
    }
    eprintln!("!log status AC");
    eprintln!("!log score {}", total);
    println!("{}", total);
    Ok(())
}
