use anyhow::bail;
use clap::Parser;
use clap::ValueEnum;
use gridwalk::config::get_preset;
use gridwalk::mapgen;
use std::fs;

#[derive(Parser)]
struct Cli {
    /// Preset supplying grid count and dimensions.
    #[clap(long, short = 'p', default_value = "full")]
    preset: String,
    /// Path to output file. If not provided, outputs to stdout.
    #[clap(long, short = 'o', default_value = "")]
    output: String,
    /// File format: text or json. If not provided, infers from output file extension.
    #[clap(long, short = 'f', default_value = "unspecified")]
    format: Format,
    #[clap(long, short = 's')]
    seed: Option<u64>,
}

#[derive(Default, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    #[default]
    Unspecified,
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let cfg = match get_preset(&args.preset) {
        Some(p) => p.config,
        None => bail!("Unknown preset: {}", args.preset),
    };
    let spec = mapgen::random::generate_catalog(&cfg, args.seed);
    // Infer format from output file extension if not specified.
    let format = if args.format == Format::Unspecified {
        if args.output.ends_with(".json") {
            Format::Json
        } else if args.output.ends_with(".txt") {
            Format::Text
        } else if args.output.is_empty() {
            Format::Text
        } else {
            bail!("Cannot infer format from output file extension. Specify format with -f option.")
        }
    } else {
        args.format.clone()
    };

    use std::io::Write;

    let mut w: Box<dyn Write> = if args.output.is_empty() {
        Box::new(std::io::stdout())
    } else {
        Box::new(fs::File::create(&args.output)?)
    };

    match format {
        Format::Text => {
            w.write_all(mapgen::random::render_input(&cfg, &spec).as_bytes())?;
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut w, &spec)?;
        }
        Format::Unspecified => {
            unreachable!()
        }
    }
    Ok(())
}
