//! ECA Headless Runner
//!
//! Runs the automaton without a window and writes the final state as text
//! rows, a JSON snapshot or a PPM image. Useful for testing and for
//! producing stills.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use eca_scroll::app::{Animation, CliArgs, Config};
use eca_scroll::raster::Snapshot;

#[derive(Parser, Debug)]
#[command(name = "eca-headless")]
#[command(version, about = "Run an elementary cellular automaton without a window")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,

    /// Generations to draw, the first one included
    #[arg(short = 'n', long, default_value_t = 100)]
    generations: u64,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `#`/`.` line per visible row
    Text,
    /// Renderer snapshot as JSON
    Json,
    /// Binary PPM image of the surface
    Ppm,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_with_args(&cli.args)?;
    if let Some(path) = &cli.args.write_config {
        config.save(path)?;
        log::info!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let mut rng = config.rng();
    let settings = config.settings(&mut rng)?;

    let mut animation = Animation::new(
        settings,
        config.surface,
        config.start,
        rng,
        config.colors.ink_rgb(),
    )?;
    for _ in 1..cli.generations {
        animation.tick()?;
    }
    log::info!(
        "Drew {} generations of rule {}",
        cli.generations.max(1),
        settings.rule
    );

    let out: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    let mut out = BufWriter::new(out);

    let renderer = animation.renderer();
    match cli.format {
        OutputFormat::Text => {
            let snapshot = Snapshot::from_renderer(renderer);
            writeln!(out, "{}", snapshot.text())?;
        }
        OutputFormat::Json => {
            let snapshot = Snapshot::from_renderer(renderer);
            serde_json::to_writer_pretty(&mut out, &snapshot)?;
            writeln!(out)?;
        }
        OutputFormat::Ppm => {
            renderer
                .surface()
                .write_ppm(&mut out, config.colors.background_rgb())?;
        }
    }
    out.flush()?;
    Ok(())
}
