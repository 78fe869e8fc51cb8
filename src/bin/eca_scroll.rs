//! ECA Scroll
//!
//! Windowed viewer for a scrolling elementary cellular automaton.

use std::error::Error;

use clap::Parser;
use eca_scroll::app::{CliArgs, Config};
use eca_scroll::gui::App;

#[derive(Parser, Debug)]
#[command(name = "eca-scroll")]
#[command(version, about = "Scrolling elementary cellular automaton viewer")]
struct Cli {
    #[command(flatten)]
    args: CliArgs,
}

fn main() -> Result<(), Box<dyn Error>> {
    // Users can set RUST_LOG=info or RUST_LOG=debug for more verbose output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Load configuration with precedence: CLI > preset > env > file > defaults
    let config = match Config::load_with_args(&cli.args) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(path) = &cli.args.write_config {
        config.save(path)?;
        println!("Wrote configuration to {}", path.display());
        return Ok(());
    }

    let mut rng = config.rng();
    let settings = config.settings(&mut rng)?;
    log::debug!(
        "Rule {} ({}), {} gen/s, {}px cells",
        settings.rule,
        settings.rule.to_binary(),
        settings.speed,
        settings.cell_size
    );

    let app = App::new(config, settings, rng)?;
    app.run()?;

    log::debug!("ECA Scroll exited");
    Ok(())
}
