use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use airscriber::{App, AppOptions, Config};

#[derive(Parser, Debug)]
#[command(name = "airscriber")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("AIRSCRIBER_GIT_HASH"), ")"),
    about = "Draw in the air with your index finger"
)]
struct Cli {
    /// Open the camera, start hand tracking and read commands from stdin
    #[arg(long, short = 'l', action = ArgAction::SetTrue, conflicts_with = "replay")]
    live: bool,

    /// Replay a recorded event script instead of using the camera
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Write the drawing to this PNG on save and exit
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Start with drawing disabled
    #[arg(long, action = ArgAction::SetTrue)]
    disabled: bool,

    /// Write a documented default config file and exit
    #[arg(long, action = ArgAction::SetTrue)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if !cli.live && cli.replay.is_none() {
        print_usage();
        return Ok(());
    }

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config: {:#}. Using defaults.", e);
            Config::default()
        }
    };

    let options = AppOptions {
        output: cli.output,
        start_disabled: cli.disabled,
    };
    let mut app = App::new(config, options).context("Failed to set up drawing session")?;

    if let Some(script) = cli.replay {
        app.run_replay(&script)?;
    } else {
        log::info!("Controls (one per line on stdin):");
        log::info!("  - start: open the camera and start hand tracking");
        log::info!("  - toggle: turn drawing on or off");
        log::info!("  - clear: wipe the canvas");
        log::info!("  - down X Y / move X Y / up: draw with the mouse fallback");
        log::info!("  - save: write the canvas as PNG");
        log::info!("  - quit: exit (end of input does the same)");
        app.run_live()?;
    }

    Ok(())
}

fn print_usage() {
    println!("airscriber: Draw in the air with your index finger");
    println!();
    println!("Usage:");
    println!("  airscriber --live             Start the camera and read commands from stdin");
    println!("  airscriber --replay FILE      Replay a recorded event script");
    println!("  airscriber --init-config      Write ~/.config/airscriber/config.toml");
    println!("  airscriber --help             Show help");
    println!();
    println!("Options:");
    println!("  -o, --output FILE             PNG written on save and exit");
    println!("  --disabled                    Start with drawing disabled");
    println!();
    println!("Requirements:");
    println!("  - A video capture device (default /dev/video0)");
    println!("  - A hand tracker command printing landmarks as JSON lines");
    println!("    (see [tracking] command in the config)");
}
