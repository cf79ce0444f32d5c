//! Standalone TUI binary for Tenzies.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use tz_engine::EngineConfig;

#[derive(Parser)]
#[command(
    name = "tz-tui",
    about = "Roll until all dice match, freezing dice between rolls",
    version
)]
struct Args {
    /// RNG seed for reproducible rounds
    #[arg(long)]
    seed: Option<u64>,

    /// Write log output to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = tz_tui::logging::init(args.log_file.as_deref()) {
        eprintln!("error: {e}");
        process::exit(1);
    }

    let mut config = EngineConfig::default();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let app = tz_tui::app::TuiApp::new(&config);

    if let Err(e) = tz_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
