use std::path::Path;

use tz_engine::EngineConfig;
use tz_tui::app::TuiApp;

pub fn run(seed: Option<u64>, log_file: Option<&Path>) -> Result<(), String> {
    tz_tui::logging::init(log_file)?;

    let mut config = EngineConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    tz_tui::terminal::run(TuiApp::new(&config))
}
