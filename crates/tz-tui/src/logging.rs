//! Log setup for the terminal UI.
//!
//! The alternate screen owns stderr while the UI runs, so records only go
//! to a file when one is given. Level comes from `TENZIES_LOG`.

use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TENZIES_LOG";

/// Install the global logger. Without a file, logging stays off.
pub fn init(log_file: Option<&Path>) -> Result<(), String> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))?;

    Builder::from_env(Env::default().filter_or(LOG_ENV, "info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| format!("logger already initialised: {e}"))
}
