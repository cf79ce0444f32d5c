pub mod play;
pub mod simulate;
pub mod state;

use env_logger::Env;

use tz_tui::logging::LOG_ENV;

/// Send log records to stderr, filtered by `TENZIES_LOG` (default: warn).
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .init();
}
