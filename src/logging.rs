//! Logger setup.
//!
//! `RUST_LOG` always wins; otherwise `-v` flags pick the level.

use env_logger::Env;
use log::LevelFilter;

/// Level selected by the number of `-v` flags.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. Call once, before any command runs.
pub fn init(verbosity: u8) {
    let level = level_for(verbosity).to_string().to_lowercase();

    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
