//! Logger set-up for the demo binary and tests.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Filter applied when `RUST_LOG` is unset.
///
/// Verbose runs show this crate's per-tick decisions; other crates stay at
/// info level either way.
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        format!("{},{}={}", LevelFilter::Info, env!("CARGO_CRATE_NAME"), LevelFilter::Debug)
    } else {
        LevelFilter::Info.to_string()
    }
}

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence over [`default_filter`].
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None);

    // `try_init` only fails if a logger was already set. Ignore that case so
    // tests can call `init` multiple times without panicking.
    if builder.try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
