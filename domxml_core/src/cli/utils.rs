use crate::cli::Cli;

// Logger
use env_logger::{Builder, Env};
use log::trace;

// Error handling
use domxml_error::DomxmlError;

pub const LOG_ENV: &str = "DOMXML_LOG";

/// Build logger
pub fn set_logger(cli: &Cli) -> Result<(), DomxmlError> {
    // Set verbosity
    let verbosity: log::LevelFilter = cli.verbose.log_level_filter();
    // Silence highlighting internals
    let filter = format!(
        "{},{}",
        verbosity.to_string().to_lowercase(),
        "bat=error,globset=error"
    );
    // DOMXML_LOG takes precedence over -v/-q.
    let env = Env::default().filter_or(LOG_ENV, filter);
    if let Err(e) = Builder::from_env(env).try_init() {
        // Already set when switching twice in the same process.
        trace!("Logger left untouched: {e}");
    }
    Ok(())
}
