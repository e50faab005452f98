use domxml_core::cli::Cli;

// Error Handling
use log::trace;
use miette::Result;

/**
The binary entrypoint.
Converts a yaml domain template into xml and exits non-zero on failure.
*/
fn main() -> Result<()> {
    make_handler()?;
    trace!("Launch process.");
    Cli::run()?;
    trace!("Process clean exit.");
    Ok(())
}

/**
The make handler functions is executed right after the main function
to set up a verbose and colorful error/panic handler.
*/
pub fn make_handler() -> Result<()> {
    miette::set_panic_hook();
    Ok(())
}
