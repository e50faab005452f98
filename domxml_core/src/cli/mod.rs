mod types;
pub mod utils;
pub use types::*;

use crate::config::{ConvertConfig, OutputMode};
use crate::convert;
use crate::display;

use clap::Parser;

// Error Handling
use domxml_error::WrapError;
use log::{debug, info, log_enabled, Level};
use miette::{Report, Result};

impl ConvertArgs {
    /**
    Command line flags take precedence over the configuration file.
    */
    pub fn apply(&self, mut config: ConvertConfig) -> ConvertConfig {
        if let Some(input) = &self.input {
            config.source = input.to_owned();
        }
        if let Some(output) = &self.output {
            config.destination = output.to_owned();
        }
        if self.pretty {
            config.mode = OutputMode::Pretty;
        } else if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        config
    }
}

impl Cli {
    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        Self::switch(cli)?;
        Ok(())
    }
    pub fn switch(cli: Cli) -> Result<()> {
        utils::set_logger(&cli)?;

        let args = cli.convert;
        let config = ConvertConfig::get(args.config.as_deref()).map_err(|e| {
            WrapError::builder()
                .msg("Couldn't load domxml configuration")
                .help("fix or remove the configuration file, or pass every option as a flag")
                .origin(Report::new(e))
                .build()
        })?;
        let config = args.apply(config);
        debug!("{:#?}", config);

        // Stdout only carries the document, never the highlighted dumps.
        if args.stdout {
            let xml = convert::render(&config)?;
            println!("{}", xml.trim_end());
            return Ok(());
        }

        let xml = convert::convert(&config)?;
        if log_enabled!(Level::Info) {
            let yaml = convert::file::read_to_string(&config.source)?;
            display::print_highlighted("yaml", &yaml)?;
            display::print_highlighted("xml", &xml)?;
        }
        if args.check {
            convert::check(&config)?;
        }
        info!("Conversion succeeded.");
        Ok(())
    }
}
