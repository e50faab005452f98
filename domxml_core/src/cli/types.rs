use crate::config::OutputMode;
use clap::{Args, Parser, ValueHint};
use clap_verbosity_flag::Verbosity;
use std::path::PathBuf;

/// Convert a yaml virtual machine template into a domain xml definition.
#[derive(Debug, Parser)]
#[command(name = "domxml", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub convert: ConvertArgs,

    #[command(flatten)]
    pub verbose: Verbosity,
}

#[derive(Default, Debug, Args, Clone, Eq, PartialEq)]
pub struct ConvertArgs {
    /// Yaml template to convert [default: ./ubuntu-template.yaml]
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Xml file to write, overwritten if it exists [default: ./vm_config.xml]
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output layout [default: compact]
    #[arg(short, long, value_enum, value_name = "MODE", conflicts_with = "pretty")]
    pub mode: Option<OutputMode>,

    /// Shorthand for --mode pretty.
    #[arg(short, long)]
    pub pretty: bool,

    /// Spaces per nesting level in pretty mode [default: 2]
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Configuration file [default: ./domxml.toml if it exists]
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the xml document instead of writing the output file.
    #[arg(long, conflicts_with = "check")]
    pub stdout: bool,

    /// Read the written file back and verify it matches the template.
    #[arg(long)]
    pub check: bool,
}
