mod load;

use bon::Builder;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumString};

// Global vars
pub const DEFAULT_SOURCE: &str = "./ubuntu-template.yaml";
pub const DEFAULT_DESTINATION: &str = "./vm_config.xml";
pub const DEFAULT_INDENT: usize = 2;
pub const CONFIG_FILE: &str = "./domxml.toml";

/// How the xml document is laid out.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OutputMode {
    /// No whitespace between tags.
    #[default]
    Compact,
    /// Xml declaration, one element per line, indented children.
    Pretty,
}

/**
Everything a conversion needs to know.
Loaded from `domxml.toml` and overridden by command line flags.
*/
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, Builder)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertConfig {
    /// Yaml template to read.
    #[builder(into, default = PathBuf::from(DEFAULT_SOURCE))]
    pub source: PathBuf,
    /// Xml file to (over)write.
    #[builder(into, default = PathBuf::from(DEFAULT_DESTINATION))]
    pub destination: PathBuf,
    #[builder(default)]
    pub mode: OutputMode,
    /// Spaces per nesting level, pretty mode only.
    #[builder(default = DEFAULT_INDENT)]
    pub indent: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
