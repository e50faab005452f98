pub mod cli;
pub mod config;
pub mod convert;
pub mod display;

pub use config::{ConvertConfig, OutputMode};
pub use convert::{convert, from_yaml_to_xml, DomainTree, Element};
