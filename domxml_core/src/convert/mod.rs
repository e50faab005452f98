pub mod file;
pub mod scalar;
pub mod tree;
pub mod xml;
pub mod yaml;

pub use tree::{Body, DomainTree, Element, ROOT_TAG};
pub use xml::{from_xml, to_xml};
pub use yaml::from_yaml;

use crate::config::{ConvertConfig, OutputMode, DEFAULT_INDENT};

// Error Handling
use domxml_error::{DomxmlError, LibError};
use log::info;

/**
Convert a yaml template string to xml, without touching the filesystem.
*/
pub fn from_yaml_to_xml(yaml: &str, mode: OutputMode) -> Result<String, DomxmlError> {
    let value = from_yaml(yaml, "<string>")?;
    let tree = DomainTree::from_document(&value)?;
    to_xml(&tree, mode, DEFAULT_INDENT)
}

/**
Read and parse the source template into a DomainTree.
*/
pub fn load_tree(config: &ConvertConfig) -> Result<DomainTree, DomxmlError> {
    let string = file::read_to_string(&config.source)?;
    let value = from_yaml(&string, &config.source.display().to_string())?;
    DomainTree::from_document(&value)
}

/**
Returns the xml document for the source template.
*/
pub fn render(config: &ConvertConfig) -> Result<String, DomxmlError> {
    let tree = load_tree(config)?;
    to_xml(&tree, config.mode, config.indent)
}

/**
Convert the source template and (over)write the destination file.
Nothing is written if any stage fails.
Returns the written document.
*/
pub fn convert(config: &ConvertConfig) -> Result<String, DomxmlError> {
    info!(
        "Convert {:?} to {} xml {:?}.",
        config.source, config.mode, config.destination
    );
    let xml = render(config)?;
    file::write_atomic(&config.destination, &xml)?;
    info!("Wrote {:?}.", config.destination);
    Ok(xml)
}

/**
Read the destination file back and ensure it holds
exactly the keys and values of the source template.
*/
pub fn check(config: &ConvertConfig) -> Result<DomainTree, DomxmlError> {
    let expected = load_tree(config)?;
    let string = file::read_to_string(&config.destination)?;
    let tree = from_xml(&string)?;
    if tree != expected {
        let message = format!(
            "{:?} doesn't match its source {:?}",
            config.destination, config.source
        );
        let help = "convert the template again";
        return Err(LibError::new(&message, help).into());
    }
    info!("Checked {:?}.", config.destination);
    Ok(tree)
}

#[cfg(test)]
mod test {
    use super::*;
    use domxml_error::SchemaError;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::{Path, PathBuf};

    // Error Handling
    use miette::{IntoDiagnostic, Result};

    const TEMPLATE: &str = "
domain:
  name: vm1
  memory: 2048
  cpu:
    count: 2
";

    fn template_path() -> PathBuf {
        let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
        path.push("../templates/ubuntu-template.yaml");
        path
    }

    fn config_in(dir: &Path, yaml: &str, mode: OutputMode) -> Result<ConvertConfig> {
        let source = dir.join("ubuntu-template.yaml");
        fs::write(&source, yaml).into_diagnostic()?;
        Ok(ConvertConfig::builder()
            .source(source)
            .destination(dir.join("vm_config.xml"))
            .mode(mode)
            .build())
    }

    /// Drop the declaration and the whitespace between tags.
    fn strip(xml: &str) -> String {
        xml.lines()
            .filter(|e| !e.starts_with("<?xml"))
            .map(|e| e.trim())
            .collect::<Vec<&str>>()
            .join("")
    }

    #[test]
    fn convert_string() -> Result<()> {
        let res = from_yaml_to_xml(TEMPLATE, OutputMode::Compact)?;
        assert_eq!(
            res,
            "<domain><name>vm1</name><memory>2048</memory><cpu><count>2</count></cpu></domain>"
        );
        Ok(())
    }

    #[test]
    fn flat_mapping_is_a_flat_sequence() -> Result<()> {
        let yaml = "domain: {name: vm1, vcpu: 4, running: false, title: ~, ratio: 0.5}";
        let res = from_yaml_to_xml(yaml, OutputMode::Compact)?;
        assert_eq!(
            res,
            "<domain><name>vm1</name><vcpu>4</vcpu><running>False</running>\
             <title>None</title><ratio>0.5</ratio></domain>"
        );
        Ok(())
    }

    #[test]
    fn pretty_and_compact_match_once_stripped() -> Result<()> {
        let string = fs::read_to_string(template_path()).into_diagnostic()?;
        let compact = from_yaml_to_xml(&string, OutputMode::Compact)?;
        let pretty = from_yaml_to_xml(&string, OutputMode::Pretty)?;
        assert!(pretty.starts_with(&format!("{}\n", xml::XML_DECLARATION)));
        assert_eq!(strip(&pretty), compact);
        Ok(())
    }

    #[test]
    fn round_trip_keeps_every_key_path() -> Result<()> {
        let string = fs::read_to_string(template_path()).into_diagnostic()?;
        let value = from_yaml(&string, "ubuntu-template.yaml")?;
        let tree = DomainTree::from_document(&value)?;
        for mode in [OutputMode::Compact, OutputMode::Pretty] {
            let xml = to_xml(&tree, mode, DEFAULT_INDENT)?;
            let res = from_xml(&xml)?;
            assert_eq!(res.root().leaves(), tree.root().leaves());
        }
        Ok(())
    }

    #[test]
    fn convert_file_is_idempotent() -> Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        let config = config_in(dir.path(), TEMPLATE, OutputMode::Pretty)?;

        let first = convert(&config)?;
        let first_bytes = fs::read(&config.destination).into_diagnostic()?;
        let second = convert(&config)?;
        let second_bytes = fs::read(&config.destination).into_diagnostic()?;

        assert_eq!(first, second);
        assert_eq!(first_bytes, second_bytes);
        assert_eq!(first_bytes, first.as_bytes());

        check(&config)?;
        Ok(())
    }

    #[test]
    fn missing_domain_leaves_destination_untouched() -> Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        let config = config_in(dir.path(), "vm: {name: vm1}", OutputMode::Compact)?;

        let res = convert(&config);
        assert!(matches!(
            res,
            Err(DomxmlError::SchemaError(SchemaError::MissingDomain))
        ));
        assert!(!config.destination.exists());

        fs::write(&config.destination, "previous").into_diagnostic()?;
        let res = convert(&config);
        assert!(res.is_err());
        assert_eq!(
            fs::read_to_string(&config.destination).into_diagnostic()?,
            "previous"
        );
        Ok(())
    }

    #[test]
    fn sequence_value_is_a_schema_error() -> Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        let yaml = "domain:\n  name: vm1\n  disks: [a, b]\n";
        let config = config_in(dir.path(), yaml, OutputMode::Compact)?;
        let res = convert(&config);
        assert!(matches!(
            res,
            Err(DomxmlError::SchemaError(SchemaError::UnsupportedValue { .. }))
        ));
        assert!(!config.destination.exists());
        Ok(())
    }

    #[test]
    fn check_detects_edited_output() -> Result<()> {
        let dir = tempfile::tempdir().into_diagnostic()?;
        let config = config_in(dir.path(), TEMPLATE, OutputMode::Compact)?;
        convert(&config)?;
        fs::write(
            &config.destination,
            "<domain><name>vm2</name><memory>2048</memory><cpu><count>2</count></cpu></domain>",
        )
        .into_diagnostic()?;
        let res = check(&config);
        assert!(matches!(res, Err(DomxmlError::LibError(_))));
        Ok(())
    }

    #[test]
    fn missing_source_is_an_io_error() {
        let config = ConvertConfig::builder()
            .source("./does/not/exist.yaml")
            .build();
        let res = convert(&config);
        assert!(matches!(res, Err(DomxmlError::FileError(_))));
    }
}
