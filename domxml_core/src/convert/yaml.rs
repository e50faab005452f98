use serde_yaml::Value;

// Error Handling
use domxml_error::{DomxmlError, YamlError};
use log::debug;

/**
Returns a Value from a yaml string.
Anchors are resolved and `<<` merge keys applied.
`name` identifies the source in error reports.
*/
pub fn from_yaml(string: &str, name: &str) -> Result<Value, DomxmlError> {
    let res = serde_yaml::from_str::<Value>(string);
    match res {
        Ok(mut value) => {
            value
                .apply_merge()
                .map_err(|e| YamlError::new(e, name, string))?;
            debug!("Parsed yaml document {name}.");
            Ok(value)
        }
        Err(e) => {
            let err = YamlError::new(e, name, string);
            Err(err.into())
        }
    }
}
