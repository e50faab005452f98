use super::{ConvertConfig, CONFIG_FILE};

use std::fs;
use std::path::Path;

// Error Handling
use domxml_error::{DomxmlError, FileError, TomlError};
use log::{debug, info};

impl ConvertConfig {
    /**
    Get config from the provided path,
    or from `./domxml.toml` if it exists,
    or fall back to defaults.
    */
    pub fn get(path: Option<&Path>) -> Result<Self, DomxmlError> {
        info!("Search config file.");
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    debug!("No config file at {:?}, using defaults.", path);
                    Ok(Self::default())
                }
            }
        }
    }
    pub fn from_file(path: &Path) -> Result<Self, DomxmlError> {
        debug!("Read config file {:?}.", path);
        let string = fs::read_to_string(path).map_err(|e| FileError::read(path, e))?;
        Self::from_toml(&string, &path.display().to_string())
    }
    pub fn from_toml(string: &str, name: &str) -> Result<Self, DomxmlError> {
        let res = toml::from_str::<Self>(string);
        match res {
            Ok(res) => Ok(res),
            Err(e) => {
                let err = TomlError::new(e, name, string);
                Err(err.into())
            }
        }
    }
}
