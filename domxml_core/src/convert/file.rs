use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

// Error Handling
use domxml_error::{DomxmlError, FileError};
use log::debug;

pub fn read_to_string(path: &Path) -> Result<String, DomxmlError> {
    debug!("Read file {:?}.", path);
    let string = fs::read_to_string(path).map_err(|e| FileError::read(path, e))?;
    Ok(string)
}

/**
Write the string to a temporary file next to the destination
and rename it over the destination.
The destination is either left untouched or fully written.
*/
pub fn write_atomic(path: &Path, string: &str) -> Result<(), DomxmlError> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| FileError::write(path, e))?;
    debug!("Write temporary file {:?}.", file.path());

    file.write_all(string.as_bytes())
        .and_then(|_| file.as_file().sync_all())
        .map_err(|e| FileError::write(path, e))?;
    keep_permissions(path, &file).map_err(|e| FileError::write(path, e))?;

    file.persist(path)
        .map_err(|e| FileError::write(path, e.error))?;
    debug!("Renamed temporary file to {:?}.", path);
    Ok(())
}

/**
Temporary files are created user-only.
Reuse the permissions of the file being replaced, or the usual 0644.
*/
#[cfg(unix)]
fn keep_permissions(path: &Path, file: &NamedTempFile) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = match fs::metadata(path) {
        Ok(metadata) => metadata.permissions(),
        Err(_) => fs::Permissions::from_mode(0o644),
    };
    file.as_file().set_permissions(permissions)
}

#[cfg(not(unix))]
fn keep_permissions(_path: &Path, _file: &NamedTempFile) -> std::io::Result<()> {
    Ok(())
}
