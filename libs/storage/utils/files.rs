use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{ErrorKind, Write},
    path::Path,
};

use crate::{StoreError, StoreResult};

/// Create directory and all necessary parent directories of a given path
pub fn create_dir_if_not_exists_deep(path: &Path) -> StoreResult<()> {
    std::fs::create_dir_all(path).map_err(|e| StoreError::io(path, e))
}

/// Read a json document, `Ok(None)` when the file doesn't exist
pub fn read_json_document<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> eyre::Result<Option<T>> {
    let path = path.as_ref();
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };

    Ok(Some(serde_json::from_str(&contents)?))
}

/// Serialize `data` as indented json and overwrite `path`
pub fn save_json_document<T: Serialize, P: AsRef<Path>>(path: P, data: &T) -> StoreResult<()> {
    let path = path.as_ref();
    let serialized = serde_json::to_string_pretty(data)?;
    let mut file = File::create(path).map_err(|e| StoreError::io(path, e))?;
    file.write_all(serialized.as_bytes())
        .map_err(|e| StoreError::io(path, e))?;
    Ok(())
}

/// Remove a file, a missing file is not an error
pub fn remove_file_if_exists(path: &Path) -> StoreResult<()> {
    match std::fs::remove_file(path) {
        Err(e) if e.kind() != ErrorKind::NotFound => Err(StoreError::io(path, e)),
        _ => Ok(()),
    }
}
