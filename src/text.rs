use std::path::Path;

use crate::error::Error;

/// Read the whole file at `path` as UTF-8 text.
pub fn load(path: &Path) -> Result<String, Error> {
    let bytes = std::fs::read(path)?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());
    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}
