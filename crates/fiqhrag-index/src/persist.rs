//! Binary persistence for the flat index.
//!
//! The blob must round-trip byte-exactly: vectors added, saved, loaded and
//! searched reproduce identical results. A missing file and an undecodable
//! file are distinct startup errors.

use std::fs;
use std::path::Path;

use fiqhrag_core::{Error, Result};

use crate::flat::FlatIndex;

pub fn save_index(index: &FlatIndex, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let bytes = bincode::serialize(index).map_err(|e| Error::IndexEncoding(e.to_string()))?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn load_index(path: &Path) -> Result<FlatIndex> {
    if !path.exists() {
        return Err(Error::IndexNotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|e| Error::IndexCorrupt(format!("{}: {}", path.display(), e)))
}
