use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{ShieldError, ShieldResult};

pub fn read_config<P: AsRef<Path>>(path: P) -> ShieldResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|source| ShieldError::Io {
        path: path.as_ref().to_path_buf(),
        source,
    })
}

pub fn parse_ron<T: DeserializeOwned>(content: &str) -> ShieldResult<T> {
    Ok(ron::from_str(content)?)
}

pub fn require_non_empty<T>(items: &[T], what: &str) -> ShieldResult<()> {
    if items.is_empty() {
        return Err(ShieldError::Config(format!("{} must not be empty", what)));
    }
    Ok(())
}
