use std::path::{Path, PathBuf};

use serde_json::Value;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::registry::ReportCategory;

/// One row of report data. Key order follows the source document.
pub type Record = serde_json::Map<String, Value>;

pub const DATA_DIR: &str = "data";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid JSON: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: expected a JSON array of records", .path.display())]
    NotAnArray { path: PathBuf },
    #[error("{}: element {index} is not a flat record", .path.display())]
    NotARecord { path: PathBuf, index: usize },
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub records: Vec<Record>,
    pub sha256: String,
}

impl Dataset {
    #[cfg(test)]
    pub fn from_records(records: Vec<Record>) -> Self {
        let bytes = serde_json::to_vec(&records).unwrap_or_default();
        Self {
            records,
            sha256: hex_sha256(&bytes),
        }
    }
}

pub trait DataSource {
    fn load(&self, category: ReportCategory) -> Result<Dataset, LoadError>;
}

/// Reads `<root>/data/<file>.json` for each category.
#[derive(Debug, Clone)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, category: ReportCategory) -> PathBuf {
        self.root.join(DATA_DIR).join(category.meta().file_name)
    }
}

impl DataSource for DirSource {
    fn load(&self, category: ReportCategory) -> Result<Dataset, LoadError> {
        let path = self.path_for(category);
        let bytes = std::fs::read(&path).map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
        let records = decode_records(&path, &bytes)?;
        Ok(Dataset {
            records,
            sha256: hex_sha256(&bytes),
        })
    }
}

pub fn decode_records(path: &Path, bytes: &[u8]) -> Result<Vec<Record>, LoadError> {
    let value: Value = serde_json::from_slice(bytes).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let Value::Array(items) = value else {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            _ => Err(LoadError::NotARecord {
                path: path.to_path_buf(),
                index,
            }),
        })
        .collect()
}

/// Text form of a cell. `None` for null or absent values.
pub fn cell_text(record: &Record, column: &str) -> Option<String> {
    match record.get(column)? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn hex_sha256(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}
