use crate::ledger::Ledger;
use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported store version {found} in {}", path.display())]
    UnsupportedVersion { path: PathBuf, found: u32 },
}

/// Reads the ledger from `path`. A missing file is an empty ledger; an
/// unreadable or malformed file is an error so existing data is never
/// silently replaced.
pub async fn load_ledger(path: &Path) -> Result<Ledger, StoreError> {
    Ok(read_json(path).await?.unwrap_or_default())
}

/// Overwrites the stored ledger with `ledger`.
pub async fn persist_ledger(path: &Path, ledger: &Ledger) -> Result<(), StoreError> {
    write_json(path, ledger).await
}

pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

/// Writes the whole document to a sibling temp file, then renames it over
/// `path` so readers see either the old or the new contents.
pub(crate) async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let payload = serde_json::to_vec_pretty(value)?;
    let tmp = temp_path(path);

    fs::write(&tmp, payload)
        .await
        .map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
    fs::rename(&tmp, path)
        .await
        .map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
