//! Append-only log of donated free-text entries, kept apart from the
//! ledger. Donations never change sentiment counts.

use crate::models::SentimentLabel;
use crate::storage::{read_json, write_json, StoreError};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DONATION_LOG_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationEntry {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentLabel>,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationLog {
    pub version: u32,
    pub entries: Vec<DonationEntry>,
}

impl Default for DonationLog {
    fn default() -> Self {
        Self {
            version: DONATION_LOG_VERSION,
            entries: Vec::new(),
        }
    }
}

pub async fn load_donations(path: &Path) -> Result<DonationLog, StoreError> {
    let log: DonationLog = read_json(path).await?.unwrap_or_default();
    if log.version != DONATION_LOG_VERSION {
        return Err(StoreError::UnsupportedVersion {
            path: path.to_path_buf(),
            found: log.version,
        });
    }
    Ok(log)
}

/// Adds one entry to the log at `path`, creating the log if needed.
/// Returns the number of entries now stored.
pub async fn append_entry(
    path: &Path,
    text: &str,
    timestamp: DateTime<Local>,
    sentiment: Option<SentimentLabel>,
) -> Result<usize, StoreError> {
    let mut log = load_donations(path).await?;
    log.entries.push(DonationEntry {
        text: text.to_string(),
        sentiment,
        timestamp,
    });
    write_json(path, &log).await?;
    Ok(log.entries.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn append_creates_and_grows_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let now = Local::now();

        assert_eq!(
            append_entry(&path, "first entry", now, Some(SentimentLabel::Happy))
                .await
                .unwrap(),
            1
        );
        assert_eq!(append_entry(&path, "second entry", now, None).await.unwrap(), 2);

        let log = load_donations(&path).await.unwrap();
        assert_eq!(log.version, DONATION_LOG_VERSION);
        assert_eq!(log.entries.len(), 2);
        assert_eq!(log.entries[0].text, "first entry");
        assert_eq!(log.entries[0].sentiment, Some(SentimentLabel::Happy));
        assert_eq!(log.entries[1].sentiment, None);
    }

    #[tokio::test]
    async fn missing_log_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        let log = load_donations(&path).await.unwrap();
        assert!(log.entries.is_empty());
    }

    #[tokio::test]
    async fn unknown_version_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.json");
        std::fs::write(&path, br#"{ "version": 7, "entries": [] }"#).unwrap();

        let err = append_entry(&path, "hello", Local::now(), None)
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::UnsupportedVersion { found: 7, .. }));

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"version\": 7"));
    }
}
