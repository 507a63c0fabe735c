use chrono::NaiveDate;
use std::{env, net::SocketAddr, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_LEDGER_PATH: &str = "data/sentiment_data.json";
pub const DEFAULT_DONATIONS_PATH: &str = "data/donated_entries.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    pub ledger_path: PathBuf,
    pub donations_path: PathBuf,
    /// Earliest date a user may select or record against.
    pub min_date: NaiveDate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            ledger_path: PathBuf::from(DEFAULT_LEDGER_PATH),
            donations_path: PathBuf::from(DEFAULT_DONATIONS_PATH),
            min_date: default_min_date(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source, falling back to
    /// defaults for anything unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let mut config = Self::default();

        if let Some(port) = lookup("PORT") {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| format!("PORT must be a port number, got '{port}'"))?;
        }
        if let Some(path) = lookup("MOOD_LEDGER_PATH") {
            config.ledger_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("MOOD_DONATIONS_PATH") {
            config.donations_path = PathBuf::from(path);
        }
        if let Some(date) = lookup("MOOD_MIN_DATE") {
            config.min_date = date
                .trim()
                .parse()
                .map_err(|_| format!("MOOD_MIN_DATE must be YYYY-MM-DD, got '{date}'"))?;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}

fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MIN)
}
