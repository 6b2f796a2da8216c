use anyhow::{bail, Result};
use std::path::PathBuf;

/// Runtime configuration read from the environment (and `.env` if present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the persistence slots and the log file.
    pub data_dir: PathBuf,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // .env is optional

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match lookup("HIRECONNECT_DATA_DIR") {
            Some(dir) if dir.trim().is_empty() => bail!("HIRECONNECT_DATA_DIR must not be empty"),
            Some(dir) => PathBuf::from(dir),
            None => match lookup("HOME") {
                Some(home) if !home.is_empty() => PathBuf::from(home).join(".hireconnect"),
                _ => PathBuf::from(".hireconnect"),
            },
        };

        Ok(Config {
            data_dir,
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join("hireconnect.log")
    }
}
