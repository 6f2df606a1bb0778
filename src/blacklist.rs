//! Common-password blacklist.
//!
//! Loads a newline-delimited list of known-bad passwords and answers
//! case-insensitive membership queries. The list is an owned value meant to
//! be loaded once at startup and handed to [`crate::Scorer::with_blacklist`].

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default blacklist file location.
pub const BLACKLIST_PATH_ENV: &str = "PW_STRENGTH_BLACKLIST_PATH";

const DEFAULT_BLACKLIST_PATH: &str = "./assets/blacklist.txt";

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// A set of passwords too common to be considered safe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    entries: HashSet<String>,
}

impl Blacklist {
    /// Returns the blacklist file path.
    ///
    /// Priority:
    /// 1. Environment variable `PW_STRENGTH_BLACKLIST_PATH`
    /// 2. Default path `./assets/blacklist.txt`
    pub fn path() -> PathBuf {
        std::env::var(BLACKLIST_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_BLACKLIST_PATH))
    }

    /// Loads the blacklist from [`Blacklist::path`].
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or is empty.
    pub fn load() -> Result<Self, BlacklistError> {
        Self::load_from_path(Self::path())
    }

    /// Loads the blacklist from a specific file path, one password per line.
    /// Entries are lowercased; blank lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if the file does not exist, cannot be read, or is empty.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, BlacklistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: file not found {:?}", path);
            return Err(BlacklistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Blacklist load FAILED: empty file {:?}", path);
            return Err(BlacklistError::EmptyFile);
        }

        let entries: HashSet<String> = content
            .lines()
            .map(|l| l.trim().to_lowercase())
            .filter(|l| !l.is_empty())
            .collect();

        #[cfg(feature = "tracing")]
        tracing::info!("Blacklist loaded: {} passwords from {:?}", entries.len(), path);

        Ok(Self { entries })
    }

    /// Number of passwords in the blacklist.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks membership, case-insensitively.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }
}
