use crate::engine;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Configuration for building a [`crate::engine::Totp`].
///
/// Owned by the caller and read once per engine construction; "reloading"
/// means loading a fresh config, building a new engine, and swapping the
/// reference.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TotpConfig {
    /// Name of the keyed-hash algorithm to bind: `sha1`, `sha256`, or
    /// `sha512`.
    #[serde(default = "default_hash")]
    pub hash: String,
    /// Validation window, in 30-second steps on each side of "now".
    #[serde(default = "default_window")]
    pub window: u32,
}

fn default_hash() -> String {
    "sha256".to_string()
}

const fn default_window() -> u32 {
    engine::DEFAULT_WINDOW
}

impl Default for TotpConfig {
    fn default() -> Self {
        Self {
            hash: default_hash(),
            window: default_window(),
        }
    }
}

/// Loads the configuration from `path`.
///
/// A missing file yields the defaults (SHA-256, window 5).
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(path: &Path) -> io::Result<TotpConfig> {
    if path.exists() {
        let config_str = fs::read_to_string(path)?;
        serde_json::from_str(&config_str).map_err(io::Error::other)
    } else {
        Ok(TotpConfig::default())
    }
}

/// Saves the configuration to `path` as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_config(path: &Path, config: &TotpConfig) -> io::Result<()> {
    let config_str = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
    fs::write(path, config_str)
}
