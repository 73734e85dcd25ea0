//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML config
//! file, and every field has a working default so the server runs with no
//! config at all.

use serde::{Deserialize, Serialize};

/// Root configuration for the wiki server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct WikiConfig {
    /// Listener configuration (bind address, ephemeral mode).
    pub listener: ListenerConfig,

    /// Page storage backend selection and paths.
    pub store: StoreConfig,

    /// Wiki behavior options.
    pub wiki: WikiOptions,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address for fixed mode (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// When true, bind an OS-assigned loopback port and write the bound
    /// address to `port_file` before serving. Used by test harnesses.
    pub ephemeral: bool,

    /// Where the bound address is written in ephemeral mode.
    pub port_file: String,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            ephemeral: false,
            port_file: "final-port.txt".to_string(),
            request_timeout_secs: 30,
        }
    }
}

/// Which persistence backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// One file per page under `data_dir`.
    File,
    /// A single-table SQLite database at `db_path`.
    Sqlite,
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Selected backend.
    pub backend: StoreBackend,

    /// Page directory for the file backend.
    pub data_dir: String,

    /// Database file for the sqlite backend.
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::File,
            data_dir: "data".to_string(),
            db_path: "wiki.db".to_string(),
        }
    }
}

/// Wiki behavior options.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct WikiOptions {
    /// Title rendered when a request path does not fit the wiki URL shape.
    pub fallback_title: String,
}

impl Default for WikiOptions {
    fn default() -> Self {
        Self {
            fallback_title: "TestPage".to_string(),
        }
    }
}
