//! Configuration loading and schema.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, StoreBackend, StoreConfig, WikiConfig, WikiOptions};
