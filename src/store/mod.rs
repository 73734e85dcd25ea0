//! Page persistence.
//!
//! # Responsibilities
//! - Define the storage contract shared by both backends
//! - Distinguish "page absent" from "storage broken" in the error type
//!
//! # Design Decisions
//! - One async trait, two implementations (flat files and SQLite), selected
//!   at startup by configuration rather than build variant
//! - `NotFound` is recoverable (view redirects to edit, edit shows an empty
//!   form); `Io`/`Db` surface as HTTP 500
//! - No retries: a failed operation becomes an immediate error response

pub mod file;
pub mod sqlite;

pub use file::FileStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::page::Page;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No page exists under the requested title.
    #[error("page not found: {0}")]
    NotFound(String),

    /// Filesystem-level failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database-level failure.
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl StoreError {
    /// True when the error means the page simply does not exist, as opposed
    /// to the store itself failing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence contract for wiki pages.
///
/// Saving is last-write-wins per title; concurrent saves to the same title
/// are not serialized by the store (a stated non-goal of the system).
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Load the page stored under `title`, or `NotFound` if absent.
    async fn load(&self, title: &str) -> StoreResult<Page>;

    /// Create or fully replace the page stored under `page.title`.
    async fn save(&self, page: &Page) -> StoreResult<()>;
}
