//! SQLite page storage.
//!
//! # Responsibilities
//! - Keep all pages in a single `wiki` table keyed by title
//! - Upsert on save so a title never holds more than one row
//!
//! # Design Decisions
//! - Schema is created only when the database file is absent; startup probes
//!   the path instead of re-running DDL on every boot
//! - Every operation opens its own connection and runs on the blocking
//!   thread pool (rusqlite is synchronous); no connection is shared across
//!   requests
//! - The upsert is a single INSERT OR REPLACE whose id comes from a
//!   subselect on the title, run inside a transaction, so a repeated save
//!   replaces the row instead of adding one

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use crate::page::Page;
use crate::store::{PageStore, StoreError, StoreResult};

const SCHEMA_SQL: &str = "CREATE TABLE wiki(id integer not null primary key, title text, body blob);";

const UPSERT_SQL: &str =
    "INSERT OR REPLACE INTO wiki VALUES((SELECT id FROM wiki WHERE title = ?1), ?1, ?2)";

/// A single-table SQLite store.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Open a store backed by the database at `db_path`, creating the file
    /// and the `wiki` table on first run.
    pub async fn open(db_path: impl Into<PathBuf>) -> StoreResult<Self> {
        let db_path = db_path.into();
        let path = db_path.clone();
        run_blocking(move || {
            if !path.exists() {
                tracing::info!(path = %path.display(), "database absent, creating schema");
                let conn = Connection::open(&path)?;
                conn.execute_batch(SCHEMA_SQL)?;
            }
            Ok(())
        })
        .await?;
        Ok(Self { db_path })
    }

    /// The database file backing this store.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl PageStore for SqliteStore {
    async fn load(&self, title: &str) -> StoreResult<Page> {
        let path = self.db_path.clone();
        let title = title.to_string();
        run_blocking(move || {
            let conn = Connection::open(&path)?;
            let body: Option<Vec<u8>> = conn
                .query_row(
                    "SELECT body FROM wiki WHERE title = ?1",
                    params![title],
                    |row| row.get(0),
                )
                .optional()?;
            match body {
                Some(body) => Ok(Page::new(title, body)),
                None => Err(StoreError::NotFound(title)),
            }
        })
        .await
    }

    async fn save(&self, page: &Page) -> StoreResult<()> {
        let path = self.db_path.clone();
        let title = page.title.clone();
        let body = page.body.clone();
        run_blocking(move || {
            let mut conn = Connection::open(&path)?;
            let tx = conn.transaction()?;
            tx.execute(UPSERT_SQL, params![title, body])?;
            tx.commit()?;
            tracing::debug!(title = %title, bytes = body.len(), "page saved");
            Ok(())
        })
        .await
    }
}

/// Run a synchronous rusqlite closure off the async runtime.
async fn run_blocking<T, F>(f: F) -> StoreResult<T>
where
    F: FnOnce() -> StoreResult<T> + Send + 'static,
    T: Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result,
        Err(join) => Err(StoreError::Io(std::io::Error::other(join))),
    }
}
