//! Flat-file page storage.
//!
//! # Responsibilities
//! - Map each title to `data_dir/<title>.txt`
//! - Store the exact body bytes, owner read/write only
//!
//! # Design Decisions
//! - Any failure to read the file reports `NotFound`: a missing page and an
//!   unreadable page both send the user to the edit form
//! - Saves to the same title are not serialized across requests; the last
//!   write wins (deliberate compatibility choice, see DESIGN.md)

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::page::Page;
use crate::store::{PageStore, StoreError, StoreResult};

/// Owner read/write only.
#[cfg(unix)]
const PAGE_FILE_MODE: u32 = 0o600;

/// One file per page under a data directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    data_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `data_dir`, creating the directory if it
    /// does not exist yet.
    pub async fn open(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();
        tokio::fs::create_dir_all(&data_dir).await?;
        Ok(Self { data_dir })
    }

    fn page_path(&self, title: &str) -> PathBuf {
        // Titles are already constrained to [A-Za-z0-9]+ by the resolver,
        // so the joined path cannot escape the data directory.
        self.data_dir.join(format!("{title}.txt"))
    }

    /// The directory pages are stored under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[async_trait]
impl PageStore for FileStore {
    async fn load(&self, title: &str) -> StoreResult<Page> {
        match tokio::fs::read(self.page_path(title)).await {
            Ok(body) => Ok(Page::new(title, body)),
            Err(_) => Err(StoreError::NotFound(title.to_string())),
        }
    }

    async fn save(&self, page: &Page) -> StoreResult<()> {
        let path = self.page_path(&page.title);

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(PAGE_FILE_MODE);

        let mut file = options.open(&path).await?;
        file.write_all(&page.body).await?;
        file.flush().await?;

        // The mode in OpenOptions only applies on create; tighten an
        // existing file too so overwrites keep the same permissions.
        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            tokio::fs::set_permissions(&path, Permissions::from_mode(PAGE_FILE_MODE)).await?;
        }

        tracing::debug!(title = %page.title, bytes = page.body.len(), "page saved");
        Ok(())
    }
}
