//! `SQLite` single-slot sink

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::OrderStore;
use crate::db::{self, DbPool, OrderRepo};
use crate::order::Order;
use crate::{Error, Result};

/// Stores the current order in the `current_order` table
#[derive(Clone)]
pub struct SqliteOrderStore {
    repo: OrderRepo,
    location: Option<PathBuf>,
}

impl SqliteOrderStore {
    /// Open (and migrate) the database at `path`
    ///
    /// # Errors
    ///
    /// Returns error if the database cannot be opened or migrated
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let pool = db::init(path)?;
        Ok(Self {
            repo: OrderRepo::new(pool),
            location: Some(path.to_path_buf()),
        })
    }

    /// Wrap an existing pool
    #[must_use]
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            repo: OrderRepo::new(pool),
            location: None,
        }
    }
}

/// Run a blocking repo call off the async workers
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Store(format!("sqlite task failed: {e}")))?
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn persist(&self, order: &Order) -> Result<()> {
        let repo = self.repo.clone();
        let order = order.clone();
        blocking(move || repo.save(&order)).await
    }

    async fn load(&self) -> Result<Option<Order>> {
        let repo = self.repo.clone();
        blocking(move || repo.current()).await
    }

    fn describe(&self) -> String {
        self.location.as_ref().map_or_else(
            || "sqlite::memory:".to_string(),
            |path| format!("sqlite:{}", path.display()),
        )
    }
}
