//! Order store port
//!
//! The submission tool persists through [`OrderStore`] so the sink can be
//! swapped: the `order.json` file, a single-slot `SQLite` row, or memory.
//! Every backend keeps only the most recent order.

mod json;
mod memory;
mod sqlite;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::StoreConfig;
use crate::order::Order;
use crate::{Error, Result};

pub use json::{DEFAULT_ORDER_PATH, JsonFileStore};
pub use memory::MemoryOrderStore;
pub use sqlite::SqliteOrderStore;

/// Destination for submitted orders
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist an order, replacing whatever was stored before
    async fn persist(&self, order: &Order) -> Result<()>;

    /// Read back the most recent order
    async fn load(&self) -> Result<Option<Order>>;

    /// Short description for logs, e.g. `json:order.json`
    fn describe(&self) -> String;
}

/// Shared order store handle
pub type SharedOrderStore = Arc<dyn OrderStore>;

/// Available store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreBackend {
    /// Pretty-printed JSON file
    #[default]
    Json,
    /// Single-slot `SQLite` table
    Sqlite,
    /// Process memory only
    Memory,
}

impl FromStr for StoreBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" | "file" => Ok(Self::Json),
            "sqlite" | "db" => Ok(Self::Sqlite),
            "memory" => Ok(Self::Memory),
            other => Err(Error::Config(format!("unknown order store: {other}"))),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Sqlite => write!(f, "sqlite"),
            Self::Memory => write!(f, "memory"),
        }
    }
}

/// Open the configured order store
///
/// # Errors
///
/// Returns error if the `SQLite` database cannot be opened
pub fn open(config: &StoreConfig) -> Result<SharedOrderStore> {
    let store: SharedOrderStore = match config.backend {
        StoreBackend::Json => Arc::new(JsonFileStore::new(&config.order_path)),
        StoreBackend::Sqlite => Arc::new(SqliteOrderStore::open(&config.db_path)?),
        StoreBackend::Memory => Arc::new(MemoryOrderStore::new()),
    };

    tracing::debug!(store = %store.describe(), "order store opened");
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_parses() {
        assert_eq!("json".parse::<StoreBackend>().unwrap(), StoreBackend::Json);
        assert_eq!("SQLite".parse::<StoreBackend>().unwrap(), StoreBackend::Sqlite);
        assert_eq!("memory".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!("redis".parse::<StoreBackend>().is_err());
    }

    #[tokio::test]
    async fn open_each_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = StoreConfig {
            backend: StoreBackend::Json,
            order_path: dir.path().join("order.json"),
            db_path: dir.path().join("orders.db"),
        };

        let json = open(&config).unwrap();
        assert!(json.describe().starts_with("json:"));

        config.backend = StoreBackend::Sqlite;
        let sqlite = open(&config).unwrap();
        assert!(sqlite.describe().starts_with("sqlite:"));

        config.backend = StoreBackend::Memory;
        let memory = open(&config).unwrap();
        assert_eq!(memory.describe(), "memory");
        assert!(memory.load().await.unwrap().is_none());
    }
}
