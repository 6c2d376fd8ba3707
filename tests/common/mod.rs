//! Shared test utilities

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use barista_agent::config::file::BaristaConfigFile;
use barista_agent::{BaristaAgent, Config, Error, Order, OrderStore, Result, StoreBackend};

/// Configuration with no file and no environment
#[must_use]
pub fn test_config() -> Config {
    Config::from_sources(BaristaConfigFile::default(), |_| None).expect("failed to build config")
}

/// Agent writing `order.json` into `dir`
#[must_use]
pub fn json_agent(dir: &Path) -> BaristaAgent {
    let mut config = test_config();
    config.store.backend = StoreBackend::Json;
    config.store.order_path = dir.join("order.json");
    BaristaAgent::new(config).expect("failed to build agent")
}

/// Agent whose store always fails to persist
#[must_use]
pub fn failing_agent() -> BaristaAgent {
    BaristaAgent::with_store(test_config(), Arc::new(FailingStore))
}

/// Store that rejects every write
pub struct FailingStore;

#[async_trait]
impl OrderStore for FailingStore {
    async fn persist(&self, _order: &Order) -> Result<()> {
        Err(Error::Store("simulated write failure".to_string()))
    }

    async fn load(&self) -> Result<Option<Order>> {
        Ok(None)
    }

    fn describe(&self) -> String {
        "failing".to_string()
    }
}

/// Read and parse the persisted order file
pub fn read_order_file(path: &Path) -> serde_json::Value {
    let content = std::fs::read_to_string(path).expect("order file missing");
    serde_json::from_str(&content).expect("order file is not JSON")
}
