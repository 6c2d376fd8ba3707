//! In-process sink, used by `--store memory` and tests

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::OrderStore;
use crate::Result;
use crate::order::Order;

/// Keeps the last order in memory
#[derive(Debug, Default)]
pub struct MemoryOrderStore {
    current: RwLock<Option<Order>>,
}

impl MemoryOrderStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn persist(&self, order: &Order) -> Result<()> {
        *self.current.write().await = Some(order.clone());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Order>> {
        Ok(self.current.read().await.clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
