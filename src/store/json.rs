//! `order.json` file sink

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::OrderStore;
use crate::Result;
use crate::order::Order;

/// Default order file, relative to the working directory
pub const DEFAULT_ORDER_PATH: &str = "order.json";

/// Writes each order as indented JSON to a fixed path
///
/// Writes truncate and replace the file in place; there is no temp-file
/// rename and no lock, so concurrent submitters race and the last one wins.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store writing to `path`
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Target file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_ORDER_PATH)
    }
}

#[async_trait]
impl OrderStore for JsonFileStore {
    async fn persist(&self, order: &Order) -> Result<()> {
        let body = serde_json::to_string_pretty(order)?;
        tokio::fs::write(&self.path, body).await?;
        Ok(())
    }

    async fn load(&self) -> Result<Option<Order>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        format!("json:{}", self.path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[tokio::test]
    async fn writes_indented_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("order.json"));
        let order = Order::new(
            "Latte",
            "Tall",
            "Oat",
            vec!["Vanilla syrup".to_string()],
            "Amir",
        );
        store.persist(&order).await.unwrap();

        let written = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            written,
            "{\n  \"drinkType\": \"Latte\",\n  \"size\": \"Tall\",\n  \"milk\": \"Oat\",\n  \"extras\": [\n    \"Vanilla syrup\"\n  ],\n  \"name\": \"Amir\"\n}"
        );
    }

    #[tokio::test]
    async fn empty_extras_stay_an_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("order.json"));
        store
            .persist(&Order::new("Cold Brew", "Venti", "No milk / Black", vec![], "Kai"))
            .await
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value["extras"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn load_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("order.json"));
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn persist_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("no-such-dir").join("order.json"));
        let err = store
            .persist(&Order::new("Latte", "Tall", "Oat", vec![], "Amir"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn default_path_is_order_json() {
        assert_eq!(JsonFileStore::default().path(), Path::new("order.json"));
    }
}
