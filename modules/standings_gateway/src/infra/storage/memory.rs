use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use super::{ItemKey, KeyValueStore, StoreError};

/// In-memory key-value adapter backed by a concurrent map. Tables share one
/// map and are distinguished by the table-name component of the key.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: DashMap<(String, ItemKey), Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get_item(&self, table: &str, key: &ItemKey) -> Result<Option<Value>, StoreError> {
        let entry = (table.to_string(), key.clone());
        Ok(self.items.get(&entry).map(|item| item.value().clone()))
    }

    async fn put_item(&self, table: &str, key: ItemKey, item: Value) -> Result<(), StoreError> {
        self.items.insert((table.to_string(), key), item);
        Ok(())
    }
}
