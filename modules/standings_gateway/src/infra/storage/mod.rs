use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

pub mod memory;

pub use memory::MemoryStore;

/// Key addressing one item in a key-value table. League records use a
/// composite partition + sort key, user records a simple partition key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub partition: String,
    pub sort: Option<String>,
}

impl ItemKey {
    pub fn simple(partition: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: None,
        }
    }

    pub fn composite(partition: impl Into<String>, sort: impl Into<String>) -> Self {
        Self {
            partition: partition.into(),
            sort: Some(sort.into()),
        }
    }
}

/// Error raised by a storage backend. The message is for server-side logs
/// only and never reaches API callers verbatim.
#[derive(Debug, Error)]
#[error("storage backend error: {message}")]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Port for the backing key-value service: exact-key get and whole-item put.
/// Items are opaque JSON documents; a put fully overwrites any existing item
/// under the same key (last writer wins).
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get_item(&self, table: &str, key: &ItemKey) -> Result<Option<Value>, StoreError>;

    async fn put_item(&self, table: &str, key: ItemKey, item: Value) -> Result<(), StoreError>;
}
