use std::sync::Arc;

use serde_json::{json, Value};

use crate::domain::error::DomainError;
use crate::domain::model::{LeagueRecord, User};
use crate::infra::storage::{ItemKey, KeyValueStore};

/// Partition value shared by every league-year record.
const LEAGUE_PARTITION: &str = "LEAGUE";

/// Table names for the two record kinds.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub league_table: String,
    pub users_table: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            league_table: "cpffl".to_string(),
            users_table: "users".to_string(),
        }
    }
}

/// Domain service: direct point lookups and whole-item writes against the
/// key-value store, one operation per REST endpoint. No caching, no retries.
pub struct Service {
    store: Arc<dyn KeyValueStore>,
    config: ServiceConfig,
}

impl Service {
    pub fn new(store: Arc<dyn KeyValueStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    fn league_key(year: &str) -> ItemKey {
        ItemKey::composite(LEAGUE_PARTITION, format!("YEAR#{year}"))
    }

    /// Fetch the stored league-year item verbatim (key fields included).
    pub async fn get_league(&self, year: &str) -> Result<Value, DomainError> {
        let key = Self::league_key(year);
        let item = self
            .store
            .get_item(&self.config.league_table, &key)
            .await
            .map_err(|e| DomainError::store(e.to_string()))?;

        item.ok_or_else(|| DomainError::league_not_found(year))
    }

    /// Overwrite the league-year record wholesale.
    pub async fn put_league(&self, year: &str, data: Value) -> Result<LeagueRecord, DomainError> {
        let key = Self::league_key(year);
        let item = json!({
            "PK": LEAGUE_PARTITION,
            "SK": format!("YEAR#{year}"),
            "data": data.clone(),
        });

        self.store
            .put_item(&self.config.league_table, key, item)
            .await
            .map_err(|e| DomainError::store(e.to_string()))?;

        Ok(LeagueRecord {
            year: year.to_string(),
            data,
        })
    }

    /// Fetch a user by exact key, stripped down to `userId` and `name`.
    pub async fn get_user(&self, user_id: &str) -> Result<User, DomainError> {
        let key = ItemKey::simple(user_id);
        let item = self
            .store
            .get_item(&self.config.users_table, &key)
            .await
            .map_err(|e| DomainError::store(e.to_string()))?;

        let item = item.ok_or_else(|| DomainError::user_not_found(user_id))?;

        Ok(User {
            user_id: item
                .get("userId")
                .and_then(Value::as_str)
                .unwrap_or(user_id)
                .to_string(),
            name: item
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string(),
        })
    }

    /// Overwrite the user record wholesale.
    pub async fn put_user(&self, user_id: String, name: String) -> Result<User, DomainError> {
        let key = ItemKey::simple(user_id.clone());
        let item = json!({ "userId": user_id, "name": name });

        self.store
            .put_item(&self.config.users_table, key, item)
            .await
            .map_err(|e| DomainError::store(e.to_string()))?;

        Ok(User { user_id, name })
    }
}
