use serde_json::Value;

/// Pure user model (no serde, REST DTOs live in the api layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub user_id: String,
    pub name: String,
}

/// One season's stored standings snapshot. `data` is an opaque payload
/// produced by an external ingestion process; the gateway never interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct LeagueRecord {
    pub year: String,
    pub data: Value,
}
