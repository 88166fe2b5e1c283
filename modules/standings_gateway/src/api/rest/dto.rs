use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::model::{LeagueRecord, User};

/// REST DTO echoed back from league writes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDto {
    pub year: String,
    pub data: Value,
}

/// REST DTO for user representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub user_id: String,
    pub name: String,
}

impl From<LeagueRecord> for LeagueDto {
    fn from(record: LeagueRecord) -> Self {
        Self {
            year: record.year,
            data: record.data,
        }
    }
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
        }
    }
}
