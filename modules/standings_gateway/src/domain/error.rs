use thiserror::Error;

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("No league data stored for year {year}")]
    LeagueNotFound { year: String },

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: String },

    #[error("Store error: {message}")]
    Store { message: String },
}

impl DomainError {
    pub fn league_not_found(year: impl Into<String>) -> Self {
        Self::LeagueNotFound { year: year.into() }
    }

    pub fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_id: user_id.into(),
        }
    }

    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }
}
