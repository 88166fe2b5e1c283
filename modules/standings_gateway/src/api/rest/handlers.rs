use axum::{extract::Path, response::Json, Extension};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use crate::api::rest::dto::{LeagueDto, UserDto};
use crate::api::rest::error::ApiError;
use crate::domain::error::DomainError;
use crate::domain::service::Service;

/// Get the stored league-year item verbatim
pub async fn get_league(
    Extension(svc): Extension<Arc<Service>>,
    Path(year): Path<String>,
) -> Result<Json<Value>, ApiError> {
    info!("Getting league data for year: {}", year);

    match svc.get_league(&year).await {
        Ok(item) => Ok(Json(item)),
        Err(DomainError::LeagueNotFound { .. }) => Err(ApiError::NotFound(
            "Could not find league data for year".to_string(),
        )),
        Err(e) => {
            error!("Failed to retrieve league data for {}: {}", year, e);
            Err(ApiError::Internal(
                "Could not retrieve league data".to_string(),
            ))
        }
    }
}

/// Overwrite the league-year record; requires a `data` field in the body
pub async fn put_league(
    Extension(svc): Extension<Arc<Service>>,
    Path(year): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<LeagueDto>, ApiError> {
    info!("Storing league data for year: {}", year);

    let data = match body.get("data") {
        Some(data) if !data.is_null() => data.clone(),
        _ => {
            return Err(ApiError::BadRequest(
                "\"data\" is required in body".to_string(),
            ))
        }
    };

    match svc.put_league(&year, data).await {
        Ok(record) => Ok(Json(LeagueDto::from(record))),
        Err(e) => {
            error!("Failed to store league data for {}: {}", year, e);
            Err(ApiError::Internal(
                "Could not create/update league data".to_string(),
            ))
        }
    }
}

/// Get a user by id, stripped to `userId` and `name`
pub async fn get_user(
    Extension(svc): Extension<Arc<Service>>,
    Path(user_id): Path<String>,
) -> Result<Json<UserDto>, ApiError> {
    info!("Getting user with id: {}", user_id);

    match svc.get_user(&user_id).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(DomainError::UserNotFound { .. }) => Err(ApiError::NotFound(
            "Could not find user with provided \"userId\"".to_string(),
        )),
        Err(e) => {
            error!("Failed to get user {}: {}", user_id, e);
            Err(ApiError::Internal("Could not retrieve user".to_string()))
        }
    }
}

/// Overwrite a user record. Validation aborts on the first failing check.
pub async fn put_user(
    Extension(svc): Extension<Arc<Service>>,
    Json(body): Json<Value>,
) -> Result<Json<UserDto>, ApiError> {
    let Some(user_id) = body.get("userId").and_then(Value::as_str) else {
        return Err(ApiError::BadRequest(
            "\"userId\" must be a string".to_string(),
        ));
    };
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return Err(ApiError::BadRequest(
            "\"name\" must be a string".to_string(),
        ));
    };

    info!("Storing user: {}", user_id);

    match svc.put_user(user_id.to_string(), name.to_string()).await {
        Ok(user) => Ok(Json(UserDto::from(user))),
        Err(e) => {
            error!("Failed to store user {}: {}", user_id, e);
            Err(ApiError::Internal("Could not create user".to_string()))
        }
    }
}

/// Catch-all for unmatched routes
pub async fn not_found() -> ApiError {
    ApiError::NotFound("Not Found".to_string())
}
