use axum::{
    routing::{get, put},
    Extension, Router,
};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the gateway router. Four fixed operations plus a uniform 404
/// fallback; the domain service is injected as an extension.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route(
            "/league/{year}",
            get(handlers::get_league).put(handlers::put_league),
        )
        .route("/users/{user_id}", get(handlers::get_user))
        .route("/users", put(handlers::put_user))
        .fallback(handlers::not_found)
        .layer(Extension(service))
}
