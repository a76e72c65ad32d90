//! API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Handlers use `State<ApiContext>`; a permissive GET/POST
//! CORS layer wraps the whole tree for browser clients.

use axum::http::Method;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(endpoints::health::check))
        .route(
            "/auth/register/patient",
            post(endpoints::auth::register_patient),
        )
        .route(
            "/auth/register/clinician",
            post(endpoints::auth::register_clinician),
        )
        .route("/auth/login", post(endpoints::auth::login))
        .route("/symptoms", post(endpoints::symptoms::create))
        .route(
            "/patients/:id/symptoms",
            get(endpoints::symptoms::list_for_patient),
        )
        .route("/shares", post(endpoints::shares::create))
        .route(
            "/clinicians/:id/patients",
            get(endpoints::shares::patients_for_clinician),
        )
        .with_state(ctx)
        .layer(cors)
}
