use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod auth;
pub mod services;
pub mod token;
pub mod versions;

use auth::{require_bearer_token_state, ServerState};

/// Build the full application router: token issuance is public, every
/// catalog route sits behind the bearer check.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new().route("/v1/token", post(token::create_token));

    let protected = Router::new()
        .route("/v1/services", get(services::list).post(services::create))
        .route(
            "/v1/services/:service_id",
            get(services::get).patch(services::update).delete(services::delete),
        )
        .route(
            "/v1/services/:service_id/versions",
            get(versions::list).post(versions::create),
        )
        .route(
            "/v1/services/:service_id/versions/:version_id",
            get(versions::get).patch(versions::update).delete(versions::delete),
        )
        // empty path segments never bind a parameter
        .route("/v1/services//versions", post(versions::create_without_service))
        .route("/v1/services//versions/:version_id", get(versions::not_found))
        .route("/v1/services/:service_id/versions/", get(versions::not_found))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_bearer_token_state));

    public
        .merge(protected)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
