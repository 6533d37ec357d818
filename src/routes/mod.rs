use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};

pub mod catalog;
pub mod plans;
pub mod recommendations;
mod state;

pub use state::AppState;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_id_middleware))
                .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
                .layer(CorsLayer::permissive()),
        )
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/recommendations", post(recommendations::recommend))
        .route("/catalog/rackets", get(catalog::list_rackets))
        .route("/catalog/rackets/:racket_id", get(catalog::get_racket))
        .route("/catalog/strings", get(catalog::list_strings))
        .route("/catalog/drills", get(catalog::list_drills))
        .route("/catalog/drills/:drill_id", get(catalog::get_drill))
        .route("/catalog/equipment", get(catalog::list_equipment))
        .route("/plans", post(plans::create_plan))
        .route(
            "/plans/:plan_id",
            get(plans::get_plan)
                .patch(plans::update_plan)
                .delete(plans::delete_plan),
        )
        .route("/users/:user_id/plans", get(plans::list_user_plans))
        .route("/users/:user_id/plans/latest", get(plans::latest_plan))
        .route("/users/:user_id/plans/previous", get(plans::previous_plan))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
