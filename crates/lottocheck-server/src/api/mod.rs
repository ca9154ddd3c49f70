mod check;
mod draws;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use lottocheck_core::games::GamesFile;
use lottocheck_core::types::DrawResult;
use lottocheck_fetch::DrawService;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DrawService>,
    pub games: Arc<GamesFile>,
}

/// Success envelope: `{ "success": true, "data": ..., "source": ... }`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T, source: Option<String>) -> Self {
        Self {
            success: true,
            data,
            source,
        }
    }
}

/// Error envelope: `{ "success": false, "error": ... }` plus a status.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    #[serde(skip)]
    pub status: StatusCode,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
            status,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Attach the game's static prize table to an outgoing draw result.
pub(super) fn attach_prizes(mut result: DrawResult, games: &GamesFile) -> DrawResult {
    if let Some(game) = games.get(&result.game_id) {
        result.prizes = game.prizes.clone();
    }
    result
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/draws", get(draws::get_all_draws))
        .route("/api/v1/draws/{game_id}", get(draws::get_draw))
        .route("/api/v1/check", post(check::check_tickets))
        .layer(
            ServiceBuilder::new()
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    games: Vec<String>,
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ApiResponse::new(
        HealthData {
            status: "ok",
            games: state.service.game_ids(),
        },
        None,
    ))
}
