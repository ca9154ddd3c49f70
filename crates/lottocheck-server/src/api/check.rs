use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use lottocheck_core::types::{CheckResult, DrawResult, LotteryTicket};
use lottocheck_fetch::FetchError;

use super::{attach_prizes, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckRequest {
    #[serde(default)]
    game_id: String,
    #[serde(default)]
    tickets: Vec<LotteryTicket>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct CheckData {
    draw_result: DrawResult,
    results: Vec<CheckResult>,
}

/// `POST /api/v1/check`: acquire the game's latest draw and compare every
/// submitted ticket against it.
pub(super) async fn check_tickets(
    State(state): State<AppState>,
    Json(request): Json<CheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.game_id.trim().is_empty() {
        return Err(ApiError::bad_request("gameId is required"));
    }
    if request.tickets.is_empty() {
        return Err(ApiError::bad_request("tickets must be a non-empty array"));
    }
    let Some(game) = state.games.get(&request.game_id).cloned() else {
        return Err(ApiError::bad_request(format!(
            "unknown game: {}",
            request.game_id
        )));
    };

    let fetched = state
        .service
        .get_one(&request.game_id)
        .await
        .map_err(|e| match e {
            FetchError::UnsupportedGame(id) => {
                ApiError::bad_request(format!("unknown game: {id}"))
            }
            other => {
                tracing::warn!(game_id = %request.game_id, error = %other, "check: draw unavailable");
                ApiError::new(
                    StatusCode::SERVICE_UNAVAILABLE,
                    "draw results are currently unavailable, try again later",
                )
            }
        })?;

    let results = lottocheck_core::check_tickets(&request.tickets, &fetched.result, &game);

    Ok(Json(ApiResponse::new(
        CheckData {
            draw_result: attach_prizes(fetched.result, &state.games),
            results,
        },
        None,
    )))
}
