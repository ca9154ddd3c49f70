use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use lottocheck_core::types::DrawResult;
use lottocheck_fetch::FetchError;

use super::{attach_prizes, ApiError, ApiResponse, AppState};

/// `GET /api/v1/draws/{game_id}`: the latest draw for one game, served from
/// cache when fresh.
pub(super) async fn get_draw(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let fetched = state.service.get_one(&game_id).await.map_err(|e| match e {
        FetchError::UnsupportedGame(id) => ApiError::bad_request(format!("unknown game: {id}")),
        FetchError::AllSourcesExhausted { game_id } => ApiError::new(
            StatusCode::NOT_FOUND,
            format!("no draw results available for {game_id}, try again later"),
        ),
        other => {
            tracing::error!(error = %other, "draw acquisition failed");
            ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "failed to fetch draw results",
            )
        }
    })?;

    Ok(Json(ApiResponse::new(
        attach_prizes(fetched.result, &state.games),
        Some(fetched.origin.to_string()),
    )))
}

/// `GET /api/v1/draws`: the latest draw for every configured game, always
/// fetched live. Games whose sources all failed map to `null`.
pub(super) async fn get_all_draws(State(state): State<AppState>) -> impl IntoResponse {
    let draws = state.service.get_all().await;

    let data: HashMap<String, Option<DrawResult>> = draws
        .into_iter()
        .map(|(game_id, result)| {
            (
                game_id,
                result.map(|r| attach_prizes(r, &state.games)),
            )
        })
        .collect();

    Json(ApiResponse::new(data, Some("live".to_string())))
}
