//! Validation and coercion of raw candidates into canonical draw results.

use lottocheck_core::games::GameConfig;
use lottocheck_core::types::DrawResult;

use crate::candidate::RawDrawCandidate;
use crate::error::FetchError;

/// Today's date as `YYYY-MM-DD`, used when a source reports no draw date.
#[must_use]
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().to_string()
}

/// Validate a raw candidate against the game's rules and build the canonical
/// [`DrawResult`].
///
/// Counts must match the game exactly and every value must fall in
/// `[1, max]`; a candidate that misses is rejected whole, never truncated or
/// padded. Accepted values pass through unmodified, in source order.
///
/// # Errors
///
/// Returns [`FetchError::InvalidShape`] describing the first rule the
/// candidate broke.
pub fn normalize_candidate(
    candidate: &RawDrawCandidate,
    game: &GameConfig,
) -> Result<DrawResult, FetchError> {
    if candidate.game_id != game.id {
        return Err(invalid(
            game,
            format!("candidate is for game '{}'", candidate.game_id),
        ));
    }

    if candidate.main_numbers.len() != game.main_count {
        return Err(invalid(
            game,
            format!(
                "expected {} main numbers, got {}",
                game.main_count,
                candidate.main_numbers.len()
            ),
        ));
    }

    if candidate.bonus_numbers.len() != game.bonus_count {
        return Err(invalid(
            game,
            format!(
                "expected {} bonus numbers, got {}",
                game.bonus_count,
                candidate.bonus_numbers.len()
            ),
        ));
    }

    let main_numbers = check_range(&candidate.main_numbers, game.main_max)
        .map_err(|value| invalid(game, format!("main number {value} out of range")))?;
    let bonus_numbers = check_range(&candidate.bonus_numbers, game.bonus_max)
        .map_err(|value| invalid(game, format!("bonus number {value} out of range")))?;

    let draw_date = candidate
        .draw_date
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(today_iso, str::to_string);

    Ok(DrawResult {
        id: format!("{}-{}", game.id, draw_date),
        game_id: game.id.clone(),
        draw_date,
        main_numbers,
        bonus_numbers,
        prizes: vec![],
    })
}

fn check_range(values: &[i64], max: u8) -> Result<Vec<u8>, i64> {
    values
        .iter()
        .map(|&v| {
            if (1..=i64::from(max)).contains(&v) {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                Ok(v as u8)
            } else {
                Err(v)
            }
        })
        .collect()
}

fn invalid(game: &GameConfig, reason: String) -> FetchError {
    FetchError::InvalidShape {
        game_id: game.id.clone(),
        reason,
    }
}
