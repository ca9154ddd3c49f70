//! Powerball draw sources: the numbers API and the previous-results page.

use crate::candidate::RawDrawCandidate;
use crate::error::FetchError;
use crate::fetch::{fetch_json, fetch_text};
use crate::sources::html::{extract_ball_numbers, extract_draw_date};
use crate::sources::json_integer;

const GAME_ID: &str = "powerball";
const MAIN_COUNT: usize = 5;

/// `GET {base}/api/v1/numbers/powerball/recent`: a JSON array of recent
/// draws, newest first. Main numbers arrive space-separated in
/// `field_winning_numbers`; the bonus ball in `field_power_ball`.
pub(in crate::sources) async fn fetch_recent_api(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<RawDrawCandidate, FetchError> {
    let url = format!("{}/api/v1/numbers/powerball/recent", base_url.trim_end_matches('/'));
    let body = fetch_json(client, &url, user_agent).await?;

    let latest = body
        .as_array()
        .and_then(|draws| draws.first())
        .ok_or_else(|| FetchError::MissingStructure {
            source_name: "powerball_api",
            reason: "response is not a non-empty array".to_string(),
        })?;

    let winning = latest
        .get("field_winning_numbers")
        .and_then(serde_json::Value::as_str)
        .ok_or_else(|| FetchError::MissingStructure {
            source_name: "powerball_api",
            reason: "field_winning_numbers missing".to_string(),
        })?;

    let main_numbers: Vec<i64> = winning
        .split_whitespace()
        .take(MAIN_COUNT)
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| FetchError::MissingStructure {
            source_name: "powerball_api",
            reason: format!("non-numeric token in field_winning_numbers: {winning:?}"),
        })?;

    let bonus = latest
        .get("field_power_ball")
        .and_then(json_integer)
        .ok_or_else(|| FetchError::MissingStructure {
            source_name: "powerball_api",
            reason: "field_power_ball missing or non-numeric".to_string(),
        })?;

    let draw_date = latest
        .get("field_draw_date")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);

    Ok(RawDrawCandidate {
        game_id: GAME_ID.to_string(),
        draw_date,
        main_numbers,
        bonus_numbers: vec![bonus],
        source: "powerball_api",
        raw_data: latest.clone(),
    })
}

/// `GET {base}/previous-results`: HTML backup. The first five ball elements
/// in document order are main numbers, the very next one is the Powerball;
/// fewer than six is a structural failure, never a partial result.
pub(in crate::sources) async fn fetch_results_page(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<RawDrawCandidate, FetchError> {
    let url = format!("{}/previous-results", base_url.trim_end_matches('/'));
    let html = fetch_text(client, &url, user_agent).await?;

    let numbers = extract_ball_numbers(&html);
    if numbers.len() < MAIN_COUNT + 1 {
        return Err(FetchError::MissingStructure {
            source_name: "powerball_html",
            reason: format!(
                "found {} ball elements, need {}",
                numbers.len(),
                MAIN_COUNT + 1
            ),
        });
    }

    Ok(RawDrawCandidate {
        game_id: GAME_ID.to_string(),
        draw_date: extract_draw_date(&html),
        main_numbers: numbers[..MAIN_COUNT].to_vec(),
        bonus_numbers: vec![numbers[MAIN_COUNT]],
        source: "powerball_html",
        raw_data: serde_json::Value::Null,
    })
}
