//! Mega Millions draw sources: two page scrapes and the utility-service API.

use crate::candidate::RawDrawCandidate;
use crate::error::FetchError;
use crate::fetch::fetch_text;
use crate::sources::html::{extract_ball_numbers, extract_draw_date};
use crate::sources::json_integer;

const GAME_ID: &str = "megamillions";
const MAIN_COUNT: usize = 5;
const MAIN_MAX: i64 = 70;
const BONUS_MAX: i64 = 25;

/// `GET {base}/`: scan the homepage for ball elements. Values outside
/// [1, 70] are noise; the first five qualifying values are main numbers and
/// the next qualifying value that also fits the Mega Ball range is the bonus.
pub(in crate::sources) async fn fetch_home_page(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<RawDrawCandidate, FetchError> {
    let url = format!("{}/", base_url.trim_end_matches('/'));
    let html = fetch_text(client, &url, user_agent).await?;

    let mut main_numbers: Vec<i64> = Vec::with_capacity(MAIN_COUNT);
    let mut bonus_numbers: Vec<i64> = Vec::new();

    for value in extract_ball_numbers(&html) {
        if !(1..=MAIN_MAX).contains(&value) {
            continue;
        }
        if main_numbers.len() < MAIN_COUNT {
            main_numbers.push(value);
        } else if bonus_numbers.is_empty() && value <= BONUS_MAX {
            bonus_numbers.push(value);
            break;
        }
    }

    if main_numbers.len() < MAIN_COUNT || bonus_numbers.is_empty() {
        return Err(FetchError::MissingStructure {
            source_name: "megamillions_home",
            reason: format!(
                "found {} main and {} bonus candidates",
                main_numbers.len(),
                bonus_numbers.len()
            ),
        });
    }

    Ok(RawDrawCandidate {
        game_id: GAME_ID.to_string(),
        draw_date: extract_draw_date(&html),
        main_numbers,
        bonus_numbers,
        source: "megamillions_home",
        raw_data: serde_json::Value::Null,
    })
}

/// `GET {base}/Winning-Numbers/Previous-Drawings.aspx`: positional rule, the
/// first five ball elements are main numbers, the sixth is the Mega Ball.
pub(in crate::sources) async fn fetch_drawings_page(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<RawDrawCandidate, FetchError> {
    let url = format!(
        "{}/Winning-Numbers/Previous-Drawings.aspx",
        base_url.trim_end_matches('/')
    );
    let html = fetch_text(client, &url, user_agent).await?;

    let numbers = extract_ball_numbers(&html);
    if numbers.len() < MAIN_COUNT + 1 {
        return Err(FetchError::MissingStructure {
            source_name: "megamillions_drawings",
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
        source: "megamillions_drawings",
        raw_data: serde_json::Value::Null,
    })
}

/// `GET {base}/cmspages/utilservice.asmx/GetLatestDrawData`: JSON with
/// `DrawDate`, `N1`..`N5`, and `MBall`. The endpoint sometimes
/// double-encodes the payload as a JSON string; unwrap one level if so.
pub(in crate::sources) async fn fetch_latest_api(
    client: &reqwest::Client,
    base_url: &str,
    user_agent: &str,
) -> Result<RawDrawCandidate, FetchError> {
    let url = format!(
        "{}/cmspages/utilservice.asmx/GetLatestDrawData",
        base_url.trim_end_matches('/')
    );
    let body = fetch_text(client, &url, user_agent).await?;

    let mut data: serde_json::Value =
        serde_json::from_str(&body).map_err(|e| FetchError::Json {
            context: url.clone(),
            source: e,
        })?;
    if let serde_json::Value::String(inner) = &data {
        data = serde_json::from_str(inner).map_err(|e| FetchError::Json {
            context: format!("{url} (inner payload)"),
            source: e,
        })?;
    }

    let main_numbers: Vec<i64> = ["N1", "N2", "N3", "N4", "N5"]
        .iter()
        .map(|key| data.get(key).and_then(json_integer))
        .collect::<Option<_>>()
        .ok_or_else(|| FetchError::MissingStructure {
            source_name: "megamillions_api",
            reason: "one of N1..N5 missing or non-numeric".to_string(),
        })?;

    let bonus = data
        .get("MBall")
        .and_then(json_integer)
        .ok_or_else(|| FetchError::MissingStructure {
            source_name: "megamillions_api",
            reason: "MBall missing or non-numeric".to_string(),
        })?;

    let draw_date = data
        .get("DrawDate")
        .and_then(serde_json::Value::as_str)
        .map(str::to_string);

    Ok(RawDrawCandidate {
        game_id: GAME_ID.to_string(),
        draw_date,
        main_numbers,
        bonus_numbers: vec![bonus],
        source: "megamillions_api",
        raw_data: data,
    })
}
