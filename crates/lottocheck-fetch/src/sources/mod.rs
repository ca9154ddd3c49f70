//! Draw-source strategies.
//!
//! Each variant of [`DrawSource`] is one attempt against one fixed external
//! endpoint: a JSON API or an HTML document. A source either produces a raw
//! candidate or fails; it never retries and never returns a partial result.
//! The orchestrator owns ordering and fallback.

mod html;
mod megamillions;
mod powerball;

use crate::candidate::RawDrawCandidate;
use crate::error::FetchError;

/// One external source of winning numbers.
///
/// Variants carry their base URL so tests can point them at a mock server.
#[derive(Debug, Clone)]
pub enum DrawSource {
    /// Powerball's recent-numbers JSON API.
    PowerballApi { base_url: String },
    /// Powerball's previous-results HTML page.
    PowerballResultsPage { base_url: String },
    /// Mega Millions homepage scrape.
    MegaMillionsHome { base_url: String },
    /// Mega Millions previous-drawings HTML page.
    MegaMillionsDrawingsPage { base_url: String },
    /// Mega Millions latest-draw utility-service API.
    MegaMillionsApi { base_url: String },
}

impl DrawSource {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            DrawSource::PowerballApi { .. } => "powerball_api",
            DrawSource::PowerballResultsPage { .. } => "powerball_html",
            DrawSource::MegaMillionsHome { .. } => "megamillions_home",
            DrawSource::MegaMillionsDrawingsPage { .. } => "megamillions_drawings",
            DrawSource::MegaMillionsApi { .. } => "megamillions_api",
        }
    }

    /// Make one attempt against this source's endpoint.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on network failure, an unexpected status, a
    /// malformed payload, or when the expected structure is absent.
    pub async fn attempt(
        &self,
        client: &reqwest::Client,
        user_agent: &str,
    ) -> Result<RawDrawCandidate, FetchError> {
        match self {
            DrawSource::PowerballApi { base_url } => {
                powerball::fetch_recent_api(client, base_url, user_agent).await
            }
            DrawSource::PowerballResultsPage { base_url } => {
                powerball::fetch_results_page(client, base_url, user_agent).await
            }
            DrawSource::MegaMillionsHome { base_url } => {
                megamillions::fetch_home_page(client, base_url, user_agent).await
            }
            DrawSource::MegaMillionsDrawingsPage { base_url } => {
                megamillions::fetch_drawings_page(client, base_url, user_agent).await
            }
            DrawSource::MegaMillionsApi { base_url } => {
                megamillions::fetch_latest_api(client, base_url, user_agent).await
            }
        }
    }
}

/// Fixed sample numbers served when every live source for a game fails.
///
/// Whether a game carries one is explicit per-game policy, decided where the
/// chain is assembled.
#[derive(Debug, Clone)]
pub struct SampleDraw {
    pub game_id: String,
    pub main_numbers: Vec<i64>,
    pub bonus_numbers: Vec<i64>,
}

impl SampleDraw {
    /// Materialize the sample as a candidate dated today.
    #[must_use]
    pub fn candidate(&self) -> RawDrawCandidate {
        RawDrawCandidate {
            game_id: self.game_id.clone(),
            draw_date: Some(crate::normalize::today_iso()),
            main_numbers: self.main_numbers.clone(),
            bonus_numbers: self.bonus_numbers.clone(),
            source: "sample",
            raw_data: serde_json::Value::Null,
        }
    }
}

/// Coerce a JSON number or numeric string into an integer.
pub(crate) fn json_integer(value: &serde_json::Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<i64>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_integer_accepts_numbers_and_numeric_strings() {
        assert_eq!(json_integer(&serde_json::json!(26)), Some(26));
        assert_eq!(json_integer(&serde_json::json!("26")), Some(26));
        assert_eq!(json_integer(&serde_json::json!(" 7 ")), Some(7));
        assert_eq!(json_integer(&serde_json::json!("seven")), None);
        assert_eq!(json_integer(&serde_json::Value::Null), None);
    }

    #[test]
    fn sample_candidate_is_dated_today() {
        let sample = SampleDraw {
            game_id: "megamillions".to_string(),
            main_numbers: vec![7, 11, 22, 29, 38],
            bonus_numbers: vec![4],
        };
        let candidate = sample.candidate();
        assert_eq!(candidate.source, "sample");
        assert_eq!(candidate.main_numbers, vec![7, 11, 22, 29, 38]);
        assert_eq!(
            candidate.draw_date.as_deref(),
            Some(crate::normalize::today_iso().as_str())
        );
    }
}
