//! Low-level HTTP helpers shared by the draw sources.
//!
//! One request per call, bounded by the client's timeout. Retrying is the
//! orchestrator's job (by moving to the next source), never done here.

use crate::error::FetchError;

/// Fetch a text/HTML resource body.
pub(crate) async fn fetch_text(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> Result<String, FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .header(
            reqwest::header::ACCEPT,
            "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
        )
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_owned(),
        });
    }

    Ok(response.text().await?)
}

/// Perform a simple GET and parse the body as JSON.
pub(crate) async fn fetch_json(
    client: &reqwest::Client,
    url: &str,
    user_agent: &str,
) -> Result<serde_json::Value, FetchError> {
    let response = client
        .get(url)
        .header(reqwest::header::USER_AGENT, user_agent)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status().as_u16(),
            url: url.to_owned(),
        });
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| FetchError::Json {
        context: url.to_owned(),
        source: e,
    })
}
