//! Ordered fallback across a game's draw sources.

use lottocheck_core::games::GameConfig;
use lottocheck_core::types::DrawResult;

use crate::error::FetchError;
use crate::normalize::normalize_candidate;
use crate::sources::{DrawSource, SampleDraw};

const POWERBALL_BASE: &str = "https://www.powerball.com";
const MEGAMILLIONS_BASE: &str = "https://www.megamillions.com";

/// A game's sources in priority order, plus its sample-draw policy.
#[derive(Debug, Clone)]
pub struct SourceChain {
    pub game: GameConfig,
    pub sources: Vec<DrawSource>,
    pub fallback: Option<SampleDraw>,
}

impl SourceChain {
    /// The built-in chain for a known game, or `None` for games with no
    /// registered sources.
    #[must_use]
    pub fn standard(game: GameConfig) -> Option<SourceChain> {
        match game.id.as_str() {
            "powerball" => Some(SourceChain {
                game,
                sources: vec![
                    DrawSource::PowerballApi {
                        base_url: POWERBALL_BASE.to_string(),
                    },
                    DrawSource::PowerballResultsPage {
                        base_url: POWERBALL_BASE.to_string(),
                    },
                ],
                fallback: None,
            }),
            "megamillions" => Some(SourceChain {
                game,
                sources: vec![
                    DrawSource::MegaMillionsHome {
                        base_url: MEGAMILLIONS_BASE.to_string(),
                    },
                    DrawSource::MegaMillionsDrawingsPage {
                        base_url: MEGAMILLIONS_BASE.to_string(),
                    },
                    DrawSource::MegaMillionsApi {
                        base_url: MEGAMILLIONS_BASE.to_string(),
                    },
                ],
                fallback: Some(SampleDraw {
                    game_id: "megamillions".to_string(),
                    main_numbers: vec![7, 11, 22, 29, 38],
                    bonus_numbers: vec![4],
                }),
            }),
            _ => None,
        }
    }

    /// Try each source in order and return the first candidate that
    /// normalizes cleanly. A source failure, whether network, structural, or
    /// a shape rejection, moves on to the next source. When every source has
    /// failed, the sample draw is served if this game carries one.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::AllSourcesExhausted`] when every source failed
    /// and there is no fallback.
    pub async fn fetch(
        &self,
        client: &reqwest::Client,
        user_agent: &str,
    ) -> Result<DrawResult, FetchError> {
        for source in &self.sources {
            tracing::debug!(game_id = %self.game.id, source = source.name(), "trying draw source");
            let candidate = match source.attempt(client, user_agent).await {
                Ok(candidate) => candidate,
                Err(e) => {
                    tracing::warn!(
                        game_id = %self.game.id,
                        source = source.name(),
                        error = %e,
                        "draw source failed"
                    );
                    continue;
                }
            };
            match normalize_candidate(&candidate, &self.game) {
                Ok(result) => {
                    tracing::debug!(
                        game_id = %self.game.id,
                        source = source.name(),
                        draw_date = %result.draw_date,
                        "draw source succeeded"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!(
                        game_id = %self.game.id,
                        source = source.name(),
                        error = %e,
                        "candidate rejected"
                    );
                }
            }
        }

        if let Some(sample) = &self.fallback {
            tracing::warn!(game_id = %self.game.id, "all sources failed, serving sample draw");
            return normalize_candidate(&sample.candidate(), &self.game);
        }

        Err(FetchError::AllSourcesExhausted {
            game_id: self.game.id.clone(),
        })
    }
}
