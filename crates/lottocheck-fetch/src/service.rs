//! Acquisition facade over source chains and the draw cache.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use serde::Serialize;

use lottocheck_core::games::GamesFile;
use lottocheck_core::types::DrawResult;

use crate::cache::DrawCache;
use crate::chain::SourceChain;
use crate::error::FetchError;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a served draw result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawOrigin {
    Cache,
    Live,
}

impl fmt::Display for DrawOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawOrigin::Cache => f.write_str("cache"),
            DrawOrigin::Live => f.write_str("live"),
        }
    }
}

/// A draw result together with its provenance.
#[derive(Debug, Clone)]
pub struct FetchedDraw {
    pub result: DrawResult,
    pub origin: DrawOrigin,
}

/// The single entry point for draw acquisition: cache gate, source chains,
/// and write-through on live fetches.
pub struct DrawService {
    client: reqwest::Client,
    user_agent: String,
    chains: Vec<SourceChain>,
    cache: DrawCache,
}

impl DrawService {
    /// Build a service covering every configured game that has a standard
    /// source chain. Games without one are logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the HTTP client cannot be built.
    pub fn new(
        games: &GamesFile,
        cache: DrawCache,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        let mut chains = Vec::with_capacity(games.games.len());
        for game in &games.games {
            match SourceChain::standard(game.clone()) {
                Some(chain) => chains.push(chain),
                None => {
                    tracing::warn!(game_id = %game.id, "no draw sources registered for game");
                }
            }
        }

        Ok(Self {
            client,
            user_agent: user_agent.into(),
            chains,
            cache,
        })
    }

    /// Build a service around explicit chains, used by tests to point
    /// sources at mock servers.
    ///
    /// # Errors
    ///
    /// Returns the underlying error when the HTTP client cannot be built.
    pub fn with_chains(
        chains: Vec<SourceChain>,
        cache: DrawCache,
        timeout: Duration,
        user_agent: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;
        Ok(Self {
            client,
            user_agent: user_agent.into(),
            chains,
            cache,
        })
    }

    fn chain(&self, game_id: &str) -> Option<&SourceChain> {
        self.chains.iter().find(|c| c.game.id == game_id)
    }

    /// Latest draw for one game: a fresh cache entry when present,
    /// otherwise a live fetch written through to the cache.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::UnsupportedGame`] for an unknown game id, or
    /// the chain's error when every source fails with no fallback.
    pub async fn get_one(&self, game_id: &str) -> Result<FetchedDraw, FetchError> {
        let chain = self
            .chain(game_id)
            .ok_or_else(|| FetchError::UnsupportedGame(game_id.to_string()))?;

        if let Some(result) = self.cache.read(game_id) {
            tracing::debug!(game_id, "serving cached draw");
            return Ok(FetchedDraw {
                result,
                origin: DrawOrigin::Cache,
            });
        }

        let result = chain.fetch(&self.client, &self.user_agent).await?;
        self.cache.write(game_id, &result);
        Ok(FetchedDraw {
            result,
            origin: DrawOrigin::Live,
        })
    }

    /// Latest draws for every configured game, fetched live and
    /// concurrently. The cache-read gate is bypassed so this always reflects
    /// the sources; successes are still written through. A failed game maps
    /// to `None` without disturbing the others.
    pub async fn get_all(&self) -> HashMap<String, Option<DrawResult>> {
        let fetches = self.chains.iter().map(|chain| async {
            let outcome = chain.fetch(&self.client, &self.user_agent).await;
            (chain.game.id.clone(), outcome)
        });

        let mut results = HashMap::with_capacity(self.chains.len());
        for (game_id, outcome) in futures::future::join_all(fetches).await {
            match outcome {
                Ok(result) => {
                    self.cache.write(&game_id, &result);
                    results.insert(game_id, Some(result));
                }
                Err(e) => {
                    tracing::warn!(game_id = %game_id, error = %e, "draw fetch failed");
                    results.insert(game_id, None);
                }
            }
        }
        results
    }

    /// Ids of every game this service can fetch, in configuration order.
    #[must_use]
    pub fn game_ids(&self) -> Vec<String> {
        self.chains.iter().map(|c| c.game.id.clone()).collect()
    }
}
