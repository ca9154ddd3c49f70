use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Prize;
use crate::ConfigError;

/// Rules and prize table for one lottery game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub id: String,
    pub name: String,
    pub state: String,
    /// How many main numbers a draw carries (e.g. 5).
    pub main_count: usize,
    /// Inclusive upper bound for main numbers; valid values are 1..=max.
    pub main_max: u8,
    pub bonus_count: usize,
    pub bonus_max: u8,
    /// Display name of the bonus ball, e.g. "Powerball" or "Mega Ball".
    pub bonus_name: String,
    pub draw_days: Vec<String>,
    pub official_website: String,
    #[serde(default)]
    pub prizes: Vec<Prize>,
}

#[derive(Debug, Deserialize)]
pub struct GamesFile {
    pub games: Vec<GameConfig>,
}

impl GamesFile {
    /// Look up a game by its identifier.
    #[must_use]
    pub fn get(&self, game_id: &str) -> Option<&GameConfig> {
        self.games.iter().find(|g| g.id == game_id)
    }

    /// Identifiers of every configured game, in file order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.games.iter().map(|g| g.id.as_str()).collect()
    }
}

/// Load and validate the game registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_games(path: &Path) -> Result<GamesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::GamesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let games_file: GamesFile = serde_yaml::from_str(&content)?;

    validate_games(&games_file)?;

    Ok(games_file)
}

fn validate_games(games_file: &GamesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();

    for game in &games_file.games {
        if game.id.trim().is_empty() {
            return Err(ConfigError::Validation(
                "game id must be non-empty".to_string(),
            ));
        }

        if !seen_ids.insert(game.id.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate game id: '{}'",
                game.id
            )));
        }

        if game.main_count == 0 {
            return Err(ConfigError::Validation(format!(
                "game '{}' has zero main numbers",
                game.id
            )));
        }

        if usize::from(game.main_max) < game.main_count {
            return Err(ConfigError::Validation(format!(
                "game '{}' draws {} main numbers from only {} values",
                game.id, game.main_count, game.main_max
            )));
        }

        if game.bonus_count > 0 && game.bonus_max == 0 {
            return Err(ConfigError::Validation(format!(
                "game '{}' has bonus numbers but bonus_max is 0",
                game.id
            )));
        }

        let mut seen_tiers = HashSet::new();
        for prize in &game.prizes {
            if prize.match_main > game.main_count || prize.match_bonus > game.bonus_count {
                return Err(ConfigError::Validation(format!(
                    "game '{}' prize '{}' requires more matches than the game draws",
                    game.id, prize.tier
                )));
            }
            if !seen_tiers.insert((prize.match_main, prize.match_bonus)) {
                return Err(ConfigError::Validation(format!(
                    "game '{}' has duplicate prize tier for {} main + {} bonus matches",
                    game.id, prize.match_main, prize.match_bonus
                )));
            }
        }
    }

    Ok(())
}
