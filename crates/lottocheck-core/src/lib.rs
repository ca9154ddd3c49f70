pub mod app_config;
pub mod check;
pub mod config;
pub mod games;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use check::{check_ticket, check_tickets, determine_prize, format_prize_amount};
pub use config::{load_app_config, load_app_config_from_env};
pub use games::{load_games, GameConfig, GamesFile};
pub use types::{CheckResult, DrawResult, LotteryTicket, Prize};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read games file at {path}: {source}")]
    GamesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse games file: {0}")]
    GamesFileParse(#[from] serde_yaml::Error),

    #[error("games file validation failed: {0}")]
    Validation(String),
}
