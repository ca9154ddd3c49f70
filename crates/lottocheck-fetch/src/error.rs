use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Json {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("source {source_name} found no usable draw structure: {reason}")]
    MissingStructure {
        source_name: &'static str,
        reason: String,
    },

    #[error("draw candidate for {game_id} failed validation: {reason}")]
    InvalidShape { game_id: String, reason: String },

    #[error("all draw sources exhausted for game {game_id}")]
    AllSourcesExhausted { game_id: String },

    #[error("unsupported game: {0}")]
    UnsupportedGame(String),
}
