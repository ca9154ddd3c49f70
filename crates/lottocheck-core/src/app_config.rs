use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Path to the YAML game registry.
    pub games_path: PathBuf,
    /// Root directory for per-game draw-result cache files. Always injected
    /// into the cache layer from here; never derived from the working
    /// directory at the point of use.
    pub cache_dir: PathBuf,
    /// Cache entry time-to-live in seconds.
    pub cache_ttl_secs: u64,
    /// Per-request timeout for external draw sources.
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
}
