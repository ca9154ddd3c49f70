//! TTL file cache for draw results, one JSON file per game.
//!
//! The cache is best effort. Every read or write problem, a missing file,
//! unreadable JSON, a failed write, degrades to a miss or a no-op; callers
//! never see an error from this module.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use lottocheck_core::types::DrawResult;

#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Write time as milliseconds since the Unix epoch.
    timestamp: i64,
    data: DrawResult,
}

#[derive(Debug, Clone)]
pub struct DrawCache {
    root: PathBuf,
    ttl: Duration,
}

impl DrawCache {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, ttl: Duration) -> Self {
        Self {
            root: root.into(),
            ttl,
        }
    }

    fn entry_path(&self, game_id: &str) -> PathBuf {
        self.root.join(format!("{game_id}.json"))
    }

    /// A cached result for the game, if one exists and is still fresh.
    #[must_use]
    pub fn read(&self, game_id: &str) -> Option<DrawResult> {
        let path = self.entry_path(game_id);
        let entry = read_entry(&path)?;

        let age_ms = chrono::Utc::now().timestamp_millis() - entry.timestamp;
        #[allow(clippy::cast_possible_truncation)]
        let ttl_ms = self.ttl.as_millis() as i64;
        if age_ms >= ttl_ms {
            tracing::debug!(game_id, age_ms, ttl_ms, "cache entry expired");
            return None;
        }

        Some(entry.data)
    }

    /// Store a result, stamped now. Failures are logged and swallowed.
    pub fn write(&self, game_id: &str, result: &DrawResult) {
        let entry = CacheEntry {
            timestamp: chrono::Utc::now().timestamp_millis(),
            data: result.clone(),
        };
        let path = self.entry_path(game_id);
        if let Err(e) = write_entry(&self.root, &path, &entry) {
            tracing::warn!(game_id, path = %path.display(), error = %e, "cache write failed");
        }
    }
}

fn read_entry(path: &Path) -> Option<CacheEntry> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cache miss");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cache entry unreadable");
            None
        }
    }
}

fn write_entry(root: &Path, path: &Path, entry: &CacheEntry) -> std::io::Result<()> {
    fs::create_dir_all(root)?;
    let json = serde_json::to_string_pretty(entry)?;
    fs::write(path, json)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_root(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "lottocheck-cache-{label}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn draw() -> DrawResult {
        DrawResult {
            id: "powerball-2025-10-13".to_string(),
            game_id: "powerball".to_string(),
            draw_date: "2025-10-13".to_string(),
            main_numbers: vec![13, 14, 32, 52, 64],
            bonus_numbers: vec![12],
            prizes: vec![],
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let cache = DrawCache::new(temp_root("roundtrip"), Duration::from_secs(3600));
        cache.write("powerball", &draw());
        let cached = cache.read("powerball").unwrap();
        assert_eq!(cached, draw());
    }

    #[test]
    fn missing_entry_is_a_miss() {
        let cache = DrawCache::new(temp_root("missing"), Duration::from_secs(3600));
        assert!(cache.read("powerball").is_none());
    }

    #[test]
    fn zero_ttl_expires_immediately() {
        let cache = DrawCache::new(temp_root("zero-ttl"), Duration::ZERO);
        cache.write("powerball", &draw());
        assert!(cache.read("powerball").is_none());
    }

    #[test]
    fn corrupt_entry_is_a_miss() {
        let root = temp_root("corrupt");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("powerball.json"), "{not json").unwrap();
        let cache = DrawCache::new(root, Duration::from_secs(3600));
        assert!(cache.read("powerball").is_none());
    }

    #[test]
    fn entries_are_keyed_by_game() {
        let cache = DrawCache::new(temp_root("keyed"), Duration::from_secs(3600));
        cache.write("powerball", &draw());
        assert!(cache.read("megamillions").is_none());
        assert!(cache.read("powerball").is_some());
    }
}
