use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::entity::WatchlistState;

/// Persists the whole watchlist state as plain JSON and rehydrates it
/// verbatim on startup. No migration logic: the file is the serialized
/// state, nothing more.
pub struct WatchlistStorage {
    path: PathBuf,
}

impl WatchlistStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Storage path from WATCHLIST_PATH, defaulting to ./watchlist.json.
    pub fn from_env() -> Self {
        let path = std::env::var("WATCHLIST_PATH").unwrap_or_else(|_| "watchlist.json".to_string());
        Self::new(path)
    }

    /// Load persisted state; a missing file is an empty watchlist, not an
    /// error.
    pub fn load(&self) -> Result<WatchlistState> {
        if !self.path.exists() {
            debug!("No watchlist file at {}, starting empty", self.path.display());
            return Ok(WatchlistState::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        let state: WatchlistState = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.path.display()))?;

        info!(
            "Loaded {} watched tokens from {}",
            state.tokens.len(),
            self.path.display()
        );

        Ok(state)
    }

    pub fn save(&self, state: &WatchlistState) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let raw = serde_json::to_string_pretty(state).context("Failed to serialize watchlist")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;

        debug!(
            "Saved {} watched tokens to {}",
            state.tokens.len(),
            self.path.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::WatchlistToken;
    use pretty_assertions::assert_eq;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("watchlist-test-{}-{}.json", name, std::process::id()))
    }

    fn token(id: &str) -> WatchlistToken {
        WatchlistToken {
            id: id.to_string(),
            coin_id: 7,
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            market_cap_rank: Some(1),
            thumb: "https://img/thumb.png".to_string(),
            small: String::new(),
            large: String::new(),
            price_btc: 1.0,
            price: 50000.0,
            price_change_percentage_24h: 1.5,
            sparkline: Some("spark".to_string()),
            holdings: 2.0,
            value: 100000.0,
        }
    }

    #[test]
    fn missing_file_loads_as_empty_state() {
        let storage = WatchlistStorage::new(temp_path("missing"));
        let state = storage.load().unwrap();
        assert!(state.tokens.is_empty());
        assert_eq!(state.last_updated, None);
    }

    #[test]
    fn saved_state_round_trips_verbatim() {
        let path = temp_path("roundtrip");
        let storage = WatchlistStorage::new(&path);

        let state = WatchlistState {
            tokens: vec![token("bitcoin")],
            last_updated: Some("9:41:00 AM".to_string()),
        };
        storage.save(&state).unwrap();

        let loaded = storage.load().unwrap();
        assert_eq!(loaded.tokens.len(), 1);
        assert_eq!(loaded.tokens[0].id, "bitcoin");
        assert_eq!(loaded.tokens[0].value, 100000.0);
        assert_eq!(loaded.tokens[0].sparkline.as_deref(), Some("spark"));
        assert_eq!(loaded.last_updated.as_deref(), Some("9:41:00 AM"));

        let _ = fs::remove_file(path);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let path = temp_path("corrupt");
        fs::write(&path, "not json").unwrap();

        let storage = WatchlistStorage::new(&path);
        assert!(storage.load().is_err());

        let _ = fs::remove_file(path);
    }
}
