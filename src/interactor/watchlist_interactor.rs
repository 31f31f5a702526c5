use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use async_trait::async_trait;
use log::{info, warn};

use crate::coingecko::{PriceService, SearchService};
use crate::entity::{CandidateToken, PortfolioTotals, WatchlistToken};
use crate::storage::WatchlistStorage;
use crate::store::{compute_totals, parse_holdings, WatchlistStore};

/// Use-case layer over the watchlist store: pairs the synchronous store
/// mutations with the async search/price collaborators and persists state
/// after every mutation.
#[async_trait]
pub trait WatchlistInteractor: Send + Sync {
    async fn get_watchlist(&self) -> Vec<WatchlistToken>;
    async fn last_updated(&self) -> Option<String>;

    /// Trending candidates filtered by query, minus already-watched ids.
    async fn search_trending(&self, query: &str) -> Result<Vec<CandidateToken>>;

    /// Add the trending tokens with the given ids; returns the tokens that
    /// were actually added (duplicates and unknown ids are skipped).
    async fn add_tokens(&self, ids: &[String]) -> Result<Vec<WatchlistToken>>;

    /// Returns the removed token, or None if the id was not watched.
    async fn remove_token(&self, id: &str) -> Result<Option<WatchlistToken>>;

    /// Parse and apply a user-entered holdings amount. Invalid input fails
    /// with a ValidationError and leaves the token untouched; an unknown id
    /// yields Ok(None).
    async fn set_holdings(&self, id: &str, input: &str) -> Result<Option<WatchlistToken>>;

    /// Refresh prices for every watched token and return the updated list.
    async fn refresh_prices(&self) -> Result<Vec<WatchlistToken>>;

    async fn portfolio(&self) -> PortfolioTotals;
}

pub struct WatchlistInteractorImpl {
    store: Arc<Mutex<WatchlistStore>>,
    search_service: Arc<dyn SearchService>,
    price_service: Arc<dyn PriceService>,
    storage: Arc<WatchlistStorage>,
}

impl WatchlistInteractorImpl {
    pub fn new(
        store: Arc<Mutex<WatchlistStore>>,
        search_service: Arc<dyn SearchService>,
        price_service: Arc<dyn PriceService>,
        storage: Arc<WatchlistStorage>,
    ) -> Self {
        Self {
            store,
            search_service,
            price_service,
            storage,
        }
    }

    fn store(&self) -> MutexGuard<'_, WatchlistStore> {
        self.store.lock().expect("watchlist store mutex poisoned")
    }

    /// Persistence is best effort: a failed save is logged, never fatal.
    fn persist(&self, store: &WatchlistStore) {
        if let Err(e) = self.storage.save(store.state()) {
            warn!("Failed to persist watchlist: {:#}", e);
        }
    }
}

#[async_trait]
impl WatchlistInteractor for WatchlistInteractorImpl {
    async fn get_watchlist(&self) -> Vec<WatchlistToken> {
        self.store().tokens().to_vec()
    }

    async fn last_updated(&self) -> Option<String> {
        self.store().last_updated().map(str::to_string)
    }

    async fn search_trending(&self, query: &str) -> Result<Vec<CandidateToken>> {
        let candidates = self.search_service.fetch_trending().await?;

        let store = self.store();
        Ok(candidates
            .into_iter()
            .filter(|candidate| !store.contains(&candidate.id))
            .filter(|candidate| candidate.matches_query(query))
            .collect())
    }

    async fn add_tokens(&self, ids: &[String]) -> Result<Vec<WatchlistToken>> {
        let candidates = self.search_service.fetch_trending().await?;
        let selected: Vec<CandidateToken> = candidates
            .into_iter()
            .filter(|candidate| ids.contains(&candidate.id))
            .collect();

        let mut store = self.store();
        let before: Vec<String> = store.tokens().iter().map(|t| t.id.clone()).collect();
        store.add_tokens(selected);

        let added: Vec<WatchlistToken> = store
            .tokens()
            .iter()
            .filter(|token| !before.contains(&token.id))
            .cloned()
            .collect();

        info!("Added {} tokens to the watchlist", added.len());
        self.persist(&store);

        Ok(added)
    }

    async fn remove_token(&self, id: &str) -> Result<Option<WatchlistToken>> {
        let mut store = self.store();
        let removed = store.get(id).cloned();
        if removed.is_some() {
            store.remove_token(id);
            self.persist(&store);
        }
        Ok(removed)
    }

    async fn set_holdings(&self, id: &str, input: &str) -> Result<Option<WatchlistToken>> {
        let holdings = parse_holdings(input)?;

        let mut store = self.store();
        if !store.contains(id) {
            return Ok(None);
        }

        store.set_holdings(id, holdings)?;
        let token = store.get(id).cloned();
        self.persist(&store);

        Ok(token)
    }

    async fn refresh_prices(&self) -> Result<Vec<WatchlistToken>> {
        let ids: Vec<String> = self.store().tokens().iter().map(|t| t.id.clone()).collect();

        // An empty watchlist skips the HTTP call but still runs the store
        // operation, which stamps last_updated either way.
        let updates = if ids.is_empty() {
            vec![]
        } else {
            self.price_service.fetch_prices(&ids).await?
        };

        let mut store = self.store();
        store.refresh_prices(updates);
        self.persist(&store);

        Ok(store.tokens().to_vec())
    }

    async fn portfolio(&self) -> PortfolioTotals {
        compute_totals(self.store().tokens())
    }
}
