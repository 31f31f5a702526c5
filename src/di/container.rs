use std::sync::{Arc, Mutex};

use log::warn;

use crate::coingecko::{
    CoinGeckoPriceService, CoinGeckoSearchService, Config, PriceService, SearchService,
};
use crate::entity::WatchlistState;
use crate::interactor::WatchlistInteractorImpl;
use crate::storage::WatchlistStorage;
use crate::store::WatchlistStore;

/// ServiceContainer provides access to core application dependencies
pub struct ServiceContainer {
    storage: Arc<WatchlistStorage>,
    search_service: Arc<dyn SearchService>,
    price_service: Arc<dyn PriceService>,
    interactor: Arc<WatchlistInteractorImpl>,
    coingecko_config: Config,
}

impl ServiceContainer {
    /// Create a new service container, rehydrating the watchlist from the
    /// persisted state file when one exists.
    pub fn new() -> Self {
        let coingecko_config = Config::from_env();

        let storage = Arc::new(WatchlistStorage::from_env());
        let state = match storage.load() {
            Ok(state) => state,
            Err(e) => {
                warn!("Could not load persisted watchlist, starting empty: {:#}", e);
                WatchlistState::default()
            }
        };
        let store = Arc::new(Mutex::new(WatchlistStore::from_state(state)));

        let search_service = Arc::new(CoinGeckoSearchService::new(coingecko_config.clone()))
            as Arc<dyn SearchService>;
        let price_service =
            Arc::new(CoinGeckoPriceService::new(coingecko_config.clone())) as Arc<dyn PriceService>;

        let interactor = Arc::new(WatchlistInteractorImpl::new(
            store,
            search_service.clone(),
            price_service.clone(),
            storage.clone(),
        ));

        Self {
            storage,
            search_service,
            price_service,
            interactor,
            coingecko_config,
        }
    }

    // Accessor methods

    pub fn storage(&self) -> Arc<WatchlistStorage> {
        self.storage.clone()
    }

    pub fn search_service(&self) -> Arc<dyn SearchService> {
        self.search_service.clone()
    }

    pub fn price_service(&self) -> Arc<dyn PriceService> {
        self.price_service.clone()
    }

    pub fn interactor(&self) -> Arc<WatchlistInteractorImpl> {
        self.interactor.clone()
    }

    pub fn coingecko_config(&self) -> Config {
        self.coingecko_config.clone()
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}
