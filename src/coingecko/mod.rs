pub mod config;
pub mod models;
pub mod price_service;
pub mod search_service;

pub use config::Config;
pub use models::{SimplePriceEntry, SimplePriceResponse, TrendingCoin, TrendingResponse};
pub use price_service::{CoinGeckoPriceService, PriceService};
pub use search_service::{CoinGeckoSearchService, SearchService};
