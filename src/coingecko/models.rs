use std::collections::HashMap;

use serde::Deserialize;

use crate::entity::{CandidateSnapshot, CandidateToken};

/// Response shape of GET /search/trending.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingResponse {
    #[serde(default)]
    pub coins: Vec<TrendingCoin>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingCoin {
    pub item: TrendingItem,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingItem {
    pub id: String,
    #[serde(default)]
    pub coin_id: u64,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: String,
    #[serde(default)]
    pub small: String,
    #[serde(default)]
    pub large: String,
    #[serde(default)]
    pub price_btc: f64,
    #[serde(default)]
    pub data: Option<TrendingItemData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrendingItemData {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub price_change_percentage_24h: HashMap<String, f64>,
    #[serde(default)]
    pub sparkline: Option<String>,
}

impl TrendingItem {
    /// Map an API item to a watchlist candidate. Missing numeric fields
    /// default to zero; the snapshot carries the USD 24h change.
    pub fn into_candidate(self) -> CandidateToken {
        let snapshot = self.data.map(|data| CandidateSnapshot {
            price: data.price,
            price_change_percentage_24h: data
                .price_change_percentage_24h
                .get("usd")
                .copied()
                .unwrap_or(0.0),
            sparkline: data.sparkline.filter(|s| !s.is_empty()),
        });

        CandidateToken {
            id: self.id,
            coin_id: self.coin_id,
            name: self.name,
            symbol: self.symbol,
            market_cap_rank: self.market_cap_rank,
            thumb: self.thumb,
            small: self.small,
            large: self.large,
            price_btc: self.price_btc,
            snapshot,
        }
    }
}

/// Response shape of GET /simple/price with include_24hr_change=true:
/// a map from coin id to its quote entry.
pub type SimplePriceResponse = HashMap<String, SimplePriceEntry>;

#[derive(Debug, Clone, Deserialize)]
pub struct SimplePriceEntry {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}
