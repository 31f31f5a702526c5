use serde::{Deserialize, Serialize};

/// Optional price data attached to a candidate at search time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSnapshot {
    pub price: f64,
    pub price_change_percentage_24h: f64,
    pub sparkline: Option<String>,
}

/// A token proposed by search, not yet part of the watchlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateToken {
    pub id: String,
    pub coin_id: u64,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
    pub small: String,
    pub large: String,
    pub price_btc: f64,
    pub snapshot: Option<CandidateSnapshot>,
}

impl CandidateToken {
    /// Case-insensitive match against name or symbol; an empty query
    /// matches everything.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query) || self.symbol.to_lowercase().contains(&query)
    }
}
