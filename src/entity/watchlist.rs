use serde::{Deserialize, Serialize};

/// A single tracked asset with user-entered holdings.
///
/// `value` is derived from `holdings * price` and is recomputed by the store
/// on every mutation that touches either factor; nothing outside the store
/// may set it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistToken {
    pub id: String,
    pub coin_id: u64,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: String,
    pub small: String,
    pub large: String,
    pub price_btc: f64,
    pub price: f64,
    pub price_change_percentage_24h: f64,
    pub sparkline: Option<String>,
    pub holdings: f64,
    pub value: f64,
}

impl WatchlistToken {
    /// Re-derive `value` after a holdings or price change.
    pub(crate) fn recompute_value(&mut self) {
        self.value = self.holdings * self.price;
    }

    // Format price for display
    pub fn format_price(&self) -> String {
        format!("${:.6}", self.price)
    }

    pub fn format_change(&self) -> String {
        let sign = if self.price_change_percentage_24h >= 0.0 {
            "+"
        } else {
            ""
        };
        format!("{}{:.2}%", sign, self.price_change_percentage_24h)
    }

    pub fn format_holdings(&self) -> String {
        format!("{:.4}", self.holdings)
    }

    pub fn format_value(&self) -> String {
        format!("${:.2}", self.value)
    }
}

/// The whole persisted watchlist: insertion-ordered tokens with unique ids
/// plus a human-readable refresh stamp.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WatchlistState {
    pub tokens: Vec<WatchlistToken>,
    pub last_updated: Option<String>,
}
