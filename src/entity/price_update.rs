use serde::{Deserialize, Serialize};

/// A price refresh for one token, as supplied by the price collaborator.
///
/// An absent or empty `sparkline` means "keep whatever the token already
/// has"; only a non-empty value overwrites the stored one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub id: String,
    pub price: f64,
    pub change_24h: f64,
    pub sparkline: Option<String>,
}
