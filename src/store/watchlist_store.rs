use std::collections::HashSet;

use chrono::Local;
use log::debug;

use crate::entity::{
    CandidateToken, PriceUpdate, ValidationError, WatchlistState, WatchlistToken,
};

/// The canonical token collection. Single owner, synchronous, no I/O: search
/// results and price updates arrive as already-fetched parameters and every
/// mutation runs to completion before the next one starts.
pub struct WatchlistStore {
    state: WatchlistState,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self {
            state: WatchlistState::default(),
        }
    }

    /// Rehydrate from previously persisted state, loaded verbatim.
    pub fn from_state(state: WatchlistState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WatchlistState {
        &self.state
    }

    pub fn tokens(&self) -> &[WatchlistToken] {
        &self.state.tokens
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.state.last_updated.as_deref()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.tokens.iter().any(|token| token.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&WatchlistToken> {
        self.state.tokens.iter().find(|token| token.id == id)
    }

    /// Append candidates that are not already watched, in their given order.
    /// New tokens start with zero holdings; price fields come from the
    /// candidate's snapshot when present and default to zero otherwise.
    /// Stamps `last_updated` even when every candidate was a duplicate.
    pub fn add_tokens(&mut self, candidates: Vec<CandidateToken>) {
        let mut seen: HashSet<String> = self
            .state
            .tokens
            .iter()
            .map(|token| token.id.clone())
            .collect();

        for candidate in candidates {
            if !seen.insert(candidate.id.clone()) {
                debug!("Skipping duplicate candidate: {}", candidate.id);
                continue;
            }

            let snapshot = candidate.snapshot.unwrap_or_default();
            self.state.tokens.push(WatchlistToken {
                id: candidate.id,
                coin_id: candidate.coin_id,
                name: candidate.name,
                symbol: candidate.symbol,
                market_cap_rank: candidate.market_cap_rank,
                thumb: candidate.thumb,
                small: candidate.small,
                large: candidate.large,
                price_btc: candidate.price_btc,
                price: snapshot.price,
                price_change_percentage_24h: snapshot.price_change_percentage_24h,
                sparkline: snapshot.sparkline.filter(|s| !s.is_empty()),
                holdings: 0.0,
                value: 0.0,
            });
        }

        self.stamp();
    }

    /// Remove the token with the given id. Permanent and immediate; absent
    /// ids are a no-op. Does not touch `last_updated`.
    pub fn remove_token(&mut self, id: &str) {
        self.state.tokens.retain(|token| token.id != id);
    }

    /// Set the holdings for a token and re-derive its value. Rejects
    /// negative and non-finite amounts without touching state. An unknown
    /// id is a silent no-op. Does not touch `last_updated`.
    pub fn set_holdings(&mut self, id: &str, holdings: f64) -> Result<(), ValidationError> {
        validate_holdings(holdings)?;

        if let Some(token) = self.state.tokens.iter_mut().find(|token| token.id == id) {
            token.holdings = holdings;
            token.recompute_value();
        }

        Ok(())
    }

    /// Merge a batch of price updates. Updates for unknown ids are ignored.
    /// A sparkline is only overwritten by a non-empty one; absent or empty
    /// sparklines preserve the stored value. Stamps `last_updated`
    /// unconditionally, even for an empty batch.
    pub fn refresh_prices(&mut self, updates: Vec<PriceUpdate>) {
        for update in updates {
            if let Some(token) = self
                .state
                .tokens
                .iter_mut()
                .find(|token| token.id == update.id)
            {
                token.price = update.price;
                token.price_change_percentage_24h = update.change_24h;
                if let Some(sparkline) = update.sparkline.filter(|s| !s.is_empty()) {
                    token.sparkline = Some(sparkline);
                }
                token.recompute_value();
            }
        }

        self.stamp();
    }

    fn stamp(&mut self) {
        self.state.last_updated = Some(Local::now().format("%-I:%M:%S %p").to_string());
    }
}

impl Default for WatchlistStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a user-entered holdings amount, applying the same constraints as
/// `set_holdings`.
pub fn parse_holdings(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let holdings: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::Unparsable(trimmed.to_string()))?;
    validate_holdings(holdings)?;
    Ok(holdings)
}

fn validate_holdings(holdings: f64) -> Result<(), ValidationError> {
    if !holdings.is_finite() {
        return Err(ValidationError::NotFinite);
    }
    if holdings < 0.0 {
        return Err(ValidationError::Negative(holdings));
    }
    Ok(())
}
