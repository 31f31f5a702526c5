use crate::entity::{Allocation, PortfolioTotals, WatchlistToken};

/// Size of the fixed presentation palette; allocation color indices wrap
/// around it. The actual colors live in the view layer.
pub const PALETTE_SIZE: usize = 15;

/// Derive portfolio totals from the current watchlist. Pure and side-effect
/// free, recomputed on every read rather than cached.
///
/// Only tokens with holdings strictly greater than zero participate; they
/// are excluded entirely, not shown as 0%. The total is recomputed from
/// `holdings * price` rather than the stored `value` field so a stale
/// cached value can never skew the aggregate.
pub fn compute_totals(tokens: &[WatchlistToken]) -> PortfolioTotals {
    let relevant: Vec<&WatchlistToken> = tokens.iter().filter(|t| t.holdings > 0.0).collect();

    let total_value: f64 = relevant.iter().map(|t| t.holdings * t.price).sum();

    let allocations = relevant
        .iter()
        .enumerate()
        .map(|(index, token)| Allocation {
            id: token.id.clone(),
            name: token.name.clone(),
            symbol: token.symbol.to_uppercase(),
            percent: if total_value > 0.0 {
                token.holdings * token.price / total_value * 100.0
            } else {
                0.0
            },
            color_index: index % PALETTE_SIZE,
        })
        .collect();

    PortfolioTotals {
        total_value,
        allocations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn token(id: &str, holdings: f64, price: f64) -> WatchlistToken {
        WatchlistToken {
            id: id.to_string(),
            coin_id: 1,
            name: id.to_string(),
            symbol: id.to_string(),
            market_cap_rank: None,
            thumb: String::new(),
            small: String::new(),
            large: String::new(),
            price_btc: 0.0,
            price,
            price_change_percentage_24h: 0.0,
            sparkline: None,
            holdings,
            value: holdings * price,
        }
    }

    #[test]
    fn empty_watchlist_yields_empty_totals() {
        let totals = compute_totals(&[]);
        assert_eq!(totals.total_value, 0.0);
        assert!(totals.allocations.is_empty());
        assert!(!totals.has_data());
    }

    #[test]
    fn zero_holdings_tokens_are_excluded() {
        let tokens = vec![token("btc", 1.0, 50000.0), token("eth", 0.0, 3000.0)];
        let totals = compute_totals(&tokens);

        assert_eq!(totals.total_value, 50000.0);
        assert_eq!(totals.allocations.len(), 1);
        assert_eq!(totals.allocations[0].id, "btc");
        assert_eq!(totals.allocations[0].percent, 100.0);
    }

    #[test]
    fn percentages_split_by_live_value() {
        let tokens = vec![token("btc", 1.0, 75.0), token("eth", 5.0, 5.0)];
        let totals = compute_totals(&tokens);

        assert_eq!(totals.total_value, 100.0);
        assert_eq!(totals.allocations[0].percent, 75.0);
        assert_eq!(totals.allocations[1].percent, 25.0);
    }

    #[test]
    fn live_price_wins_over_stale_cached_value() {
        let mut stale = token("btc", 2.0, 10.0);
        stale.value = 999.0;

        let totals = compute_totals(&[stale]);
        assert_eq!(totals.total_value, 20.0);
    }

    #[test]
    fn zero_total_yields_zero_percents_not_nan() {
        let tokens = vec![token("btc", 2.0, 0.0), token("eth", 3.0, 0.0)];
        let totals = compute_totals(&tokens);

        assert_eq!(totals.total_value, 0.0);
        assert_eq!(totals.allocations.len(), 2);
        for allocation in &totals.allocations {
            assert_eq!(allocation.percent, 0.0);
        }
        assert!(!totals.has_data());
    }

    #[test]
    fn allocations_follow_insertion_order() {
        let tokens = vec![
            token("sol", 1.0, 100.0),
            token("btc", 1.0, 50000.0),
            token("eth", 1.0, 3000.0),
        ];
        let ids: Vec<String> = compute_totals(&tokens)
            .allocations
            .into_iter()
            .map(|a| a.id)
            .collect();

        assert_eq!(ids, vec!["sol", "btc", "eth"]);
    }

    #[test]
    fn color_index_wraps_around_the_palette() {
        let tokens: Vec<WatchlistToken> = (0..PALETTE_SIZE + 2)
            .map(|i| token(&format!("t{}", i), 1.0, 1.0))
            .collect();
        let totals = compute_totals(&tokens);

        assert_eq!(totals.allocations[0].color_index, 0);
        assert_eq!(totals.allocations[PALETTE_SIZE].color_index, 0);
        assert_eq!(totals.allocations[PALETTE_SIZE + 1].color_index, 1);
    }

    #[test]
    fn symbols_are_uppercased_for_display() {
        let totals = compute_totals(&[token("btc", 1.0, 1.0)]);
        assert_eq!(totals.allocations[0].symbol, "BTC");
    }

    #[test]
    fn removing_the_only_token_empties_the_portfolio() {
        use crate::store::WatchlistStore;

        let mut store = WatchlistStore::new();
        store.add_tokens(vec![crate::entity::CandidateToken {
            id: "btc".to_string(),
            coin_id: 1,
            name: "Bitcoin".to_string(),
            symbol: "btc".to_string(),
            market_cap_rank: Some(1),
            thumb: String::new(),
            small: String::new(),
            large: String::new(),
            price_btc: 1.0,
            snapshot: None,
        }]);
        store.set_holdings("btc", 2.0).unwrap();
        store.remove_token("btc");

        let totals = compute_totals(store.tokens());
        assert_eq!(totals.total_value, 0.0);
        assert!(totals.allocations.is_empty());
    }
}
