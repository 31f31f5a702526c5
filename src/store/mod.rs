mod portfolio;
mod watchlist_store;

pub use portfolio::{compute_totals, PALETTE_SIZE};
pub use watchlist_store::{parse_holdings, WatchlistStore};
