pub mod portfolio_view;
pub mod watchlist_view;

pub use portfolio_view::{ConsolePortfolioView, PortfolioView, COLOR_PALETTE};
pub use watchlist_view::{ConsoleWatchlistView, WatchlistView};
