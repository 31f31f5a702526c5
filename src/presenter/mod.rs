pub mod portfolio_presenter;
pub mod watchlist_presenter;

pub use portfolio_presenter::{PortfolioPresenter, PortfolioPresenterImpl};
pub use watchlist_presenter::{WatchlistPresenter, WatchlistPresenterImpl};
