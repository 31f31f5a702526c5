pub mod watchlist_interactor;

pub use watchlist_interactor::{WatchlistInteractor, WatchlistInteractorImpl};
