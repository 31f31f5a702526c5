mod app_error;
mod candidate;
mod portfolio;
mod price_update;
mod watchlist;

pub use app_error::{AppError, ValidationError};
pub use candidate::{CandidateSnapshot, CandidateToken};
pub use portfolio::{Allocation, PortfolioTotals};
pub use price_update::PriceUpdate;
pub use watchlist::{WatchlistState, WatchlistToken};
