//! Crypto watchlist - Main executable
//!
//! Interactive console application: search trending tokens on CoinGecko,
//! maintain a watchlist with manually entered holdings, refresh prices on
//! demand and view the aggregate portfolio value and allocation breakdown.
use std::io::Write;
use std::sync::Arc;

use crypto_watchlist::{
    CommandRouter, ConsolePortfolioView, ConsoleWatchlistView, PortfolioPresenterImpl,
    RouterOutcome, ServiceContainer, WatchlistPresenterImpl,
};
use dotenv::dotenv;
use log::{error, info};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting crypto watchlist v{}", crypto_watchlist::VERSION);

    // Wire up services; this rehydrates any previously persisted watchlist
    let services = ServiceContainer::new();

    let watchlist_view = Arc::new(ConsoleWatchlistView);
    let portfolio_view = Arc::new(ConsolePortfolioView);

    let watchlist_presenter = Arc::new(WatchlistPresenterImpl::new(
        services.interactor(),
        watchlist_view,
    ));
    let portfolio_presenter = Arc::new(PortfolioPresenterImpl::new(
        services.interactor(),
        portfolio_view,
    ));

    let router = CommandRouter::new(watchlist_presenter, portfolio_presenter);

    println!(
        "Crypto watchlist v{} - type `help` for commands.",
        crypto_watchlist::VERSION
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match router.dispatch(&line).await {
            Ok(RouterOutcome::Quit) => break,
            Ok(RouterOutcome::Handled) => {}
            Err(e) => error!("Command failed: {:#}", e),
        }
    }

    info!("Shutting down");
    Ok(())
}
