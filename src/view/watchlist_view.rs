use anyhow::Result;
use async_trait::async_trait;

use crate::entity::{CandidateToken, WatchlistToken};

#[async_trait]
pub trait WatchlistView: Send + Sync {
    async fn display_watchlist(
        &self,
        tokens: Vec<WatchlistToken>,
        last_updated: Option<String>,
    ) -> Result<()>;
    async fn display_empty_watchlist(&self) -> Result<()>;
    async fn display_candidates(&self, candidates: Vec<CandidateToken>, query: &str) -> Result<()>;
    async fn display_tokens_added(&self, tokens: Vec<WatchlistToken>) -> Result<()>;
    async fn display_token_removed(&self, token: &WatchlistToken) -> Result<()>;
    async fn display_token_not_found(&self, id: &str) -> Result<()>;
    async fn display_holdings_updated(&self, token: &WatchlistToken) -> Result<()>;
    async fn display_invalid_holdings(&self, message: String) -> Result<()>;
    async fn display_error(&self, message: String) -> Result<()>;
}

pub struct ConsoleWatchlistView;

#[async_trait]
impl WatchlistView for ConsoleWatchlistView {
    async fn display_watchlist(
        &self,
        tokens: Vec<WatchlistToken>,
        last_updated: Option<String>,
    ) -> Result<()> {
        println!();
        println!(
            "{:<14} {:<22} {:>16} {:>9} {:>12} {:>12} {:>14}",
            "ID", "Token", "Price", "24h %", "Sparkline", "Holdings", "Value"
        );
        for token in &tokens {
            println!(
                "{:<14} {:<22} {:>16} {:>9} {:>12} {:>12} {:>14}",
                token.id,
                format!("{} ({})", token.name, token.symbol.to_uppercase()),
                token.format_price(),
                token.format_change(),
                if token.sparkline.is_some() { "7d" } else { "-" },
                token.format_holdings(),
                token.format_value(),
            );
        }
        println!(
            "\n{} tokens | Last updated: {}",
            tokens.len(),
            last_updated.as_deref().unwrap_or("N/A")
        );

        Ok(())
    }

    async fn display_empty_watchlist(&self) -> Result<()> {
        println!("Your watchlist is empty. Add tokens to track their prices!");
        Ok(())
    }

    async fn display_candidates(&self, candidates: Vec<CandidateToken>, query: &str) -> Result<()> {
        if candidates.is_empty() {
            if query.trim().is_empty() {
                println!("All trending tokens are already in your watchlist.");
            } else {
                println!("No trending tokens match \"{}\".", query.trim());
            }
            return Ok(());
        }

        println!("\nTrending tokens (use `add <id>` to watch one):");
        for candidate in &candidates {
            let price = candidate
                .snapshot
                .as_ref()
                .map(|s| format!("${:.6}", s.price))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<14} {} ({}) {}",
                candidate.id,
                candidate.name,
                candidate.symbol.to_uppercase(),
                price
            );
        }

        Ok(())
    }

    async fn display_tokens_added(&self, tokens: Vec<WatchlistToken>) -> Result<()> {
        if tokens.is_empty() {
            println!("Nothing added; those tokens are already watched or not trending right now.");
            return Ok(());
        }

        for token in &tokens {
            println!(
                "Added {} ({}) to your watchlist at {}",
                token.name,
                token.symbol.to_uppercase(),
                token.format_price()
            );
        }

        Ok(())
    }

    async fn display_token_removed(&self, token: &WatchlistToken) -> Result<()> {
        println!(
            "Removed {} ({}) from your watchlist",
            token.name,
            token.symbol.to_uppercase()
        );
        Ok(())
    }

    async fn display_token_not_found(&self, id: &str) -> Result<()> {
        println!("Token \"{}\" is not in your watchlist.", id);
        Ok(())
    }

    async fn display_holdings_updated(&self, token: &WatchlistToken) -> Result<()> {
        println!(
            "{} holdings set to {} (value {})",
            token.name,
            token.format_holdings(),
            token.format_value()
        );
        Ok(())
    }

    async fn display_invalid_holdings(&self, message: String) -> Result<()> {
        println!("Invalid holdings: {}", message);
        Ok(())
    }

    async fn display_error(&self, message: String) -> Result<()> {
        println!("Error: {}", message);
        Ok(())
    }
}
