use anyhow::Result;
use async_trait::async_trait;

use crate::entity::PortfolioTotals;
use crate::store::PALETTE_SIZE;

/// Fixed allocation palette; `Allocation::color_index` wraps around it.
pub const COLOR_PALETTE: [&str; PALETTE_SIZE] = [
    "#10B981", "#A78BFA", "#60A5FA", "#18C9DD", "#FB923C", "#FB7185", "#FF6384", "#36A2EB",
    "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#4CAF50", "#2196F3", "#FFC107",
];

#[async_trait]
pub trait PortfolioView: Send + Sync {
    async fn display_portfolio(
        &self,
        totals: PortfolioTotals,
        last_updated: Option<String>,
    ) -> Result<()>;
    async fn display_empty_portfolio(&self) -> Result<()>;
}

pub struct ConsolePortfolioView;

#[async_trait]
impl PortfolioView for ConsolePortfolioView {
    async fn display_portfolio(
        &self,
        totals: PortfolioTotals,
        last_updated: Option<String>,
    ) -> Result<()> {
        println!("\nPortfolio Total: {}", totals.format_total());
        println!("Last updated: {}", last_updated.as_deref().unwrap_or("N/A"));
        println!();

        for allocation in &totals.allocations {
            println!(
                "  {:<28} {:>6.1}%  {}",
                format!("{} ({})", allocation.name, allocation.symbol),
                allocation.percent,
                COLOR_PALETTE[allocation.color_index]
            );
        }

        Ok(())
    }

    async fn display_empty_portfolio(&self) -> Result<()> {
        println!("No portfolio data available.");
        println!("Add tokens to your watchlist and set holdings to see your portfolio breakdown.");
        Ok(())
    }
}
