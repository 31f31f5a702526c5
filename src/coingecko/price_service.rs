use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::coingecko::models::SimplePriceResponse;
use crate::coingecko::Config;
use crate::entity::{AppError, PriceUpdate};

/// Price-refresh collaborator: supplies current USD prices and 24h changes
/// for a set of coin ids.
#[async_trait]
pub trait PriceService: Send + Sync {
    /// Fetch price updates for the given coin ids. Ids the API does not
    /// know produce no update at all, so stored prices stay untouched.
    async fn fetch_prices(&self, ids: &[String]) -> Result<Vec<PriceUpdate>>;
}

/// Price implementation backed by the CoinGecko simple-price endpoint.
pub struct CoinGeckoPriceService {
    http_client: Client,
    config: Config,
}

impl CoinGeckoPriceService {
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PriceService for CoinGeckoPriceService {
    async fn fetch_prices(&self, ids: &[String]) -> Result<Vec<PriceUpdate>> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let mut url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true",
            self.config.api_base_url,
            ids.join(",")
        );
        if let Some(key) = &self.config.api_key {
            url.push_str(&format!("&x_cg_demo_api_key={}", key));
        }

        debug!("Fetching prices for {} tokens", ids.len());
        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("HTTP request failed: {}", e))?;

        if !response.status().is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::CoinGeckoApi(error_text).into());
        }

        let prices: SimplePriceResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        // Entries without a USD quote are dropped rather than zeroed so the
        // watchlist keeps its last known price for them. The simple-price
        // endpoint carries no sparkline, so updates never overwrite one.
        let updates: Vec<PriceUpdate> = ids
            .iter()
            .filter_map(|id| {
                let entry = prices.get(id)?;
                let price = entry.usd?;
                Some(PriceUpdate {
                    id: id.clone(),
                    price,
                    change_24h: entry.usd_24h_change.unwrap_or(0.0),
                    sparkline: None,
                })
            })
            .collect();

        info!("Fetched prices for {} of {} tokens", updates.len(), ids.len());

        Ok(updates)
    }
}
