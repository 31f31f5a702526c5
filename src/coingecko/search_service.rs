use anyhow::{anyhow, Result};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;

use crate::coingecko::models::TrendingResponse;
use crate::coingecko::Config;
use crate::entity::{AppError, CandidateToken};

/// Token-search collaborator: supplies candidate tokens for the watchlist.
#[async_trait]
pub trait SearchService: Send + Sync {
    /// Fetch the currently trending tokens as watchlist candidates.
    async fn fetch_trending(&self) -> Result<Vec<CandidateToken>>;
}

/// Search implementation backed by the CoinGecko trending endpoint.
pub struct CoinGeckoSearchService {
    http_client: Client,
    config: Config,
}

impl CoinGeckoSearchService {
    pub fn new(config: Config) -> Self {
        Self {
            http_client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl SearchService for CoinGeckoSearchService {
    async fn fetch_trending(&self) -> Result<Vec<CandidateToken>> {
        let mut url = format!("{}/search/trending", self.config.api_base_url);
        if let Some(key) = &self.config.api_key {
            url.push_str(&format!("?x_cg_demo_api_key={}", key));
        }

        debug!("Fetching trending tokens");
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

        let trending: TrendingResponse = response
            .json()
            .await
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        info!("Fetched {} trending tokens", trending.coins.len());

        Ok(trending
            .coins
            .into_iter()
            .map(|coin| coin.item.into_candidate())
            .collect())
    }
}
