use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::entity::ValidationError;
use crate::interactor::WatchlistInteractor;
use crate::view::watchlist_view::WatchlistView;

#[async_trait]
pub trait WatchlistPresenter: Send + Sync {
    async fn show_watchlist(&self) -> Result<()>;
    async fn show_trending(&self, query: &str) -> Result<()>;
    async fn add_tokens(&self, ids: &[String]) -> Result<()>;
    async fn remove_token(&self, id: &str) -> Result<()>;
    async fn set_holdings(&self, id: &str, input: &str) -> Result<()>;
    async fn refresh_prices(&self) -> Result<()>;
}

pub struct WatchlistPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor,
    V: WatchlistView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> WatchlistPresenter for WatchlistPresenterImpl<I, V>
where
    I: WatchlistInteractor + Send + Sync,
    V: WatchlistView + Send + Sync,
{
    async fn show_watchlist(&self) -> Result<()> {
        let tokens = self.interactor.get_watchlist().await;
        if tokens.is_empty() {
            self.view.display_empty_watchlist().await?;
        } else {
            let last_updated = self.interactor.last_updated().await;
            self.view.display_watchlist(tokens, last_updated).await?;
        }

        Ok(())
    }

    async fn show_trending(&self, query: &str) -> Result<()> {
        match self.interactor.search_trending(query).await {
            Ok(candidates) => {
                self.view.display_candidates(candidates, query).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn add_tokens(&self, ids: &[String]) -> Result<()> {
        match self.interactor.add_tokens(ids).await {
            Ok(added) => {
                self.view.display_tokens_added(added).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn remove_token(&self, id: &str) -> Result<()> {
        match self.interactor.remove_token(id).await {
            Ok(Some(token)) => {
                self.view.display_token_removed(&token).await?;
            }
            Ok(None) => {
                self.view.display_token_not_found(id).await?;
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }

    async fn set_holdings(&self, id: &str, input: &str) -> Result<()> {
        match self.interactor.set_holdings(id, input).await {
            Ok(Some(token)) => {
                self.view.display_holdings_updated(&token).await?;
            }
            Ok(None) => {
                self.view.display_token_not_found(id).await?;
            }
            // Validation failures are recoverable: show the reason and keep
            // the prior state for correction
            Err(e) => match e.downcast_ref::<ValidationError>() {
                Some(validation) => {
                    self.view
                        .display_invalid_holdings(validation.to_string())
                        .await?;
                }
                None => {
                    self.view.display_error(e.to_string()).await?;
                }
            },
        }

        Ok(())
    }

    async fn refresh_prices(&self) -> Result<()> {
        match self.interactor.refresh_prices().await {
            Ok(tokens) => {
                let last_updated = self.interactor.last_updated().await;
                if tokens.is_empty() {
                    self.view.display_empty_watchlist().await?;
                } else {
                    self.view.display_watchlist(tokens, last_updated).await?;
                }
            }
            Err(e) => {
                self.view.display_error(e.to_string()).await?;
            }
        }

        Ok(())
    }
}
