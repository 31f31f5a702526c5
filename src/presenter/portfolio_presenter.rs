use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::interactor::WatchlistInteractor;
use crate::view::portfolio_view::PortfolioView;

#[async_trait]
pub trait PortfolioPresenter: Send + Sync {
    async fn show_portfolio(&self) -> Result<()>;
}

pub struct PortfolioPresenterImpl<I, V> {
    interactor: Arc<I>,
    view: Arc<V>,
}

impl<I, V> PortfolioPresenterImpl<I, V>
where
    I: WatchlistInteractor,
    V: PortfolioView,
{
    pub fn new(interactor: Arc<I>, view: Arc<V>) -> Self {
        Self { interactor, view }
    }
}

#[async_trait]
impl<I, V> PortfolioPresenter for PortfolioPresenterImpl<I, V>
where
    I: WatchlistInteractor + Send + Sync,
    V: PortfolioView + Send + Sync,
{
    async fn show_portfolio(&self) -> Result<()> {
        let totals = self.interactor.portfolio().await;

        if totals.has_data() {
            let last_updated = self.interactor.last_updated().await;
            self.view.display_portfolio(totals, last_updated).await?;
        } else {
            self.view.display_empty_portfolio().await?;
        }

        Ok(())
    }
}
