use std::sync::Arc;

use anyhow::Result;

use crate::presenter::{PortfolioPresenter, WatchlistPresenter};

/// A parsed console command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Trending,
    Search(String),
    Add(Vec<String>),
    Holdings { id: String, amount: String },
    Remove(String),
    Refresh,
    Portfolio,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Command::Empty;
        };
        let rest: Vec<String> = parts.map(str::to_string).collect();

        match keyword.to_lowercase().as_str() {
            "list" | "watchlist" => Command::List,
            "trending" => Command::Trending,
            "search" => Command::Search(rest.join(" ")),
            "add" if !rest.is_empty() => Command::Add(rest),
            "holdings" if rest.len() == 2 => Command::Holdings {
                id: rest[0].clone(),
                amount: rest[1].clone(),
            },
            "rm" | "remove" if rest.len() == 1 => Command::Remove(rest[0].clone()),
            "refresh" => Command::Refresh,
            "portfolio" => Command::Portfolio,
            "help" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum RouterOutcome {
    Handled,
    Quit,
}

/// Dispatches parsed commands to the presenters.
pub struct CommandRouter {
    watchlist_presenter: Arc<dyn WatchlistPresenter>,
    portfolio_presenter: Arc<dyn PortfolioPresenter>,
}

impl CommandRouter {
    pub fn new(
        watchlist_presenter: Arc<dyn WatchlistPresenter>,
        portfolio_presenter: Arc<dyn PortfolioPresenter>,
    ) -> Self {
        Self {
            watchlist_presenter,
            portfolio_presenter,
        }
    }

    pub async fn dispatch(&self, line: &str) -> Result<RouterOutcome> {
        match Command::parse(line) {
            Command::List => self.watchlist_presenter.show_watchlist().await?,
            Command::Trending => self.watchlist_presenter.show_trending("").await?,
            Command::Search(query) => self.watchlist_presenter.show_trending(&query).await?,
            Command::Add(ids) => self.watchlist_presenter.add_tokens(&ids).await?,
            Command::Holdings { id, amount } => {
                self.watchlist_presenter.set_holdings(&id, &amount).await?
            }
            Command::Remove(id) => self.watchlist_presenter.remove_token(&id).await?,
            Command::Refresh => self.watchlist_presenter.refresh_prices().await?,
            Command::Portfolio => self.portfolio_presenter.show_portfolio().await?,
            Command::Help => print_help(),
            Command::Quit => return Ok(RouterOutcome::Quit),
            Command::Empty => {}
            Command::Unknown(input) => {
                println!("Unknown command: {}. Type `help` for a list.", input);
            }
        }

        Ok(RouterOutcome::Handled)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  list                     show the watchlist");
    println!("  trending                 show trending tokens not yet watched");
    println!("  search <query>           filter trending tokens by name or symbol");
    println!("  add <id> [<id> ...]      add trending tokens to the watchlist");
    println!("  holdings <id> <amount>   set how much of a token you own");
    println!("  rm <id>                  remove a token from the watchlist");
    println!("  refresh                  refresh prices for all watched tokens");
    println!("  portfolio                show total value and allocation breakdown");
    println!("  quit                     exit");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_simple_commands() {
        assert_eq!(Command::parse("list"), Command::List);
        assert_eq!(Command::parse("watchlist"), Command::List);
        assert_eq!(Command::parse("trending"), Command::Trending);
        assert_eq!(Command::parse("refresh"), Command::Refresh);
        assert_eq!(Command::parse("portfolio"), Command::Portfolio);
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("quit"), Command::Quit);
        assert_eq!(Command::parse("exit"), Command::Quit);
    }

    #[test]
    fn parses_commands_with_arguments() {
        assert_eq!(
            Command::parse("search pepe coin"),
            Command::Search("pepe coin".to_string())
        );
        assert_eq!(
            Command::parse("add bitcoin ethereum"),
            Command::Add(vec!["bitcoin".to_string(), "ethereum".to_string()])
        );
        assert_eq!(
            Command::parse("holdings bitcoin 2.5"),
            Command::Holdings {
                id: "bitcoin".to_string(),
                amount: "2.5".to_string()
            }
        );
        assert_eq!(
            Command::parse("rm bitcoin"),
            Command::Remove("bitcoin".to_string())
        );
    }

    #[test]
    fn is_case_insensitive_on_the_keyword() {
        assert_eq!(Command::parse("LIST"), Command::List);
        assert_eq!(Command::parse("Refresh"), Command::Refresh);
    }

    #[test]
    fn malformed_input_is_unknown() {
        assert_eq!(Command::parse(""), Command::Empty);
        assert_eq!(Command::parse("   "), Command::Empty);
        assert_eq!(Command::parse("add"), Command::Unknown("add".to_string()));
        assert_eq!(
            Command::parse("holdings bitcoin"),
            Command::Unknown("holdings bitcoin".to_string())
        );
        assert_eq!(
            Command::parse("frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }
}
