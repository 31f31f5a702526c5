/// Rejected user input for a holdings edit. Always recovered locally: the
/// store leaves prior state untouched and the caller can correct the input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Holdings cannot be negative: {0}")]
    Negative(f64),

    #[error("Holdings must be a finite number")]
    NotFinite,

    #[error("Could not parse \"{0}\" as an amount")]
    Unparsable(String),
}

/// Errors from the CoinGecko collaborators. Fetch failures never mutate the
/// watchlist; the caller reports them and moves on.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("CoinGecko API error: {0}")]
    CoinGeckoApi(String),

    #[error("Malformed CoinGecko response: {0}")]
    MalformedResponse(String),
}
