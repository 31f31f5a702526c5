/// CoinGecko client configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for the public API
    pub api_base_url: String,

    /// Demo API key, sent as the x_cg_demo_api_key query parameter
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "https://api.coingecko.com/api/v3".to_string(),
            api_key: None,
        }
    }
}

impl Config {
    /// Build configuration from environment variables, falling back to the
    /// public defaults.
    pub fn from_env() -> Self {
        use std::env;

        Self {
            api_base_url: env::var("COINGECKO_API_URL")
                .unwrap_or_else(|_| "https://api.coingecko.com/api/v3".to_string()),
            api_key: env::var("COINGECKO_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
        }
    }
}
