use clap::Parser;
use common::config::{ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_ITEMS_PER_PAGE, DEFAULT_SPLASH_MS};

/// Command-line arguments for the business cards host.
#[derive(Parser, Debug, Clone)]
#[command(name = "business-cards-server")]
#[command(about = "Serves the business cards SPA and its runtime configuration")]
#[command(version)]
pub struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1", env = "CARDS_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080, env = "CARDS_PORT")]
    pub port: u16,

    /// Base URL of the remote business cards API
    #[arg(long, default_value = DEFAULT_API_BASE_URL, env = "CARDS_API_BASE_URL")]
    pub api_base_url: String,

    /// Cards shown per page in the listing
    #[arg(long, default_value_t = DEFAULT_ITEMS_PER_PAGE, env = "CARDS_ITEMS_PER_PAGE")]
    pub items_per_page: usize,

    /// Splash duration in milliseconds
    #[arg(long, default_value_t = DEFAULT_SPLASH_MS, env = "CARDS_SPLASH_MS")]
    pub splash_ms: u32,

    /// Open the default browser once the server is listening
    #[arg(long)]
    pub open_browser: bool,
}

impl Args {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            items_per_page: self.items_per_page.max(1),
            splash_ms: self.splash_ms,
        }
    }
}
