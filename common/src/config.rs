//! Runtime configuration handed to the SPA.
//!
//! The server publishes this as `/app-config.json`; the frontend falls back to
//! [`ClientConfig::default`] whenever the document is missing or unreadable,
//! and fills individual missing keys the same way.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "http://businesscards.runasp.net/api";
pub const DEFAULT_ITEMS_PER_PAGE: usize = 3;
pub const DEFAULT_SPLASH_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientConfig {
    /// Base URL of the remote API, without the `/BusinessCards` segment.
    pub api_base_url: String,
    pub items_per_page: usize,
    /// How long the listing splash stays up on the first visit of a session.
    pub splash_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            splash_ms: DEFAULT_SPLASH_MS,
        }
    }
}
