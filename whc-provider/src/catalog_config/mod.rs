//! Catalog server configuration.
//!
//! Every component that touches the wire takes a [`CatalogConfig`], so tests
//! and alternative deployments can point the whole stack at another host.

use std::fmt::Display;

use once_cell::sync::Lazy;
use reqwest::Url;

pub(crate) const DEFAULT_CLIENT_UA: &str =
    concat!("Wallhaven Catalog Client/", env!("CARGO_PKG_VERSION"));

/// Production catalog host.
pub const WALLHAVEN_BASE_URL: &str = "https://wallhaven.cc";

/// Thumbnails the catalog returns per listing page.
pub const THUMBS_PER_PAGE: usize = 24;

static DEFAULT_BASE: Lazy<Url> =
    Lazy::new(|| Url::parse(WALLHAVEN_BASE_URL).expect("default base url is valid"));

#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub name: String,
    pub pretty_name: String,
    /// Base URL both protocols are rooted at.
    pub base_url: Url,
    pub client_user_agent: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name: String::from("wallhaven"),
            pretty_name: String::from("Wallhaven"),
            base_url: DEFAULT_BASE.clone(),
            client_user_agent: DEFAULT_CLIENT_UA.to_string(),
        }
    }
}

impl CatalogConfig {
    /// Default configuration rooted at a different host. Used by tests and
    /// self-hosted catalog mirrors.
    pub fn with_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }
}

impl Display for CatalogConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
