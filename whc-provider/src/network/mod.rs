//! Request dispatch against the catalog.
//!
//! One async core per operation; the `_blocking` variants drive the same
//! future on a lazily-built library runtime, so both surfaces share one code
//! path. A dispatched request runs to completion or transport timeout; there
//! is no retry and no cancellation.

use std::future::Future;

use log::debug;
use once_cell::sync::Lazy;
use reqwest::{Client, Url};
use tokio::runtime::{Builder, Runtime};
use whc_common::client;

use crate::catalog_config::CatalogConfig;
use crate::error::ProviderError;

/// Header carrying the catalog API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Runtime backing the `_blocking` wrappers. Built on first use, shared by
/// every dispatcher in the process.
static BLOCKING_RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("dispatcher runtime")
});

/// Drives a provider future to completion on the library runtime.
///
/// Must not be called from inside an async context; the blocking surface is
/// meant for plain background threads.
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    BLOCKING_RUNTIME.block_on(future)
}

/// Raw catalog response: the full body plus the URL that produced it.
///
/// Lives for a single request; the orchestrator hands it to the parser and
/// drops it.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub body: String,
    /// Final URL after any redirects the transport followed.
    pub url: String,
}

#[derive(Debug, Clone)]
pub struct RequestDispatcher {
    client: Client,
}

impl RequestDispatcher {
    pub fn new(config: &CatalogConfig) -> Self {
        // Connect and read timeouts are fixed at 10 seconds by the client! macro.
        Self {
            client: client!(&config.client_user_agent),
        }
    }

    /// Issues a single GET and returns the full body.
    ///
    /// The `X-API-Key` header is attached only when a non-empty key is
    /// supplied. An unparsable URL and any transport failure both map to a
    /// Network-kind [`ProviderError`] with code 400.
    pub async fn fetch(
        &self,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<RawResponse, ProviderError> {
        let parsed =
            Url::parse(url).map_err(|_| ProviderError::MalformedUrl(url.to_string()))?;

        debug!("GET {parsed}");
        let mut request = self.client.get(parsed);
        if let Some(key) = api_key {
            if !key.is_empty() {
                request = request.header(API_KEY_HEADER, key);
            }
        }

        let response = request.send().await?;
        let url = response.url().to_string();
        let body = response.text().await?;
        debug!("Received {} bytes from {url}", body.len());

        Ok(RawResponse { body, url })
    }

    /// Blocking form of [`Self::fetch`], identical semantics.
    pub fn fetch_blocking(
        &self,
        url: &str,
        api_key: Option<&str>,
    ) -> Result<RawResponse, ProviderError> {
        block_on(self.fetch(url, api_key))
    }
}
