//! The two wire protocols behind one capability.
//!
//! The browse protocol serves HTML without credentials; the API protocol
//! serves JSON and carries the key header. Both share the URL-builder and
//! parser contracts, so the orchestrator only picks an implementation.

use reqwest::Url;
use whc_common::image::{Image, ImagePage};

use crate::catalog_config::CatalogConfig;
use crate::network::RawResponse;
use crate::parse::Parser;
use crate::request::SearchRequest;
use crate::url::UrlBuilder;

pub trait CatalogProtocol: Send + Sync {
    /// Builds the listing URL for this protocol.
    fn listing_url(&self, config: &CatalogConfig, request: &SearchRequest) -> Url;

    /// Whether requests on this protocol carry the API key header.
    fn requires_key(&self) -> bool;

    fn parse_listing(&self, parser: &dyn Parser, raw: &RawResponse) -> Vec<Image>;

    fn parse_page(
        &self,
        parser: &dyn Parser,
        raw: &RawResponse,
        source_url: &str,
    ) -> Option<ImagePage>;
}

/// The unauthenticated, HTML-backed protocol.
pub struct BrowseProtocol;

/// The authenticated JSON protocol.
pub struct ApiProtocol;

impl CatalogProtocol for BrowseProtocol {
    fn listing_url(&self, config: &CatalogConfig, request: &SearchRequest) -> Url {
        UrlBuilder::new(config).browse_listing_url(request)
    }

    fn requires_key(&self) -> bool {
        false
    }

    fn parse_listing(&self, parser: &dyn Parser, raw: &RawResponse) -> Vec<Image> {
        parser.parse_listing(&raw.body)
    }

    fn parse_page(
        &self,
        parser: &dyn Parser,
        raw: &RawResponse,
        source_url: &str,
    ) -> Option<ImagePage> {
        parser.parse_page(&raw.body, source_url)
    }
}

impl CatalogProtocol for ApiProtocol {
    fn listing_url(&self, config: &CatalogConfig, request: &SearchRequest) -> Url {
        UrlBuilder::new(config).api_listing_url(request)
    }

    fn requires_key(&self) -> bool {
        true
    }

    fn parse_listing(&self, parser: &dyn Parser, raw: &RawResponse) -> Vec<Image> {
        parser.parse_listing_from_api(&raw.body)
    }

    fn parse_page(
        &self,
        parser: &dyn Parser,
        raw: &RawResponse,
        source_url: &str,
    ) -> Option<ImagePage> {
        parser.parse_page_from_api(&raw.body, source_url)
    }
}
