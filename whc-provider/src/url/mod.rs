//! Pure URL construction for both catalog protocols.
//!
//! Building a URL never fails and performs no I/O; the dispatcher is the
//! only place a request can go wrong.

use reqwest::Url;
use whc_common::filter::{ASPECT_RATIO_KEY, BOARDS_KEY, PURITY_KEY, RESOLUTION_KEY};

use crate::catalog_config::CatalogConfig;
use crate::request::{ListingKind, SearchRequest};
use crate::request::{PATH_SEARCH, PATH_TOPLIST};

/// Path prefix of the API listing endpoint.
pub const API_SEARCH_PATH: &str = "api/v1/search";
/// Path prefix of the API detail endpoint; the wallpaper id follows.
pub const API_WALLPAPER_PATH: &str = "api/v1/w";

/// Marker preceding the wallpaper id in a browse-protocol page URL.
const PAGE_ID_MARKER: &str = "/w/";

#[derive(Debug, Clone, Copy)]
pub struct UrlBuilder<'a> {
    config: &'a CatalogConfig,
}

impl<'a> UrlBuilder<'a> {
    pub const fn new(config: &'a CatalogConfig) -> Self {
        Self { config }
    }

    /// Listing URL for the unauthenticated browse protocol.
    ///
    /// Toplist is its own path segment and carries no `sorting` parameter;
    /// every other kind goes through the `search` path with `sorting` and
    /// `order=desc` appended.
    pub fn browse_listing_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.config.base_url.clone();
        let page = request.page.to_string();
        let criteria = &request.criteria;

        if request.kind == ListingKind::Toplist {
            url.set_path(PATH_TOPLIST);
            url.query_pairs_mut()
                .append_pair(BOARDS_KEY, &criteria.boards)
                .append_pair(PURITY_KEY, &criteria.purity)
                .append_pair(RESOLUTION_KEY, &criteria.resolution)
                .append_pair(ASPECT_RATIO_KEY, &criteria.aspect_ratio)
                .append_pair("page", &page);
        } else {
            url.set_path(PATH_SEARCH);
            url.query_pairs_mut()
                .append_pair(BOARDS_KEY, &criteria.boards)
                .append_pair(RESOLUTION_KEY, &criteria.resolution)
                .append_pair(PURITY_KEY, &criteria.purity)
                .append_pair(ASPECT_RATIO_KEY, &criteria.aspect_ratio)
                .append_pair("sorting", request.kind.browse_sorting())
                .append_pair("order", "desc")
                .append_pair("page", &page);
        }

        if let Some(color) = &request.color {
            url.query_pairs_mut().append_pair("color", color);
        }
        if let Some(query) = &request.query {
            url.query_pairs_mut().append_pair("q", query);
        }
        url
    }

    /// Listing URL for the authenticated API protocol. Always the
    /// `api/v1/search` path; toplist becomes a sorting mode here.
    pub fn api_listing_url(&self, request: &SearchRequest) -> Url {
        let mut url = self.config.base_url.clone();
        let criteria = &request.criteria;
        url.set_path(API_SEARCH_PATH);
        url.query_pairs_mut()
            .append_pair(BOARDS_KEY, &criteria.boards)
            .append_pair(PURITY_KEY, &criteria.purity)
            .append_pair(RESOLUTION_KEY, &criteria.resolution)
            .append_pair(ASPECT_RATIO_KEY, &criteria.aspect_ratio)
            .append_pair("sorting", request.kind.api_sorting())
            .append_pair("order", "desc")
            .append_pair("page", &request.page.to_string());

        if let Some(query) = &request.query {
            url.query_pairs_mut().append_pair("q", query);
        }
        if let Some(color) = &request.color {
            url.query_pairs_mut().append_pair("color", color);
        }
        url
    }

    /// API detail URL for a wallpaper id.
    pub fn api_wallpaper_url(&self, id: &str) -> Url {
        let mut url = self.config.base_url.clone();
        url.set_path(&format!("{API_WALLPAPER_PATH}/{id}"));
        url
    }
}

/// Pulls the wallpaper id out of a browse-protocol page URL.
///
/// `https://wallhaven.cc/w/94x38z?ref=1` yields `94x38z`; trailing query
/// strings and fragments are stripped. Returns `None` when the `/w/` marker
/// is missing or nothing follows it, so callers can fall back to fetching
/// the page itself instead of erroring.
pub fn extract_wallpaper_id(page_url: &str) -> Option<String> {
    let (_, rest) = page_url.split_once(PAGE_ID_MARKER)?;
    let id = rest.split(['?', '#']).next()?;
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
