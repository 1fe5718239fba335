//! The catalog client: composes gate, protocol, dispatcher and parser.
//!
//! Every operation is a single async fn; the `_blocking` variants drive the
//! same future on the library runtime, so the two surfaces cannot drift.
//! No state crosses calls except what lives in the injected preference
//! store.

use log::debug;
use whc_common::filter::{FilterCriteria, Purity, PURITY_KEY};
use whc_common::image::{Image, ImagePage};

use crate::auth::CredentialGate;
use crate::catalog_config::CatalogConfig;
use crate::error::ProviderError;
use crate::network::{self, RequestDispatcher};
use crate::parse::Parser;
use crate::prefs::PreferenceStore;
use crate::protocol::{ApiProtocol, BrowseProtocol, CatalogProtocol};
use crate::request::{ListingKind, SearchRequest};
use crate::url::{extract_wallpaper_id, UrlBuilder};

/// Tag under which [`CatalogClient::get_page`] and the advisory helpers read
/// the active purity filter from the preference store.
pub const DEFAULT_FILTER_TAG: &str = PURITY_KEY;

/// Orchestrator for listing and detail fetches.
///
/// The preference store and the parser are injected; the client holds no
/// other state, so concurrent calls are independent.
pub struct CatalogClient<P> {
    prefs: P,
    parser: Box<dyn Parser>,
    dispatcher: RequestDispatcher,
    config: CatalogConfig,
}

impl<P: PreferenceStore> CatalogClient<P> {
    pub fn new(prefs: P, parser: impl Parser + 'static) -> Self {
        Self::with_config(prefs, parser, CatalogConfig::default())
    }

    pub fn with_config(prefs: P, parser: impl Parser + 'static, config: CatalogConfig) -> Self {
        let dispatcher = RequestDispatcher::new(&config);
        Self {
            prefs,
            parser: Box::new(parser),
            dispatcher,
            config,
        }
    }

    fn protocol_for(restricted: bool) -> &'static dyn CatalogProtocol {
        if restricted {
            &ApiProtocol
        } else {
            &BrowseProtocol
        }
    }

    /// Shared listing path: gate, protocol pick, dispatch, parse.
    async fn fetch_listing(&self, request: SearchRequest) -> Result<Vec<Image>, ProviderError> {
        let restricted = CredentialGate::wants_restricted_content(&request.criteria);
        let api_key = self.prefs.api_key();

        if restricted && !CredentialGate::decide(&request.criteria, api_key.as_deref()).is_allowed()
        {
            return Err(ProviderError::ApiKeyRequired);
        }

        let protocol = Self::protocol_for(restricted);
        let url = protocol.listing_url(&self.config, &request);
        debug!(
            "Fetching {:?} listing, page {}, via the {} protocol",
            request.kind,
            request.page,
            if restricted { "API" } else { "browse" }
        );

        let key = if protocol.requires_key() { api_key } else { None };
        let raw = self.dispatcher.fetch(url.as_str(), key.as_deref()).await?;
        Ok(protocol.parse_listing(self.parser.as_ref(), &raw))
    }

    /// Fetches one listing page by explicit page index.
    ///
    /// An empty parsed page is reported as [`ProviderError::NoResults`]
    /// rather than an empty success; callers paging through a listing treat
    /// it as the end marker.
    pub async fn get_listing(
        &self,
        kind: ListingKind,
        page: u32,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Image>, ProviderError> {
        let images = self
            .fetch_listing(SearchRequest {
                kind,
                page,
                query: None,
                color: None,
                criteria: criteria.clone(),
            })
            .await?;
        if images.is_empty() {
            return Err(ProviderError::NoResults);
        }
        Ok(images)
    }

    /// Free-text search. Unlike [`Self::get_listing`], zero matches is an
    /// empty success.
    pub async fn search_listing(
        &self,
        kind: ListingKind,
        page: u32,
        query: Option<&str>,
        color: Option<&str>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Image>, ProviderError> {
        self.fetch_listing(SearchRequest {
            kind,
            page,
            query: query.map(str::to_string),
            color: color.map(str::to_string),
            criteria: criteria.clone(),
        })
        .await
    }

    /// Resolves a wallpaper's detail record from its page URL.
    ///
    /// With NSFW enabled and a valid-format key stored, the API detail
    /// endpoint is preferred; when the id cannot be extracted from the URL,
    /// or the API exchange fails, the page itself is fetched and parsed as
    /// HTML instead. The degraded path never errors just because the id was
    /// not extractable.
    pub async fn get_page(&self, page_url: &str) -> Result<ImagePage, ProviderError> {
        let purity = self.prefs.purity(DEFAULT_FILTER_TAG);
        let restricted = Purity::from_param(&purity).includes_nsfw();
        let api_key = self.prefs.api_key();

        if restricted && CredentialGate::has_valid_key(api_key.as_deref()) {
            if let Some(id) = extract_wallpaper_id(page_url) {
                let url = UrlBuilder::new(&self.config).api_wallpaper_url(&id);
                match self.dispatcher.fetch(url.as_str(), api_key.as_deref()).await {
                    Ok(raw) => {
                        if let Some(page) =
                            ApiProtocol.parse_page(self.parser.as_ref(), &raw, page_url)
                        {
                            return Ok(page);
                        }
                        debug!("API detail payload unusable, falling back to the page fetch");
                    }
                    Err(err) => {
                        debug!("API detail fetch failed ({err}), falling back to the page fetch");
                    }
                }
            }
        }

        let raw = self.dispatcher.fetch(page_url, None).await?;
        let source_url = raw.url.clone();
        BrowseProtocol
            .parse_page(self.parser.as_ref(), &raw, &source_url)
            .ok_or(ProviderError::NoResults)
    }

    // Blocking forms. Same futures, driven on the library runtime; must not
    // be called from inside an async context.

    pub fn get_listing_blocking(
        &self,
        kind: ListingKind,
        page: u32,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Image>, ProviderError> {
        network::block_on(self.get_listing(kind, page, criteria))
    }

    pub fn search_listing_blocking(
        &self,
        kind: ListingKind,
        page: u32,
        query: Option<&str>,
        color: Option<&str>,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Image>, ProviderError> {
        network::block_on(self.search_listing(kind, page, query, color, criteria))
    }

    pub fn get_page_blocking(&self, page_url: &str) -> Result<ImagePage, ProviderError> {
        network::block_on(self.get_page(page_url))
    }

    // Preference pass-throughs.

    /// Snapshot of the four filter axes stored under `tag`.
    pub fn filter_criteria(&self, tag: &str) -> FilterCriteria {
        FilterCriteria {
            boards: self.prefs.boards(tag),
            purity: self.prefs.purity(tag),
            resolution: self.prefs.resolution(tag),
            aspect_ratio: self.prefs.aspect_ratio(tag),
        }
    }

    pub fn purity(&self, tag: &str) -> String {
        self.prefs.purity(tag)
    }

    pub fn set_purity(&self, tag: &str, value: &str) {
        self.prefs.set_purity(tag, value);
    }

    pub fn boards(&self, tag: &str) -> String {
        self.prefs.boards(tag)
    }

    pub fn set_boards(&self, tag: &str, value: &str) {
        self.prefs.set_boards(tag, value);
    }

    pub fn resolution(&self, tag: &str) -> String {
        self.prefs.resolution(tag)
    }

    pub fn set_resolution(&self, tag: &str, value: &str) {
        self.prefs.set_resolution(tag, value);
    }

    pub fn aspect_ratio(&self, tag: &str) -> String {
        self.prefs.aspect_ratio(tag)
    }

    pub fn set_aspect_ratio(&self, tag: &str, value: &str) {
        self.prefs.set_aspect_ratio(tag, value);
    }

    pub fn timespan(&self, tag: &str) -> String {
        self.prefs.timespan(tag)
    }

    pub fn set_timespan(&self, tag: &str, value: &str) {
        self.prefs.set_timespan(tag, value);
    }

    pub fn api_key(&self) -> Option<String> {
        self.prefs.api_key()
    }

    pub fn set_api_key(&self, key: &str) {
        self.prefs.set_api_key(key);
    }

    // Advisory key helpers; none of these block dispatch by themselves.

    /// Whether the active purity filter requires an API key at all.
    pub fn is_api_key_required(&self) -> bool {
        Purity::from_param(&self.prefs.purity(DEFAULT_FILTER_TAG)).includes_nsfw()
    }

    /// Presence and format of the stored key combined.
    pub fn has_valid_api_key(&self) -> bool {
        CredentialGate::has_valid_key(self.prefs.api_key().as_deref())
    }

    /// User-facing advisory for key problems with the active filters.
    pub fn api_key_error_message(&self) -> Option<&'static str> {
        let criteria = self.filter_criteria(DEFAULT_FILTER_TAG);
        CredentialGate::key_error_message(&criteria, self.prefs.api_key().as_deref())
    }
}
