//! Transient request descriptors, one per call.

use whc_common::filter::FilterCriteria;

pub const PATH_TOPLIST: &str = "toplist";
pub const PATH_RANDOM: &str = "random";
pub const PATH_SEARCH: &str = "search";
pub const PATH_LATEST: &str = "latest";

/// The listing families the catalog can serve.
///
/// The kind decides the browse-protocol path segment and the sort order both
/// protocols send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingKind {
    Toplist,
    Random,
    Search,
    Latest,
    /// Fallback kind sorting by view count. [`ListingKind::from_path`] maps
    /// any unrecognized path segment here.
    MostViews,
}

impl ListingKind {
    /// Maps a browse path segment to a kind, case-insensitively.
    pub fn from_path(path: &str) -> Self {
        if path.eq_ignore_ascii_case(PATH_TOPLIST) {
            Self::Toplist
        } else if path.eq_ignore_ascii_case(PATH_RANDOM) {
            Self::Random
        } else if path.eq_ignore_ascii_case(PATH_SEARCH) {
            Self::Search
        } else if path.eq_ignore_ascii_case(PATH_LATEST) {
            Self::Latest
        } else {
            Self::MostViews
        }
    }

    /// Sort order sent on the browse protocol's `search` path. Toplist never
    /// reaches this: it has its own path segment and sends no sorting at all.
    pub const fn browse_sorting(self) -> &'static str {
        match self {
            Self::Search => "relevance",
            Self::Random => "random",
            Self::Latest => "date_added",
            Self::Toplist | Self::MostViews => "views",
        }
    }

    /// Sort order sent on the API protocol, where toplist is a sorting mode
    /// rather than a path segment.
    pub const fn api_sorting(self) -> &'static str {
        match self {
            Self::Toplist => "toplist",
            other => other.browse_sorting(),
        }
    }
}

/// Everything needed to build one listing request.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub kind: ListingKind,
    /// 1-based page index.
    pub page: u32,
    /// Free-text query, appended as `q` when present.
    pub query: Option<String>,
    /// Color filter, appended as `color` when present.
    pub color: Option<String>,
    pub criteria: FilterCriteria,
}

/// A detail-page request, identified by the page URL the listing linked to.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page_url: String,
}
