//! Typed records produced from raw catalog payloads.
//!
//! # Image
//! An [`Image`] is one thumbnail entry of a listing page. A listing is an
//! ordered, possibly empty sequence of these; the order is whatever the
//! catalog returned.
//!
//! An [`ImagePage`] is the extended metadata of a single wallpaper, produced
//! from its detail page (HTML) or the API detail endpoint (JSON).
use serde::{Deserialize, Serialize};

/// One entry of a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Identifier given by the catalog, e.g. `94x38z`.
    pub id: String,
    /// URL of the wallpaper's detail page.
    pub page_url: String,
    /// URL of the listing thumbnail.
    pub thumb_url: String,
    /// Resolution label, e.g. `1920x1080`.
    pub resolution: String,
}

/// Extended metadata of a single wallpaper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePage {
    /// Identifier given by the catalog.
    pub id: String,
    /// The page URL this record was resolved from.
    pub source_url: String,
    /// Direct URL of the full-size image file.
    pub image_url: String,
    pub resolution: String,
    /// Catalog category label. Empty when the payload did not carry one.
    pub category: String,
    /// Purity label (`sfw`/`sketchy`/`nsfw`). Empty when unknown.
    pub purity: String,
}
