//! Payload parsing contract plus the shipped wallhaven parser.
//!
//! Parsing never fails: malformed input yields an empty listing or an absent
//! page, and the orchestrator decides what that means for the caller.

use log::debug;

use whc_common::image::{Image, ImagePage};

use self::models::{ApiListingResponse, ApiPageResponse};
use crate::url::extract_wallpaper_id;

mod models;

/// Converts raw response bodies into typed records.
///
/// Implementations must be total: bad input produces empty/absent results,
/// never an error.
pub trait Parser: Send + Sync {
    /// Parses a browse-protocol HTML listing.
    fn parse_listing(&self, raw_html: &str) -> Vec<Image>;

    /// Parses an API-protocol JSON listing.
    fn parse_listing_from_api(&self, raw_json: &str) -> Vec<Image>;

    /// Parses a browse-protocol detail page.
    fn parse_page(&self, raw_html: &str, source_url: &str) -> Option<ImagePage>;

    /// Parses an API-protocol detail response.
    fn parse_page_from_api(&self, raw_json: &str, source_url: &str) -> Option<ImagePage>;
}

/// Default parser for wallhaven payloads.
///
/// The API side is plain serde over the documented JSON shape. The HTML side
/// is a tolerant attribute scan over the listing figures and the detail
/// page's `wallpaper` element; anything it cannot find comes back empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct WallhavenParser;

impl Parser for WallhavenParser {
    fn parse_listing(&self, raw_html: &str) -> Vec<Image> {
        let mut images = Vec::new();
        for chunk in raw_html.split("data-wallpaper-id=\"").skip(1) {
            let Some(id) = chunk.split('"').next() else {
                continue;
            };
            if id.is_empty() {
                continue;
            }
            images.push(Image {
                id: id.to_string(),
                page_url: attr_value(chunk, "href=\"").unwrap_or_default(),
                thumb_url: attr_value(chunk, "data-src=\"").unwrap_or_default(),
                resolution: text_after(chunk, "wall-res\">").unwrap_or_default(),
            });
        }
        images
    }

    fn parse_listing_from_api(&self, raw_json: &str) -> Vec<Image> {
        let Ok(listing) = serde_json::from_str::<ApiListingResponse>(raw_json) else {
            debug!("Discarding unparsable API listing payload");
            return Vec::new();
        };
        listing.data.into_iter().map(|w| w.into_image()).collect()
    }

    fn parse_page(&self, raw_html: &str, source_url: &str) -> Option<ImagePage> {
        let id = attr_value(raw_html, "data-wallpaper-id=\"")
            .or_else(|| extract_wallpaper_id(source_url))?;

        let image_url = raw_html
            .split_once("id=\"wallpaper\"")
            .and_then(|(_, rest)| attr_value(rest, "src=\""))
            .unwrap_or_default();

        Some(ImagePage {
            id,
            source_url: source_url.to_string(),
            image_url,
            resolution: text_after(raw_html, "showcase-resolution\">").unwrap_or_default(),
            category: String::new(),
            purity: String::new(),
        })
    }

    fn parse_page_from_api(&self, raw_json: &str, source_url: &str) -> Option<ImagePage> {
        let Ok(page) = serde_json::from_str::<ApiPageResponse>(raw_json) else {
            debug!("Discarding unparsable API page payload");
            return None;
        };
        Some(page.data.into_page(source_url))
    }
}

/// Value of the first `marker`-prefixed attribute in `chunk`, up to the
/// closing quote.
fn attr_value(chunk: &str, marker: &str) -> Option<String> {
    let (_, rest) = chunk.split_once(marker)?;
    rest.split('"').next().map(str::to_string)
}

/// Text following `marker` up to the next tag, trimmed.
fn text_after(chunk: &str, marker: &str) -> Option<String> {
    let (_, rest) = chunk.split_once(marker)?;
    rest.split('<').next().map(|t| t.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::{Parser, WallhavenParser};

    const API_LISTING: &str = r#"{
        "data": [
            {
                "id": "94x38z",
                "url": "https://wallhaven.cc/w/94x38z",
                "path": "https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg",
                "resolution": "1920x1080",
                "purity": "sfw",
                "category": "general",
                "thumbs": { "small": "https://th.wallhaven.cc/small/94/94x38z.jpg" }
            },
            {
                "id": "otherid",
                "url": "https://wallhaven.cc/w/otherid",
                "path": "https://w.wallhaven.cc/full/ot/wallhaven-otherid.png"
            }
        ]
    }"#;

    const API_PAGE: &str = r#"{
        "data": {
            "id": "94x38z",
            "url": "https://wallhaven.cc/w/94x38z",
            "path": "https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg",
            "resolution": "1920x1080",
            "purity": "nsfw",
            "category": "people"
        }
    }"#;

    const BROWSE_LISTING: &str = r#"
        <figure data-wallpaper-id="94x38z" class="thumb">
            <img data-src="https://th.wallhaven.cc/small/94/94x38z.jpg" />
            <a class="preview" href="https://wallhaven.cc/w/94x38z"></a>
            <span class="wall-res">1920 x 1080</span>
        </figure>
        <figure data-wallpaper-id="x8d2vl" class="thumb">
            <img data-src="https://th.wallhaven.cc/small/x8/x8d2vl.jpg" />
            <a class="preview" href="https://wallhaven.cc/w/x8d2vl"></a>
            <span class="wall-res">3840 x 2160</span>
        </figure>
    "#;

    #[test]
    fn api_listing_maps_every_entry() {
        let images = WallhavenParser.parse_listing_from_api(API_LISTING);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "94x38z");
        assert_eq!(images[0].page_url, "https://wallhaven.cc/w/94x38z");
        assert_eq!(images[0].thumb_url, "https://th.wallhaven.cc/small/94/94x38z.jpg");
        assert_eq!(images[0].resolution, "1920x1080");
        // Missing fields default to empty instead of dropping the entry.
        assert_eq!(images[1].resolution, "");
    }

    #[test]
    fn malformed_payloads_yield_empty_results() {
        assert!(WallhavenParser.parse_listing_from_api("{not json").is_empty());
        assert!(WallhavenParser.parse_listing_from_api("{}").is_empty());
        assert!(WallhavenParser.parse_listing("<html></html>").is_empty());
        assert!(WallhavenParser
            .parse_page_from_api("[]", "https://wallhaven.cc/w/94x38z")
            .is_none());
    }

    #[test]
    fn api_page_carries_source_url() {
        let page = WallhavenParser
            .parse_page_from_api(API_PAGE, "https://wallhaven.cc/w/94x38z?src=top")
            .unwrap();
        assert_eq!(page.id, "94x38z");
        assert_eq!(page.source_url, "https://wallhaven.cc/w/94x38z?src=top");
        assert_eq!(page.purity, "nsfw");
        assert_eq!(
            page.image_url,
            "https://w.wallhaven.cc/full/94/wallhaven-94x38z.jpg"
        );
    }

    #[test]
    fn browse_listing_scan_finds_all_figures() {
        let images = WallhavenParser.parse_listing(BROWSE_LISTING);
        assert_eq!(images.len(), 2);
        assert_eq!(images[0].id, "94x38z");
        assert_eq!(images[0].page_url, "https://wallhaven.cc/w/94x38z");
        assert_eq!(images[1].id, "x8d2vl");
        assert_eq!(images[1].resolution, "3840 x 2160");
    }

    #[test]
    fn browse_page_falls_back_to_the_source_url_for_the_id() {
        let html = r#"<img id="wallpaper" src="https://w.wallhaven.cc/full/94/a.jpg" />"#;
        let page = WallhavenParser
            .parse_page(html, "https://wallhaven.cc/w/94x38z")
            .unwrap();
        assert_eq!(page.id, "94x38z");
        assert_eq!(page.image_url, "https://w.wallhaven.cc/full/94/a.jpg");

        assert!(WallhavenParser
            .parse_page("<html></html>", "https://wallhaven.cc/latest")
            .is_none());
    }
}
