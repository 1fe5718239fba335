use serde::Deserialize;
use whc_common::image::{Image, ImagePage};

/// Top level of an API listing response.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiListingResponse {
    #[serde(default)]
    pub data: Vec<ApiWallpaper>,
}

/// Top level of an API detail response.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiPageResponse {
    pub data: ApiWallpaper,
}

/// The catalog's wallpaper record. Fields the payload omits default to
/// empty; extra fields are ignored.
#[derive(Deserialize, Debug)]
pub(crate) struct ApiWallpaper {
    pub id: String,
    /// Detail page URL.
    #[serde(default)]
    pub url: String,
    /// Direct URL of the full-size file.
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default)]
    pub purity: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub thumbs: ApiThumbs,
}

#[derive(Deserialize, Debug, Default)]
pub(crate) struct ApiThumbs {
    #[serde(default)]
    pub small: String,
}

impl ApiWallpaper {
    pub(crate) fn into_image(self) -> Image {
        Image {
            id: self.id,
            page_url: self.url,
            thumb_url: self.thumbs.small,
            resolution: self.resolution,
        }
    }

    pub(crate) fn into_page(self, source_url: &str) -> ImagePage {
        ImagePage {
            id: self.id,
            source_url: source_url.to_string(),
            image_url: self.path,
            resolution: self.resolution,
            category: self.category,
            purity: self.purity,
        }
    }
}
