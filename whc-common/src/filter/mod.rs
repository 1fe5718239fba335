//! Filter state read from the preference store at request time.
//!
//! A [`FilterCriteria`] is an immutable snapshot of the four filter axes the
//! catalog understands. It is assembled by whoever owns the preference store
//! and passed into each request; nothing in this workspace mutates it.

pub use crate::filter::purity::Purity;

pub mod purity;

/// Query parameter key the catalog uses for the board/category selector.
pub const BOARDS_KEY: &str = "categories";
/// Query parameter key for the purity flag string.
pub const PURITY_KEY: &str = "purity";
/// Query parameter key for the resolution selector.
pub const RESOLUTION_KEY: &str = "resolutions";
/// Query parameter key for the aspect-ratio selector.
pub const ASPECT_RATIO_KEY: &str = "ratios";

/// Snapshot of the four filter axes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    /// Board/category flag string, e.g. `111`.
    pub boards: String,
    /// Purity flag string, e.g. `110`. See [`Purity`] for the flag layout.
    pub purity: String,
    /// Resolution selector, e.g. `1920x1080`. Empty means no restriction.
    pub resolution: String,
    /// Aspect-ratio selector, e.g. `16x9`. Empty means no restriction.
    pub aspect_ratio: String,
}

impl FilterCriteria {
    pub fn new(boards: &str, purity: &str, resolution: &str, aspect_ratio: &str) -> Self {
        Self {
            boards: boards.to_string(),
            purity: purity.to_string(),
            resolution: resolution.to_string(),
            aspect_ratio: aspect_ratio.to_string(),
        }
    }

    /// Whether this snapshot asks for NSFW content.
    pub fn wants_nsfw(&self) -> bool {
        Purity::from_param(&self.purity).includes_nsfw()
    }
}
