//! Shared data structures for the wallhaven catalog data provider.

// Public Exports
pub use log;
pub use reqwest;
pub use serde;
pub use serde_json;
pub use tokio;

pub mod filter;
pub mod image;
pub mod macros;
