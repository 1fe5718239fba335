pub use crate::auth::AccessDecision;
pub use crate::auth::CredentialGate;
pub use crate::catalog_config::CatalogConfig;
pub use crate::client::CatalogClient;
pub use crate::error::ErrorKind;
pub use crate::error::ProviderError;
pub use crate::network::RawResponse;
pub use crate::network::RequestDispatcher;
pub use crate::parse::Parser;
pub use crate::parse::WallhavenParser;
pub use crate::prefs::MemoryPreferenceStore;
pub use crate::prefs::PreferenceStore;
pub use crate::protocol::ApiProtocol;
pub use crate::protocol::BrowseProtocol;
pub use crate::protocol::CatalogProtocol;
pub use crate::request::ListingKind;
pub use crate::request::PageRequest;
pub use crate::request::SearchRequest;
