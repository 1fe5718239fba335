use thiserror::Error;

/// Distinguishes failures resolved before any network exchange from
/// transport failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Policy decision made locally, no network call involved.
    Local,
    /// Transport-level failure of a dispatched request.
    Network,
}

/// Enumerates the possible errors that can arise while fetching a listing or
/// a detail page from the catalog.
///
/// Every public operation terminates in exactly one success or exactly one of
/// these; errors are returned, never thrown across the crate boundary.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Restricted content was requested while no API key is stored.
    #[error("API key required for NSFW content")]
    ApiKeyRequired,

    /// The catalog answered, but the parsed listing or page came back empty.
    #[error("No images")]
    NoResults,

    /// The request URL could not be parsed, nothing was dispatched.
    #[error("Malformed request URL: {0}")]
    MalformedUrl(String),

    /// An error occurred during the network exchange (connection failure,
    /// timeout, interrupted body). Wraps the underlying `reqwest::Error`.
    #[error("Connection error")]
    Connection(#[from] reqwest::Error),
}

impl ProviderError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::ApiKeyRequired | Self::NoResults => ErrorKind::Local,
            Self::MalformedUrl(_) | Self::Connection(_) => ErrorKind::Network,
        }
    }

    /// Numeric code carried next to the kind: 401 missing key, 204 empty
    /// result, 400 for any transport failure.
    pub const fn code(&self) -> u16 {
        match self {
            Self::ApiKeyRequired => 401,
            Self::NoResults => 204,
            Self::MalformedUrl(_) | Self::Connection(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, ProviderError};

    #[test]
    fn local_errors_carry_policy_codes() {
        assert_eq!(ProviderError::ApiKeyRequired.kind(), ErrorKind::Local);
        assert_eq!(ProviderError::ApiKeyRequired.code(), 401);
        assert_eq!(ProviderError::NoResults.kind(), ErrorKind::Local);
        assert_eq!(ProviderError::NoResults.code(), 204);
    }

    #[test]
    fn malformed_url_is_a_network_error() {
        let err = ProviderError::MalformedUrl("not a url".to_string());
        assert_eq!(err.kind(), ErrorKind::Network);
        assert_eq!(err.code(), 400);
    }
}
