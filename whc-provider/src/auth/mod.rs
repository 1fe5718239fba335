//! Credential gating for restricted catalog content.
//!
//! The gate is pure and stateless: given a filter snapshot and the stored
//! API key it decides whether a request may be dispatched at all. NSFW
//! listings require a key to be present; the key's *format* is advisory
//! only and never blocks dispatch on its own (see [`CredentialGate::decide`]
//! vs [`CredentialGate::decide_strict`]).

use whc_common::filter::FilterCriteria;

/// Outcome of checking stored credentials against the requested filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allowed,
    /// Restricted content requested with no key stored.
    DeniedMissingKey,
    /// Restricted content requested and the stored key fails format
    /// validation. Only produced by [`CredentialGate::decide_strict`].
    DeniedInvalidKeyFormat,
}

impl AccessDecision {
    pub const fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

pub struct CredentialGate;

impl CredentialGate {
    /// True iff the purity selector enables the NSFW flag.
    pub fn wants_restricted_content(criteria: &FilterCriteria) -> bool {
        criteria.wants_nsfw()
    }

    /// The dispatch policy: restricted content requires a key to be present,
    /// nothing more. A present key with a bad format still passes; format
    /// problems surface through [`Self::key_error_message`] instead.
    pub fn decide(criteria: &FilterCriteria, stored_key: Option<&str>) -> AccessDecision {
        if !Self::wants_restricted_content(criteria) {
            return AccessDecision::Allowed;
        }
        match stored_key {
            None => AccessDecision::DeniedMissingKey,
            Some(key) if key.is_empty() => AccessDecision::DeniedMissingKey,
            Some(_) => AccessDecision::Allowed,
        }
    }

    /// Stricter evaluation that also rejects present keys with a bad format.
    /// Feeds the advisory message surface; dispatch keeps [`Self::decide`].
    pub fn decide_strict(criteria: &FilterCriteria, stored_key: Option<&str>) -> AccessDecision {
        match Self::decide(criteria, stored_key) {
            AccessDecision::Allowed
                if Self::wants_restricted_content(criteria)
                    && !stored_key.is_some_and(Self::validate_key_format) =>
            {
                AccessDecision::DeniedInvalidKeyFormat
            }
            decision => decision,
        }
    }

    /// Catalog API keys are 32 or more alphanumeric characters.
    pub fn validate_key_format(key: &str) -> bool {
        key.len() >= 32 && key.chars().all(|c| c.is_ascii_alphanumeric())
    }

    /// Presence and format combined.
    pub fn has_valid_key(stored_key: Option<&str>) -> bool {
        stored_key.is_some_and(Self::validate_key_format)
    }

    /// User-facing advisory for key problems, `None` when there are none.
    pub fn key_error_message(
        criteria: &FilterCriteria,
        stored_key: Option<&str>,
    ) -> Option<&'static str> {
        match Self::decide_strict(criteria, stored_key) {
            AccessDecision::Allowed => None,
            AccessDecision::DeniedMissingKey => Some(
                "NSFW content requires a valid Wallhaven API key. \
                 Please add your API key in the filter settings.",
            ),
            AccessDecision::DeniedInvalidKeyFormat => Some(
                "Invalid API key format. \
                 Please check your Wallhaven API key in the filter settings.",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use whc_common::filter::FilterCriteria;

    use super::{AccessDecision, CredentialGate};

    fn criteria(purity: &str) -> FilterCriteria {
        FilterCriteria::new("111", purity, "", "")
    }

    const GOOD_KEY: &str = "abcdefghijklmnopqrstuvwxyz012345"; // 32 chars

    #[test]
    fn short_or_unset_purity_is_not_restricted() {
        assert!(!CredentialGate::wants_restricted_content(&criteria("")));
        assert!(!CredentialGate::wants_restricted_content(&criteria("11")));
        assert!(!CredentialGate::wants_restricted_content(&criteria("110")));
        assert!(CredentialGate::wants_restricted_content(&criteria("001")));
        assert!(CredentialGate::wants_restricted_content(&criteria("111")));
    }

    #[test]
    fn sfw_requests_pass_without_any_key() {
        assert_eq!(
            CredentialGate::decide(&criteria("100"), None),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn nsfw_requests_need_a_present_key() {
        assert_eq!(
            CredentialGate::decide(&criteria("111"), None),
            AccessDecision::DeniedMissingKey
        );
        assert_eq!(
            CredentialGate::decide(&criteria("111"), Some("")),
            AccessDecision::DeniedMissingKey
        );
        assert_eq!(
            CredentialGate::decide(&criteria("111"), Some(GOOD_KEY)),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn badly_formatted_keys_still_pass_the_dispatch_policy() {
        assert_eq!(
            CredentialGate::decide(&criteria("111"), Some("short")),
            AccessDecision::Allowed
        );
        assert_eq!(
            CredentialGate::decide_strict(&criteria("111"), Some("short")),
            AccessDecision::DeniedInvalidKeyFormat
        );
        assert_eq!(
            CredentialGate::decide_strict(&criteria("111"), Some(GOOD_KEY)),
            AccessDecision::Allowed
        );
    }

    #[test]
    fn key_format_boundaries() {
        assert!(CredentialGate::validate_key_format(GOOD_KEY));
        assert!(CredentialGate::validate_key_format(
            &"a".repeat(40)
        ));
        assert!(!CredentialGate::validate_key_format(&"a".repeat(31)));
        assert!(!CredentialGate::validate_key_format(""));
        assert!(!CredentialGate::validate_key_format(
            "abcdefghijklmnopqrstuvwxyz01234-"
        ));
    }

    #[test]
    fn advisory_messages() {
        assert!(CredentialGate::key_error_message(&criteria("100"), None).is_none());
        assert!(CredentialGate::key_error_message(&criteria("111"), None)
            .is_some_and(|m| m.contains("requires a valid")));
        assert!(CredentialGate::key_error_message(&criteria("111"), Some("short"))
            .is_some_and(|m| m.contains("Invalid API key format")));
        assert!(CredentialGate::key_error_message(&criteria("111"), Some(GOOD_KEY)).is_none());
    }
}
