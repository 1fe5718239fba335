//! The catalog's three purity switches.
//!
//! The catalog encodes purity as a fixed-width flag string of three
//! characters in display order: safe, sketchy, NSFW. `"100"` requests safe
//! content only, `"111"` requests everything.

use bitflags::bitflags;

bitflags! {
    /// Parsed form of the purity flag string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Purity: u8 {
        const SAFE = 0b100;
        const SKETCHY = 0b010;
        const NSFW = 0b001;
    }
}

impl Purity {
    /// Parses the catalog's flag string. Only the first three characters are
    /// read; a string shorter than three characters can never enable NSFW.
    pub fn from_param(s: &str) -> Self {
        let mut flags = Self::empty();
        let mut chars = s.chars();
        if chars.next() == Some('1') {
            flags |= Self::SAFE;
        }
        if chars.next() == Some('1') {
            flags |= Self::SKETCHY;
        }
        if chars.next() == Some('1') {
            flags |= Self::NSFW;
        }
        flags
    }

    /// Renders the flag string the catalog expects, e.g. `101`.
    pub fn as_param(&self) -> String {
        let mut out = String::with_capacity(3);
        for flag in [Self::SAFE, Self::SKETCHY, Self::NSFW] {
            out.push(if self.contains(flag) { '1' } else { '0' });
        }
        out
    }

    pub fn includes_nsfw(&self) -> bool {
        self.contains(Self::NSFW)
    }
}

#[cfg(test)]
mod tests {
    use super::Purity;

    #[test]
    fn parses_full_flag_strings() {
        assert_eq!(Purity::from_param("100"), Purity::SAFE);
        assert_eq!(Purity::from_param("110"), Purity::SAFE | Purity::SKETCHY);
        assert_eq!(Purity::from_param("111"), Purity::all());
        assert_eq!(Purity::from_param("001"), Purity::NSFW);
        assert_eq!(Purity::from_param("000"), Purity::empty());
    }

    #[test]
    fn short_strings_never_enable_nsfw() {
        assert!(!Purity::from_param("").includes_nsfw());
        assert!(!Purity::from_param("1").includes_nsfw());
        assert!(!Purity::from_param("11").includes_nsfw());
        assert!(Purity::from_param("111").includes_nsfw());
    }

    #[test]
    fn extra_characters_are_ignored() {
        assert_eq!(Purity::from_param("1101"), Purity::SAFE | Purity::SKETCHY);
    }

    #[test]
    fn renders_flag_string() {
        assert_eq!(Purity::from_param("101").as_param(), "101");
        assert_eq!(Purity::empty().as_param(), "000");
    }
}
