//! Token lists consulted during feature extraction.
//!
//! All matching is case-insensitive: entries are stored lowercase and
//! tested against lowercased URL text.

use serde::{Deserialize, Serialize};

/// TLD suffixes counted as "common". Leading dot included: matched as a
/// suffix of the whole domain.
const COMMON_TLDS: &[&str] = &[".com", ".org", ".net", ".gov", ".edu", ".io"];

/// Character-substitution spellings of frequently-impersonated brands.
const LOOKALIKE_TERMS: &[&str] = &["paypa1", "g00gle", "amaz0n", "faceb00k", "y0utube"];

/// Keywords favored by credential-harvesting pages.
const SENSITIVE_KEYWORDS: &[&str] = &["login", "bank", "account", "secure", "verify"];

/// Configured token lists for the lexical features.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Lexicon {
    /// Suffixes for `is_common_tld`.
    pub common_tlds: Vec<String>,
    /// Substrings for `typosquatting`.
    pub lookalike_terms: Vec<String>,
    /// Substrings for `has_banking_kw`.
    pub sensitive_keywords: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            common_tlds: COMMON_TLDS.iter().map(|s| s.to_string()).collect(),
            lookalike_terms: LOOKALIKE_TERMS.iter().map(|s| s.to_string()).collect(),
            sensitive_keywords: SENSITIVE_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Lowercase every entry. Applied after deserializing user config so
    /// matching stays case-insensitive however the lists were written.
    pub fn canonicalize(&mut self) {
        for list in [
            &mut self.common_tlds,
            &mut self.lookalike_terms,
            &mut self.sensitive_keywords,
        ] {
            for entry in list.iter_mut() {
                *entry = entry.to_lowercase();
            }
        }
    }

    /// Does the (lowercased) domain end with a common TLD?
    pub fn matches_common_tld(&self, domain: &str) -> bool {
        self.common_tlds.iter().any(|tld| domain.ends_with(tld.as_str()))
    }

    /// Does the (lowercased) domain contain a look-alike term?
    pub fn matches_lookalike(&self, domain: &str) -> bool {
        self.lookalike_terms.iter().any(|term| domain.contains(term.as_str()))
    }

    /// Does the (lowercased) URL contain a sensitive keyword?
    pub fn matches_sensitive(&self, url: &str) -> bool {
        self.sensitive_keywords.iter().any(|kw| url.contains(kw.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lists_populated() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.common_tlds.is_empty());
        assert!(!lexicon.lookalike_terms.is_empty());
        assert!(!lexicon.sensitive_keywords.is_empty());
    }

    #[test]
    fn test_common_tld_is_suffix_match() {
        let lexicon = Lexicon::default();
        assert!(lexicon.matches_common_tld("example.com"));
        assert!(lexicon.matches_common_tld("a.b.c.io"));
        assert!(!lexicon.matches_common_tld("example.xyz"));
        // no dot means no suffix match
        assert!(!lexicon.matches_common_tld("telecom"));
    }

    #[test]
    fn test_lookalike_is_substring_match() {
        let lexicon = Lexicon::default();
        assert!(lexicon.matches_lookalike("login-g00gle.net"));
        assert!(lexicon.matches_lookalike("paypa1.com"));
        assert!(!lexicon.matches_lookalike("paypal.com"));
    }

    #[test]
    fn test_sensitive_keyword_match() {
        let lexicon = Lexicon::default();
        assert!(lexicon.matches_sensitive("https://x.com/verify"));
        assert!(lexicon.matches_sensitive("https://mybank.example.org"));
        assert!(!lexicon.matches_sensitive("https://example.org"));
    }

    #[test]
    fn test_canonicalize_lowercases_entries() {
        let mut lexicon = Lexicon {
            common_tlds: vec![".COM".to_string()],
            lookalike_terms: vec!["PayPa1".to_string()],
            sensitive_keywords: vec!["LOGIN".to_string()],
        };
        lexicon.canonicalize();
        assert_eq!(lexicon.common_tlds, vec![".com"]);
        assert_eq!(lexicon.lookalike_terms, vec!["paypa1"]);
        assert_eq!(lexicon.sensitive_keywords, vec!["login"]);
    }
}
