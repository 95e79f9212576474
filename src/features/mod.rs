//! Lexical feature extraction.
//!
//! Turns a URL string into a fixed-shape numeric vector. Every field is a
//! pure function of the URL text; there is no I/O and no randomness, so
//! repeated extraction of the same string is bit-identical.

mod lexicon;

pub use lexicon::Lexicon;

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::url::{NormalizedUrl, Scheme};
use crate::Error;

/// Characters counted by `num_special_chars`.
const SPECIAL_CHARS: &str = "/:?&%=.-_~@";

// Dotted-quad domains (e.g. 192.168.0.1)
static IP_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\d+\.\d+\.\d+$").unwrap());

// Percent-encoded byte (e.g. %2F)
static HEX_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"%[0-9a-fA-F]{2}").unwrap());

/// Lexical features of a single URL.
///
/// Field order matters: the scoring model is trained against exactly this
/// layout, and [`FeatureVector::to_array`] / [`FeatureVector::FIELD_NAMES`]
/// must stay in lockstep with it. Domain-derived fields operate on the
/// lowercased, port-stripped domain; the remaining fields see the full
/// URL with its original casing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Character count of the full (scheme-ensured) URL.
    pub url_length: u32,
    /// Domain is a dotted-quad IP literal.
    pub domain_has_ip: bool,
    /// Characters from `/:?&%=.-_~@` in the URL.
    pub num_special_chars: u32,
    /// ASCII decimal digits in the URL.
    pub num_digits: u32,
    /// Character count of the domain.
    pub domain_length: u32,
    /// Character count of the first dot-separated label of the domain.
    pub subdomain_length: u32,
    /// Dot-separated labels in the domain, minus one.
    pub num_subdomains: u32,
    /// Domain ends with a configured common TLD.
    pub is_common_tld: bool,
    /// Domain contains a configured look-alike term.
    pub typosquatting: bool,
    /// URL contains a configured sensitive keyword.
    pub has_banking_kw: bool,
    /// URL contains a percent-encoded byte.
    pub has_hex: bool,
    /// URL contains `@` anywhere.
    pub has_at_symbol: bool,
    /// Scheme is https (including an injected scheme).
    pub uses_https: bool,
    /// `/` characters in the path component.
    pub path_depth: u32,
    /// Shannon entropy (base 2) of the URL's character distribution.
    pub entropy: f64,
    /// Vowels in the domain divided by domain length; 0 for an empty domain.
    pub vowel_ratio: f64,
    /// Domain contains a letter repeated 3+ times consecutively.
    pub consecutive_chars: bool,
}

impl FeatureVector {
    /// Number of features fed to the model.
    pub const FIELD_COUNT: usize = 17;

    /// Feature names in model order.
    pub const FIELD_NAMES: [&'static str; Self::FIELD_COUNT] = [
        "url_length",
        "domain_has_ip",
        "num_special_chars",
        "num_digits",
        "domain_length",
        "subdomain_length",
        "num_subdomains",
        "is_common_tld",
        "typosquatting",
        "has_banking_kw",
        "has_hex",
        "has_at_symbol",
        "uses_https",
        "path_depth",
        "entropy",
        "vowel_ratio",
        "consecutive_chars",
    ];

    /// Project the vector into model order as f32.
    pub fn to_array(&self) -> [f32; Self::FIELD_COUNT] {
        [
            self.url_length as f32,
            self.domain_has_ip as u8 as f32,
            self.num_special_chars as f32,
            self.num_digits as f32,
            self.domain_length as f32,
            self.subdomain_length as f32,
            self.num_subdomains as f32,
            self.is_common_tld as u8 as f32,
            self.typosquatting as u8 as f32,
            self.has_banking_kw as u8 as f32,
            self.has_hex as u8 as f32,
            self.has_at_symbol as u8 as f32,
            self.uses_https as u8 as f32,
            self.path_depth as f32,
            self.entropy as f32,
            self.vowel_ratio as f32,
            self.consecutive_chars as u8 as f32,
        ]
    }
}

/// Extracts [`FeatureVector`]s using a configured [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct FeatureExtractor {
    lexicon: Lexicon,
}

impl FeatureExtractor {
    /// Create an extractor with the given token lists.
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Extract all features from a raw URL string.
    ///
    /// A missing scheme is treated as https. All-or-nothing: a URL that
    /// cannot be normalized yields no partial vector.
    pub fn extract(&self, url: &str) -> Result<FeatureVector, Error> {
        let norm = NormalizedUrl::parse(url).map_err(|e| Error::Extraction(e.to_string()))?;
        Ok(self.extract_normalized(&norm))
    }

    /// Extract from an already-normalized URL. Total: every guard the
    /// individual features need (empty domain, zero-length input) is
    /// handled internally.
    pub fn extract_normalized(&self, norm: &NormalizedUrl) -> FeatureVector {
        let url = norm.url.as_str();
        let domain = norm.domain.as_str();
        let url_lower = url.to_lowercase();

        FeatureVector {
            url_length: url.chars().count() as u32,
            domain_has_ip: IP_PATTERN.is_match(domain),
            num_special_chars: url.chars().filter(|c| SPECIAL_CHARS.contains(*c)).count() as u32,
            num_digits: url.chars().filter(|c| c.is_ascii_digit()).count() as u32,
            domain_length: domain.chars().count() as u32,
            subdomain_length: domain.split('.').next().unwrap_or("").chars().count() as u32,
            num_subdomains: domain.split('.').count().saturating_sub(1) as u32,
            is_common_tld: self.lexicon.matches_common_tld(domain),
            typosquatting: self.lexicon.matches_lookalike(domain),
            has_banking_kw: self.lexicon.matches_sensitive(&url_lower),
            has_hex: HEX_PATTERN.is_match(url),
            has_at_symbol: url.contains('@'),
            uses_https: norm.scheme == Scheme::Https,
            path_depth: norm.path.matches('/').count() as u32,
            entropy: entropy_of(url),
            vowel_ratio: vowel_ratio_of(domain),
            consecutive_chars: has_consecutive_repeat(domain),
        }
    }
}

/// Shannon entropy (base 2) of the character distribution.
///
/// Only characters actually present contribute a term. The counts map is
/// ordered so the floating-point sum visits terms in a fixed order and
/// stays reproducible across calls.
fn entropy_of(text: &str) -> f64 {
    let mut counts: BTreeMap<char, u32> = BTreeMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }

    let len = text.chars().count() as f64;
    if len == 0.0 {
        return 0.0;
    }

    counts
        .values()
        .map(|&n| {
            let p = n as f64 / len;
            -(p * p.log2())
        })
        .sum()
}

/// Vowels divided by domain length; 0 when the domain is empty.
fn vowel_ratio_of(domain: &str) -> f64 {
    if domain.is_empty() {
        return 0.0;
    }
    let len = domain.chars().count() as f64;
    let vowels = domain
        .chars()
        .filter(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'))
        .count() as f64;
    vowels / len
}

/// Any alphabetic character repeated three or more times in a row.
fn has_consecutive_repeat(domain: &str) -> bool {
    let mut run = 0u32;
    let mut prev = '\0';
    for c in domain.chars() {
        if c.is_alphabetic() && c == prev {
            run += 1;
        } else {
            run = 1;
            prev = c;
        }
        if c.is_alphabetic() && run >= 3 {
            return true;
        }
    }
    false
}
