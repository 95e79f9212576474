//! URL normalization.
//!
//! Decomposes a raw URL string into the components the classifier works
//! with: scheme, authority, port-stripped domain and apex domain. No
//! network access, no validation beyond what feature extraction needs.

use crate::Error;

/// URL scheme after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    Http,
    Https,
}

impl Scheme {
    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }
}

/// A URL decomposed for feature extraction and policy checks.
///
/// Normalization is idempotent: parsing `url` again yields the same
/// scheme, authority, domain and apex domain.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedUrl {
    /// Full URL including the (possibly injected) scheme.
    pub url: String,
    /// Parsed scheme; https when the scheme was injected.
    pub scheme: Scheme,
    /// host\[:port\] component, lowercased.
    pub authority: String,
    /// Authority with the port stripped.
    pub domain: String,
    /// Registrable root of `domain`: its last two labels, after one
    /// leading "www." label is stripped. The whole domain when it has
    /// two labels or fewer.
    pub apex_domain: String,
    /// Path component, case preserved.
    pub path: String,
}

/// Prepend `https://` when the string carries no http(s) scheme.
pub fn ensure_scheme(raw: &str) -> String {
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

impl NormalizedUrl {
    /// Parse and normalize a raw URL string.
    ///
    /// A missing scheme is treated as https. Only an empty input is an
    /// error; degenerate URLs like `https://` normalize to empty
    /// authority and domain components.
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if raw.is_empty() {
            return Err(Error::MissingUrl);
        }

        let url = ensure_scheme(raw);
        let (scheme, rest) = match url.strip_prefix("https://") {
            Some(rest) => (Scheme::Https, rest),
            // ensure_scheme guarantees one of the two prefixes
            None => (Scheme::Http, url.strip_prefix("http://").unwrap_or(&url)),
        };

        let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        let authority = rest[..authority_end].to_lowercase();
        let domain = match authority.split_once(':') {
            Some((host, _port)) => host.to_string(),
            None => authority.clone(),
        };
        let apex_domain = apex_of(&domain);

        let after_authority = &rest[authority_end..];
        let path_end = after_authority.find(['?', '#']).unwrap_or(after_authority.len());
        let path = after_authority[..path_end].to_string();

        Ok(Self {
            url,
            scheme,
            authority,
            domain,
            apex_domain,
            path,
        })
    }
}

/// Last two labels of the domain, after stripping one leading "www.".
fn apex_of(domain: &str) -> String {
    let host = domain.strip_prefix("www.").unwrap_or(domain);
    let labels: Vec<&str> = host.split('.').collect();
    if labels.len() > 2 {
        labels[labels.len() - 2..].join(".")
    } else {
        host.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_injected_when_missing() {
        let norm = NormalizedUrl::parse("example.com").unwrap();
        assert_eq!(norm.url, "https://example.com");
        assert_eq!(norm.scheme, Scheme::Https);
        assert_eq!(norm.scheme.as_str(), "https");
        assert_eq!(norm.domain, "example.com");
    }

    #[test]
    fn test_existing_scheme_kept() {
        let norm = NormalizedUrl::parse("http://example.com/a").unwrap();
        assert_eq!(norm.url, "http://example.com/a");
        assert_eq!(norm.scheme, Scheme::Http);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let once = NormalizedUrl::parse("Shop.Example.com/Cart?id=1").unwrap();
        let twice = NormalizedUrl::parse(&once.url).unwrap();
        assert_eq!(once.scheme, twice.scheme);
        assert_eq!(once.domain, twice.domain);
        assert_eq!(once.apex_domain, twice.apex_domain);
    }

    #[test]
    fn test_authority_lowercased_path_preserved() {
        let norm = NormalizedUrl::parse("https://EXAMPLE.Com/Path/To").unwrap();
        assert_eq!(norm.authority, "example.com");
        assert_eq!(norm.domain, "example.com");
        assert_eq!(norm.path, "/Path/To");
    }

    #[test]
    fn test_port_stripped_from_domain() {
        let norm = NormalizedUrl::parse("https://example.com:8443/x").unwrap();
        assert_eq!(norm.authority, "example.com:8443");
        assert_eq!(norm.domain, "example.com");
        assert_eq!(norm.apex_domain, "example.com");
    }

    #[test]
    fn test_apex_strips_www_and_subdomains() {
        let norm = NormalizedUrl::parse("https://www.shop.example.com").unwrap();
        assert_eq!(norm.domain, "www.shop.example.com");
        assert_eq!(norm.apex_domain, "example.com");
    }

    #[test]
    fn test_apex_of_short_domains() {
        assert_eq!(apex_of("example.com"), "example.com");
        assert_eq!(apex_of("localhost"), "localhost");
        assert_eq!(apex_of("www.example.com"), "example.com");
        assert_eq!(apex_of("a.b.c.io"), "c.io");
    }

    #[test]
    fn test_path_stops_at_query_and_fragment() {
        let norm = NormalizedUrl::parse("https://a.b.c.io/x/y/z?token=%41%42").unwrap();
        assert_eq!(norm.path, "/x/y/z");

        let norm = NormalizedUrl::parse("https://example.com/a#frag").unwrap();
        assert_eq!(norm.path, "/a");
    }

    #[test]
    fn test_query_only_url_has_empty_path() {
        let norm = NormalizedUrl::parse("https://example.com?x=1").unwrap();
        assert_eq!(norm.path, "");
        assert_eq!(norm.domain, "example.com");
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(NormalizedUrl::parse(""), Err(Error::MissingUrl)));
    }

    #[test]
    fn test_degenerate_url_is_safe() {
        let norm = NormalizedUrl::parse("https://").unwrap();
        assert_eq!(norm.authority, "");
        assert_eq!(norm.domain, "");
        assert_eq!(norm.apex_domain, "");
        assert_eq!(norm.path, "");
    }
}
