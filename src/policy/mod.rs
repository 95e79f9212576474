//! Decision policy: trusted-domain override, scoring, verdict.
//!
//! The policy runs two steps in order and stops at the first that
//! produces a result: a deterministic trusted-domain check, then feature
//! extraction plus model scoring with threshold and confidence banding.
//!
//! # Example
//!
//! ```no_run
//! use esca::{DecisionPolicy, OnnxScorer, PolicyConfig};
//!
//! let mut config = PolicyConfig::default();
//! config.trusted_domains = vec!["example.com".to_string()];
//!
//! let scorer = OnnxScorer::from_file("phish.onnx").unwrap();
//! let policy = DecisionPolicy::new(&config, Box::new(scorer));
//!
//! // Trusted apex: the model is never consulted.
//! let result = policy.decide("https://shop.example.com").unwrap();
//! assert!(result.trusted_domain);
//! ```

mod types;

pub use types::{Confidence, ScoreResult};

use std::collections::HashSet;

use crate::config::PolicyConfig;
use crate::features::FeatureExtractor;
use crate::scorer::Scorer;
use crate::url::NormalizedUrl;
use crate::Error;

/// Apex domains that bypass scoring.
///
/// Membership is exact, case-normalized match against the apex domain;
/// entries are lowercased at construction.
#[derive(Debug, Clone, Default)]
pub struct TrustedDomains {
    domains: HashSet<String>,
}

impl TrustedDomains {
    /// Build from apex-domain strings.
    pub fn new<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            domains: domains
                .into_iter()
                .map(|d| d.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Membership test for a lowercased apex domain.
    pub fn contains(&self, apex: &str) -> bool {
        self.domains.contains(apex)
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }
}

/// Turns URLs into verdicts.
///
/// Holds only immutable dependencies, injected once at construction; a
/// single instance is shared across threads for the process lifetime.
pub struct DecisionPolicy {
    extractor: FeatureExtractor,
    scorer: Box<dyn Scorer>,
    trusted: TrustedDomains,
    threshold: f64,
}

impl DecisionPolicy {
    /// Build the policy from configuration and a scoring backend.
    pub fn new(config: &PolicyConfig, scorer: Box<dyn Scorer>) -> Self {
        Self {
            extractor: FeatureExtractor::new(config.lexicon.clone()),
            scorer,
            trusted: TrustedDomains::new(&config.trusted_domains),
            threshold: config.threshold,
        }
    }

    /// Classify one URL.
    ///
    /// Known-safe apex domains short-circuit with a fixed low-probability
    /// record and never touch the extractor or the scorer. A serving
    /// layer maps [`Error::MissingUrl`] and [`Error::Extraction`] to
    /// client errors and everything else to backend failures.
    pub fn decide(&self, url: &str) -> Result<ScoreResult, Error> {
        if url.is_empty() {
            return Err(Error::MissingUrl);
        }

        let norm = NormalizedUrl::parse(url)?;

        if self.trusted.contains(&norm.apex_domain) {
            tracing::debug!("trusted domain {}: skipping model", norm.apex_domain);
            return Ok(ScoreResult::trusted(norm.url));
        }

        let features = self.extractor.extract_normalized(&norm);
        let probability = self.scorer.score(&features)?;

        Ok(ScoreResult::scored(norm.url, probability, self.threshold))
    }

    /// The configured verdict threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}
