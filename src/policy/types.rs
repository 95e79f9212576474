//! Verdict types for the decision policy.

use std::fmt;

use serde::Serialize;

/// Probability above which confidence is labelled high.
const HIGH_BAND_UPPER: f64 = 0.9;
/// Probability below which confidence is labelled high.
const HIGH_BAND_LOWER: f64 = 0.1;

/// Probability reported on the trusted fast path.
pub(crate) const TRUSTED_PROBABILITY: f64 = 0.05;

/// Confidence band of a verdict.
///
/// Derived from probability extremity alone, independent of the phishing
/// threshold: a phishing verdict can carry medium confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
}

impl Confidence {
    /// Band a raw (unrounded) probability.
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_BAND_UPPER || probability < HIGH_BAND_LOWER {
            Confidence::High
        } else {
            Confidence::Medium
        }
    }

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
        }
    }
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of classifying one URL.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    /// Normalized URL the verdict applies to.
    pub url: String,
    /// Verdict: probability exceeded the configured threshold.
    pub is_phishing: bool,
    /// Phishing probability, rounded to 4 decimals for presentation.
    pub probability: f64,
    /// Confidence band of the verdict.
    pub confidence: Confidence,
    /// Whether the trusted-domain fast path produced this result.
    pub trusted_domain: bool,
}

impl ScoreResult {
    /// Fixed record returned for trusted apex domains.
    pub(crate) fn trusted(url: String) -> Self {
        Self {
            url,
            is_phishing: false,
            probability: TRUSTED_PROBABILITY,
            confidence: Confidence::High,
            trusted_domain: true,
        }
    }

    /// Record for a scored URL. The verdict and the band are computed
    /// from the raw probability; only the stored value is rounded.
    pub(crate) fn scored(url: String, probability: f64, threshold: f64) -> Self {
        Self {
            url,
            is_phishing: probability > threshold,
            probability: round4(probability),
            confidence: Confidence::from_probability(probability),
            trusted_domain: false,
        }
    }
}

/// Round to 4 decimal places.
fn round4(p: f64) -> f64 {
    (p * 10_000.0).round() / 10_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_as_str() {
        assert_eq!(Confidence::High.as_str(), "high");
        assert_eq!(Confidence::Medium.as_str(), "medium");
    }

    #[test]
    fn test_confidence_banding() {
        assert_eq!(Confidence::from_probability(0.95), Confidence::High);
        assert_eq!(Confidence::from_probability(0.05), Confidence::High);
        assert_eq!(Confidence::from_probability(0.5), Confidence::Medium);
        // band edges are exclusive
        assert_eq!(Confidence::from_probability(0.9), Confidence::Medium);
        assert_eq!(Confidence::from_probability(0.1), Confidence::Medium);
    }

    #[test]
    fn test_round4() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(0.1), 0.1);
        assert_eq!(round4(0.87654321), 0.8765);
    }

    #[test]
    fn test_trusted_record_fields() {
        let result = ScoreResult::trusted("https://example.com".to_string());
        assert!(!result.is_phishing);
        assert_eq!(result.probability, 0.05);
        assert_eq!(result.confidence, Confidence::High);
        assert!(result.trusted_domain);
    }

    #[test]
    fn test_scored_record_uses_raw_probability_for_verdict() {
        // 0.90004 rounds down to 0.9 but still bands high
        let result = ScoreResult::scored("https://x.net".to_string(), 0.90004, 0.75);
        assert!(result.is_phishing);
        assert_eq!(result.probability, 0.9);
        assert_eq!(result.confidence, Confidence::High);
    }
}
