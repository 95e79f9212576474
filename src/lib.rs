//! Esca - Lexical phishing URL classifier
//!
//! Classifies a candidate URL as phishing or benign from lexical features
//! alone: no page fetch, no reputation lookups, just the URL text and a
//! pre-trained model.
//!
//! # Architecture
//!
//! Each URL flows through a short pipeline:
//! 1. Normalization (scheme injection, domain and apex-domain derivation)
//! 2. Trusted-domain fast path for known-safe apex domains
//! 3. Lexical feature extraction into a fixed-shape vector
//! 4. Model scoring plus threshold and confidence policy
//!
//! # Example
//!
//! ```no_run
//! use esca::{DecisionPolicy, OnnxScorer, PolicyConfig};
//!
//! let config = PolicyConfig::default();
//! let scorer = OnnxScorer::from_file("phish.onnx").unwrap();
//! let policy = DecisionPolicy::new(&config, Box::new(scorer));
//!
//! let result = policy.decide("paypa1-login.example.com/secure").unwrap();
//! println!("{} -> phishing: {}", result.url, result.is_phishing);
//! println!("probability: {:.4} ({})", result.probability, result.confidence);
//! ```

pub use error::Error;

// Runtime configuration: threshold, token lists, trusted domains
pub mod config;

// Lexical feature extraction
pub mod features;

// Verdict and confidence policy
pub mod policy;

// Probability scoring backends
pub mod scorer;

// URL normalization
pub mod url;

pub use config::PolicyConfig;
pub use features::{FeatureExtractor, FeatureVector, Lexicon};
pub use policy::{Confidence, DecisionPolicy, ScoreResult, TrustedDomains};
pub use scorer::{OnnxScorer, Scorer};
pub use url::{NormalizedUrl, Scheme};

mod error {
    use std::fmt;

    #[derive(Debug)]
    pub enum Error {
        /// No URL was supplied.
        MissingUrl,
        /// The URL could not be turned into a feature vector.
        Extraction(String),
        /// The scoring capability failed.
        Scorer(String),
        Io(std::io::Error),
        Config(toml::de::Error),
        Shape(ndarray::ShapeError),
        Ort(ort::Error),
    }

    impl fmt::Display for Error {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match self {
                Error::MissingUrl => write!(f, "no URL provided"),
                Error::Extraction(e) => write!(f, "feature extraction failed: {}", e),
                Error::Scorer(e) => write!(f, "scorer error: {}", e),
                Error::Io(e) => write!(f, "IO error: {}", e),
                Error::Config(e) => write!(f, "config error: {}", e),
                Error::Shape(e) => write!(f, "shape error: {}", e),
                Error::Ort(e) => write!(f, "ORT error: {}", e),
            }
        }
    }

    impl std::error::Error for Error {}

    impl From<std::io::Error> for Error {
        fn from(e: std::io::Error) -> Self {
            Error::Io(e)
        }
    }

    impl From<toml::de::Error> for Error {
        fn from(e: toml::de::Error) -> Self {
            Error::Config(e)
        }
    }

    impl From<ndarray::ShapeError> for Error {
        fn from(e: ndarray::ShapeError) -> Self {
            Error::Shape(e)
        }
    }

    impl From<ort::Error> for Error {
        fn from(e: ort::Error) -> Self {
            Error::Ort(e)
        }
    }
}
