//! Runtime configuration.
//!
//! Everything tunable lives here: verdict threshold, lexical token lists,
//! the trusted-domain set and the scoring-model path. Loadable from a
//! TOML file; every field has a default so a partial file works.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::features::Lexicon;
use crate::Error;

/// Default verdict threshold. Deployments have also run this at 0.85;
/// the lower value keeps recall on look-alike domains.
const DEFAULT_THRESHOLD: f64 = 0.75;

/// Classifier configuration, loaded once at startup and immutable after.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    /// Probability above which a URL is labelled phishing.
    pub threshold: f64,
    /// Token lists for the lexical features.
    pub lexicon: Lexicon,
    /// Apex domains that bypass scoring. Empty disables the fast path.
    pub trusted_domains: Vec<String>,
    /// Path to the ONNX scoring model. Consumed by the CLI; library
    /// callers may supply any scorer.
    pub model_path: Option<PathBuf>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            lexicon: Lexicon::default(),
            trusted_domains: Vec::new(),
            model_path: None,
        }
    }
}

impl PolicyConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let mut config: PolicyConfig = toml::from_str(&data)?;
        config.lexicon.canonicalize();

        tracing::info!("loaded config from {}", path.display());

        Ok(config)
    }
}
