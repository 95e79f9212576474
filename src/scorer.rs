//! Probability scoring backends.
//!
//! The policy layer only sees the [`Scorer`] trait; the default backend
//! wraps an ONNX inference session over a classifier trained offline.

use std::path::Path;
use std::sync::Mutex;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Tensor;

use crate::features::FeatureVector;
use crate::Error;

/// Produces a phishing probability in \[0, 1\] for a feature vector.
///
/// Implementations must be deterministic for a given vector. Failures are
/// terminal for the current call; this layer never retries.
pub trait Scorer: Send + Sync {
    /// Estimate the probability that the described URL is phishing.
    fn score(&self, features: &FeatureVector) -> Result<f64, Error>;
}

/// ONNX-backed scorer.
///
/// Expects the layout produced by a standard sklearn-to-ONNX export: a
/// `(1, 17)` f32 input named `float_input` and a `probabilities` output
/// whose second column is the positive (phishing) class. The feature
/// order is [`FeatureVector::FIELD_NAMES`]; changing the feature set
/// means retraining and re-exporting the model.
pub struct OnnxScorer {
    // Session::run needs &mut; the mutex lets scoring take &self.
    session: Mutex<Session>,
}

impl OnnxScorer {
    /// Load the model from a file produced by the training pipeline.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let session = Session::builder()?
            .with_optimization_level(GraphOptimizationLevel::Level3)?
            .commit_from_file(path)?;

        tracing::info!("loaded scoring model from {}", path.display());

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Scorer for OnnxScorer {
    fn score(&self, features: &FeatureVector) -> Result<f64, Error> {
        let values = features.to_array();
        let input = Array2::from_shape_vec((1, FeatureVector::FIELD_COUNT), values.to_vec())?;
        let tensor = Tensor::from_array(input)?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| Error::Scorer("session mutex poisoned".to_string()))?;

        let outputs = session.run(ort::inputs!["float_input" => tensor])?;
        let probs_arr = outputs["probabilities"].try_extract_array::<f32>()?;
        let probs: Vec<f32> = probs_arr.iter().cloned().collect();

        // Binary classifiers emit [benign, phishing]; a single-output
        // model is taken as the phishing probability directly.
        let p = match probs.as_slice() {
            [] => return Err(Error::Scorer("model produced no probabilities".to_string())),
            [only] => *only,
            [_, positive, ..] => *positive,
        };

        Ok((p as f64).clamp(0.0, 1.0))
    }
}
