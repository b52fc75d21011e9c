//! The load-once predictor.

use crate::error::{PredictError, PredictResult};
use loadlens_artifacts::{
    ArtifactBundle, ArtifactReader, BincodeSerializer, CompressionType, JsonSerializer,
};
use loadlens_core::prediction::feature_vector;
use loadlens_core::{EncodeError, Prediction, PredictionRequest};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Prediction service over an immutable artifact bundle.
///
/// The bundle is loaded exactly once and shared behind an [`Arc`]; every
/// prediction is a pure read. There is no reload, retry, or versioned swap
/// during the process lifetime.
#[derive(Debug, Clone)]
pub struct Predictor {
    bundle: Arc<ArtifactBundle>,
}

impl Predictor {
    /// Wrap an already-loaded bundle, validating it first.
    pub fn from_bundle(bundle: ArtifactBundle) -> PredictResult<Self> {
        bundle.validate()?;
        Ok(Self {
            bundle: Arc::new(bundle),
        })
    }

    /// Load a bundle from disk.
    ///
    /// The serializer is chosen from the file name: a `.json` suffix selects
    /// the JSON format, anything else the binary format; a trailing `.gz`
    /// enables gzip on top of either.
    pub fn load(path: impl AsRef<Path>) -> PredictResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading prediction artifacts");

        let gzip = path.extension().is_some_and(|ext| ext == "gz");
        let compression = if gzip {
            CompressionType::Gzip
        } else {
            CompressionType::None
        };

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        let logical = name.strip_suffix(".gz").unwrap_or(name);

        let bundle = if logical.ends_with(".json") {
            ArtifactReader::new(JsonSerializer::new())
                .with_compression(compression)
                .read_from_file(path)?
        } else {
            ArtifactReader::new(BincodeSerializer::new())
                .with_compression(compression)
                .read_from_file(path)?
        };

        Self::from_bundle(bundle)
    }

    /// The loaded artifact bundle.
    pub fn bundle(&self) -> &ArtifactBundle {
        &self.bundle
    }

    /// Predict performance metrics and a recommended tool for an endpoint.
    ///
    /// Inputs are normalized first: both are trimmed and the method is
    /// upper-cased. The method is not checked against a verb list; an
    /// arbitrary upper-cased string simply fails encoding as an unseen
    /// value.
    ///
    /// # Errors
    ///
    /// - [`PredictError::EmptyInput`] if either input trims to empty.
    /// - [`PredictError::UnknownValue`] if the category or method is not in
    ///   the trained vocabulary.
    /// - [`PredictError::Model`] if model invocation or tool decoding fails,
    ///   which indicates a broken bundle rather than bad input.
    pub fn predict(&self, category: &str, method: &str) -> PredictResult<Prediction> {
        let request = PredictionRequest::new(category, method).normalized();
        if request.category.is_empty() {
            return Err(PredictError::empty("category"));
        }
        if request.method.is_empty() {
            return Err(PredictError::empty("method"));
        }

        let category_code = self
            .bundle
            .category_encoder
            .transform(&request.category)
            .map_err(|e| Self::encode_error("category", &request.category, e))?;
        let method_code = self
            .bundle
            .method_encoder
            .transform(&request.method)
            .map_err(|e| Self::encode_error("method", &request.method, e))?;

        let features = feature_vector(category_code, method_code);
        debug!(
            category = %request.category,
            method = %request.method,
            ?features,
            "Running inference"
        );

        let metrics = self
            .bundle
            .regressor
            .predict(&features)
            .map_err(|e| PredictError::model(e.to_string()))?;

        let tool_code = self
            .bundle
            .classifier
            .predict(&features)
            .map_err(|e| PredictError::model(e.to_string()))?;
        let recommended_tool = self
            .bundle
            .tool_encoder
            .inverse_transform(tool_code)
            .map_err(|e| PredictError::model(e.to_string()))?
            .to_string();

        let prediction = Prediction {
            response_time_ms: f64::from(metrics[0]),
            error_rate_pct: f64::from(metrics[1]),
            throughput_rps: f64::from(metrics[2]),
            recommended_tool,
        };

        debug!(
            response_time_ms = prediction.response_time_ms,
            error_rate_pct = prediction.error_rate_pct,
            throughput_rps = prediction.throughput_rps,
            tool = %prediction.recommended_tool,
            "Prediction complete"
        );

        Ok(prediction)
    }

    fn encode_error(field: &'static str, value: &str, err: EncodeError) -> PredictError {
        match err {
            EncodeError::UnknownLabel(_) => PredictError::unknown(field, value),
            other => PredictError::model(other.to_string()),
        }
    }
}
