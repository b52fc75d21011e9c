//! The artifact bundle: every fitted object the predictor needs.

use crate::{ArtifactError, Result};
use loadlens_core::prediction::{NUM_FEATURES, NUM_METRICS};
use loadlens_core::LabelEncoder;
use loadlens_model::{LinearClassifier, LinearRegressor};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Current bundle format version.
pub const FORMAT_VERSION: u32 = 1;

/// Descriptive metadata carried alongside the fitted objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BundleMetadata {
    /// Human-readable bundle name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Additional key-value metadata.
    pub custom: HashMap<String, String>,
}

/// The five persisted artifacts, loaded once at startup and immutable for
/// the process lifetime.
///
/// The bundle is self-consistent by construction: [`ArtifactBundle::validate`]
/// checks that both models accept the two-feature input, that the regressor
/// emits the three performance metrics, and that the classifier's class
/// count matches the tool encoder's vocabulary. Readers run this check after
/// deserialization so an incompatible bundle is rejected at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactBundle {
    /// Format version for compatibility checks.
    pub format_version: u32,

    /// Descriptive metadata.
    pub metadata: BundleMetadata,

    /// Regression model producing (response time, error rate, throughput).
    pub regressor: LinearRegressor,

    /// Classification model producing a tool class code.
    pub classifier: LinearClassifier,

    /// Encoder for the API category input.
    pub category_encoder: LabelEncoder,

    /// Encoder for the HTTP method input.
    pub method_encoder: LabelEncoder,

    /// Encoder decoding classifier codes to tool names.
    pub tool_encoder: LabelEncoder,
}

impl ArtifactBundle {
    /// Assemble a bundle from fitted objects.
    pub fn new(
        metadata: BundleMetadata,
        regressor: LinearRegressor,
        classifier: LinearClassifier,
        category_encoder: LabelEncoder,
        method_encoder: LabelEncoder,
        tool_encoder: LabelEncoder,
    ) -> Result<Self> {
        let bundle = Self {
            format_version: FORMAT_VERSION,
            metadata,
            regressor,
            classifier,
            category_encoder,
            method_encoder,
            tool_encoder,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Check the bundle for dimensional consistency.
    pub fn validate(&self) -> Result<()> {
        self.regressor
            .validate()
            .map_err(|e| ArtifactError::invalid(format!("regressor: {e}")))?;
        self.classifier
            .validate()
            .map_err(|e| ArtifactError::invalid(format!("classifier: {e}")))?;

        if self.regressor.input_dim() != NUM_FEATURES {
            return Err(ArtifactError::invalid(format!(
                "regressor expects {} features, pipeline produces {}",
                self.regressor.input_dim(),
                NUM_FEATURES
            )));
        }
        if self.classifier.input_dim() != NUM_FEATURES {
            return Err(ArtifactError::invalid(format!(
                "classifier expects {} features, pipeline produces {}",
                self.classifier.input_dim(),
                NUM_FEATURES
            )));
        }
        if self.regressor.output_dim() != NUM_METRICS {
            return Err(ArtifactError::invalid(format!(
                "regressor emits {} outputs, expected {} metrics",
                self.regressor.output_dim(),
                NUM_METRICS
            )));
        }
        if self.classifier.num_classes() != self.tool_encoder.len() {
            return Err(ArtifactError::invalid(format!(
                "classifier scores {} classes but tool encoder has {} labels",
                self.classifier.num_classes(),
                self.tool_encoder.len()
            )));
        }
        for (name, encoder) in [
            ("category", &self.category_encoder),
            ("method", &self.method_encoder),
            ("tool", &self.tool_encoder),
        ] {
            if encoder.is_empty() {
                return Err(ArtifactError::invalid(format!(
                    "{name} encoder has an empty vocabulary"
                )));
            }
        }
        Ok(())
    }

    /// Build the sample bundle shipped with the `seed` command.
    ///
    /// Weights are hand-specified rather than trained. They are chosen so
    /// that the ("Users", "GET") endpoint predicts 120.50 ms response time,
    /// 1.20 % error rate, 850.00 Req/sec throughput, and a K6
    /// recommendation, while low-throughput write endpoints such as
    /// ("Auth", "POST") come out as JMeter.
    pub fn sample() -> Self {
        let category_encoder = LabelEncoder::fit(["Users", "Products", "Orders", "Auth"]);
        let method_encoder = LabelEncoder::fit(["GET", "POST", "PUT", "DELETE"]);
        let tool_encoder = LabelEncoder::fit(["K6", "JMeter"]);

        // Rows: response time (ms), error rate (%), throughput (Req/sec).
        let regressor = LinearRegressor::new(
            NUM_FEATURES,
            NUM_METRICS,
            vec![
                10.0, 20.5, //
                0.4, -0.2, //
                -50.0, 100.0,
            ],
            vec![70.0, 0.2, 900.0],
        )
        .expect("sample regressor shapes are static");

        // Class order follows the tool encoder: JMeter = 0, K6 = 1.
        let classifier = LinearClassifier::new(
            NUM_FEATURES,
            tool_encoder.len(),
            vec![
                1.0, 2.0, //
                2.0, 1.0,
            ],
            vec![0.0, 0.5],
        )
        .expect("sample classifier shapes are static");

        let mut metadata = BundleMetadata {
            name: "loadlens-sample".to_string(),
            description: "Hand-seeded demonstration bundle".to_string(),
            custom: HashMap::new(),
        };
        metadata
            .custom
            .insert("seeded".to_string(), "true".to_string());

        Self::new(
            metadata,
            regressor,
            classifier,
            category_encoder,
            method_encoder,
            tool_encoder,
        )
        .expect("sample bundle is consistent by construction")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_bundle_is_valid() {
        let bundle = ArtifactBundle::sample();
        assert!(bundle.validate().is_ok());
        assert_eq!(bundle.format_version, FORMAT_VERSION);
        assert_eq!(bundle.tool_encoder.classes(), ["JMeter", "K6"]);
    }

    #[test]
    fn test_validate_rejects_class_count_mismatch() {
        let mut bundle = ArtifactBundle::sample();
        // Tool encoder grows a label the classifier cannot score.
        bundle.tool_encoder = LabelEncoder::fit(["K6", "JMeter", "Gatling"]);
        let err = bundle.validate().unwrap_err();
        assert!(matches!(err, ArtifactError::Invalid(_)));
        assert!(err.to_string().contains("tool encoder has 3 labels"));
    }

    #[test]
    fn test_validate_rejects_wrong_regressor_width() {
        let mut bundle = ArtifactBundle::sample();
        bundle.regressor =
            LinearRegressor::new(3, 3, vec![0.0; 9], vec![0.0; 3]).unwrap();
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_encoder() {
        let mut bundle = ArtifactBundle::sample();
        bundle.category_encoder = LabelEncoder::fit(Vec::<String>::new());
        let err = bundle.validate().unwrap_err();
        assert!(err.to_string().contains("category encoder"));
    }

    #[test]
    fn test_sample_vocabularies() {
        let bundle = ArtifactBundle::sample();
        assert!(bundle.category_encoder.contains("Users"));
        assert!(bundle.method_encoder.contains("GET"));
        assert!(!bundle.method_encoder.contains("PATCH"));
    }
}
