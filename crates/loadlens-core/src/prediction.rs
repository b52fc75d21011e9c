//! Prediction request and result types.

use serde::{Deserialize, Serialize};

/// Number of features fed to the models: category code and method code.
pub const NUM_FEATURES: usize = 2;

/// Number of regression outputs: response time, error rate, throughput.
pub const NUM_METRICS: usize = 3;

/// A pair of user inputs for one prediction.
///
/// The presentation layer constructs this from raw text fields;
/// [`PredictionRequest::normalized`] applies the input rules: both fields
/// are trimmed, and the method is upper-cased. The method is deliberately
/// not validated against a verb list; an unseen value surfaces later as an
/// unknown-value error from the encoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// API category, e.g. "Users".
    pub category: String,
    /// HTTP method, e.g. "GET".
    pub method: String,
}

impl PredictionRequest {
    /// Create a request from raw inputs.
    pub fn new(category: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            method: method.into(),
        }
    }

    /// Apply input normalization: trim both fields, upper-case the method.
    pub fn normalized(&self) -> Self {
        Self {
            category: self.category.trim().to_string(),
            method: self.method.trim().to_uppercase(),
        }
    }

    /// Check whether either field is empty after trimming.
    pub fn has_empty_field(&self) -> bool {
        self.category.trim().is_empty() || self.method.trim().is_empty()
    }
}

/// Assemble the model input from the two encoder codes.
pub fn feature_vector(category_code: i64, method_code: i64) -> [f32; NUM_FEATURES] {
    [category_code as f32, method_code as f32]
}

/// A structured prediction result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted response time in milliseconds.
    pub response_time_ms: f64,

    /// Predicted error rate in percent.
    pub error_rate_pct: f64,

    /// Predicted throughput in requests per second.
    pub throughput_rps: f64,

    /// Decoded label of the recommended load-testing tool.
    pub recommended_tool: String,
}

impl Prediction {
    /// Response time formatted for display, e.g. `"120.50 ms"`.
    pub fn response_time_text(&self) -> String {
        format!("{:.2} ms", self.response_time_ms)
    }

    /// Error rate formatted for display, e.g. `"1.20 %"`.
    pub fn error_rate_text(&self) -> String {
        format!("{:.2} %", self.error_rate_pct)
    }

    /// Throughput formatted for display, e.g. `"850.00 Req/sec"`.
    pub fn throughput_text(&self) -> String {
        format!("{:.2} Req/sec", self.throughput_rps)
    }

    /// Check that every metric is a finite number.
    pub fn is_finite(&self) -> bool {
        self.response_time_ms.is_finite()
            && self.error_rate_pct.is_finite()
            && self.throughput_rps.is_finite()
    }
}
