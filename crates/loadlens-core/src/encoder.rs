//! Categorical label encoding.
//!
//! A [`LabelEncoder`] is fitted once (at training/seed time) over a fixed
//! vocabulary and is read-only for the rest of the process lifetime. It maps
//! labels to dense integer codes in sorted-vocabulary order and back again.

use crate::error::{EncodeError, EncodeResult};
use serde::{Deserialize, Serialize};

/// A fitted mapping between categorical string labels and integer codes.
///
/// Codes are assigned by sorting the deduplicated vocabulary, so fitting the
/// same set of labels always produces the same mapping regardless of input
/// order. Vocabularies in this system are tiny (a handful of HTTP verbs or
/// API categories), so lookups scan the class list directly.
///
/// # Example
///
/// ```
/// use loadlens_core::LabelEncoder;
///
/// let encoder = LabelEncoder::fit(["GET", "POST", "DELETE", "PUT"]);
/// let code = encoder.transform("GET").unwrap();
/// assert_eq!(encoder.inverse_transform(code).unwrap(), "GET");
/// assert!(encoder.transform("PATCH").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Fitted vocabulary, sorted. The code of a label is its index here.
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Fit an encoder over the given labels.
    ///
    /// Duplicates are removed and the vocabulary is sorted before codes are
    /// assigned.
    pub fn fit<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut classes: Vec<String> = labels.into_iter().map(Into::into).collect();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    /// Encode a label to its integer code.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::UnknownLabel`] if the label was not part of
    /// the fitted vocabulary. Matching is exact; callers are responsible for
    /// any case normalization before encoding.
    pub fn transform(&self, label: &str) -> EncodeResult<i64> {
        self.classes
            .iter()
            .position(|c| c == label)
            .map(|i| i as i64)
            .ok_or_else(|| EncodeError::unknown(label))
    }

    /// Decode an integer code back to its label.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::CodeOutOfRange`] if the code does not map to
    /// any fitted label.
    pub fn inverse_transform(&self, code: i64) -> EncodeResult<&str> {
        if code < 0 || code as usize >= self.classes.len() {
            return Err(EncodeError::CodeOutOfRange {
                code,
                vocab_size: self.classes.len(),
            });
        }
        Ok(&self.classes[code as usize])
    }

    /// The fitted vocabulary in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of labels in the vocabulary.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Check whether a label is part of the vocabulary.
    pub fn contains(&self, label: &str) -> bool {
        self.classes.iter().any(|c| c == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_sorts_and_dedups() {
        let encoder = LabelEncoder::fit(["POST", "GET", "POST", "DELETE"]);
        assert_eq!(encoder.classes(), ["DELETE", "GET", "POST"]);
        assert_eq!(encoder.len(), 3);
    }

    #[test]
    fn test_transform_roundtrip() {
        let encoder = LabelEncoder::fit(["Users", "Products", "Orders", "Auth"]);
        for label in ["Users", "Products", "Orders", "Auth"] {
            let code = encoder.transform(label).unwrap();
            assert_eq!(encoder.inverse_transform(code).unwrap(), label);
        }
    }

    #[test]
    fn test_fit_order_independent() {
        let a = LabelEncoder::fit(["GET", "POST", "PUT"]);
        let b = LabelEncoder::fit(["PUT", "GET", "POST"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_label() {
        let encoder = LabelEncoder::fit(["GET", "POST"]);
        let err = encoder.transform("PATCH").unwrap_err();
        assert_eq!(err, EncodeError::unknown("PATCH"));
    }

    #[test]
    fn test_transform_is_case_sensitive() {
        let encoder = LabelEncoder::fit(["GET"]);
        assert!(encoder.transform("get").is_err());
    }

    #[test]
    fn test_code_out_of_range() {
        let encoder = LabelEncoder::fit(["JMeter", "K6"]);
        assert!(matches!(
            encoder.inverse_transform(2),
            Err(EncodeError::CodeOutOfRange { code: 2, vocab_size: 2 })
        ));
        assert!(matches!(
            encoder.inverse_transform(-1),
            Err(EncodeError::CodeOutOfRange { code: -1, .. })
        ));
    }

    #[test]
    fn test_contains() {
        let encoder = LabelEncoder::fit(["K6", "JMeter"]);
        assert!(encoder.contains("K6"));
        assert!(!encoder.contains("Gatling"));
    }
}
