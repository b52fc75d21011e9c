//! Linear model implementations.
//!
//! Weights are stored row-major: `weight[row * input_dim + col]`, one row
//! per output (regressor) or per class (classifier).

use crate::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};

/// `y = W x + b` over a flat row-major weight matrix.
fn linear(weight: &[f32], bias: &[f32], input: &[f32], rows: usize) -> Vec<f32> {
    let cols = input.len();
    let mut out = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut acc = bias[row];
        for col in 0..cols {
            acc += weight[row * cols + col] * input[col];
        }
        out.push(acc);
    }
    out
}

fn check_shapes(
    weight_len: usize,
    bias_len: usize,
    rows: usize,
    cols: usize,
) -> ModelResult<()> {
    if rows == 0 {
        return Err(ModelError::ZeroDimension("output rows"));
    }
    if cols == 0 {
        return Err(ModelError::ZeroDimension("input_dim"));
    }
    if weight_len != rows * cols {
        return Err(ModelError::ShapeMismatch {
            name: "weight",
            len: weight_len,
            expected: rows * cols,
            rows,
            cols,
        });
    }
    if bias_len != rows {
        return Err(ModelError::ShapeMismatch {
            name: "bias",
            len: bias_len,
            expected: rows,
            rows,
            cols: 1,
        });
    }
    Ok(())
}

/// A fitted multi-output linear regression model.
///
/// # Example
///
/// ```
/// use loadlens_model::LinearRegressor;
///
/// // One output over two features: y = 2*x0 + 3*x1 + 1
/// let model = LinearRegressor::new(2, 1, vec![2.0, 3.0], vec![1.0]).unwrap();
/// let y = model.predict(&[1.0, 1.0]).unwrap();
/// assert_eq!(y, vec![6.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearRegressor {
    input_dim: usize,
    output_dim: usize,
    /// Row-major `[output_dim, input_dim]` weights.
    weight: Vec<f32>,
    /// Per-output bias.
    bias: Vec<f32>,
}

impl LinearRegressor {
    /// Build a regressor from flat parameter arrays, validating shapes.
    pub fn new(
        input_dim: usize,
        output_dim: usize,
        weight: Vec<f32>,
        bias: Vec<f32>,
    ) -> ModelResult<Self> {
        check_shapes(weight.len(), bias.len(), output_dim, input_dim)?;
        Ok(Self {
            input_dim,
            output_dim,
            weight,
            bias,
        })
    }

    /// Number of input features.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Number of regression outputs.
    pub fn output_dim(&self) -> usize {
        self.output_dim
    }

    /// Predict the output vector for a single feature vector.
    pub fn predict(&self, input: &[f32]) -> ModelResult<Vec<f32>> {
        if input.len() != self.input_dim {
            return Err(ModelError::InputDimMismatch {
                got: input.len(),
                expected: self.input_dim,
            });
        }
        Ok(linear(&self.weight, &self.bias, input, self.output_dim))
    }

    /// Shape validation for deserialized instances.
    pub fn validate(&self) -> ModelResult<()> {
        check_shapes(
            self.weight.len(),
            self.bias.len(),
            self.output_dim,
            self.input_dim,
        )
    }
}

/// A fitted linear classifier.
///
/// Each class has a linear scoring head; prediction returns the code of the
/// highest-scoring class (ties resolve to the lowest code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearClassifier {
    input_dim: usize,
    num_classes: usize,
    /// Row-major `[num_classes, input_dim]` weights.
    weight: Vec<f32>,
    /// Per-class bias.
    bias: Vec<f32>,
}

impl LinearClassifier {
    /// Build a classifier from flat parameter arrays, validating shapes.
    pub fn new(
        input_dim: usize,
        num_classes: usize,
        weight: Vec<f32>,
        bias: Vec<f32>,
    ) -> ModelResult<Self> {
        check_shapes(weight.len(), bias.len(), num_classes, input_dim)?;
        Ok(Self {
            input_dim,
            num_classes,
            weight,
            bias,
        })
    }

    /// Number of input features.
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    /// Number of classes this model scores.
    pub fn num_classes(&self) -> usize {
        self.num_classes
    }

    /// Per-class scores for a single feature vector.
    pub fn scores(&self, input: &[f32]) -> ModelResult<Vec<f32>> {
        if input.len() != self.input_dim {
            return Err(ModelError::InputDimMismatch {
                got: input.len(),
                expected: self.input_dim,
            });
        }
        Ok(linear(&self.weight, &self.bias, input, self.num_classes))
    }

    /// Predict the class code for a single feature vector.
    pub fn predict(&self, input: &[f32]) -> ModelResult<i64> {
        let scores = self.scores(input)?;
        let mut best = 0usize;
        for (i, &score) in scores.iter().enumerate() {
            if score > scores[best] {
                best = i;
            }
        }
        Ok(best as i64)
    }

    /// Shape validation for deserialized instances.
    pub fn validate(&self) -> ModelResult<()> {
        check_shapes(
            self.weight.len(),
            self.bias.len(),
            self.num_classes,
            self.input_dim,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regressor_multi_output() {
        // Three metrics over [category_code, method_code].
        let model = LinearRegressor::new(
            2,
            3,
            vec![
                10.0, 20.5, // response time
                0.4, -0.2, // error rate
                -50.0, 100.0, // throughput
            ],
            vec![70.0, 0.2, 900.0],
        )
        .unwrap();

        let y = model.predict(&[3.0, 1.0]).unwrap();
        assert_eq!(y.len(), 3);
        assert!((y[0] - 120.5).abs() < 1e-5);
        assert!((y[1] - 1.2).abs() < 1e-5);
        assert!((y[2] - 850.0).abs() < 1e-5);
    }

    #[test]
    fn test_regressor_shape_validation() {
        let err = LinearRegressor::new(2, 3, vec![0.0; 5], vec![0.0; 3]).unwrap_err();
        assert!(matches!(
            err,
            ModelError::ShapeMismatch {
                name: "weight",
                len: 5,
                expected: 6,
                ..
            }
        ));

        let err = LinearRegressor::new(2, 3, vec![0.0; 6], vec![0.0; 2]).unwrap_err();
        assert!(matches!(err, ModelError::ShapeMismatch { name: "bias", .. }));
    }

    #[test]
    fn test_regressor_input_dim_mismatch() {
        let model = LinearRegressor::new(2, 1, vec![1.0, 1.0], vec![0.0]).unwrap();
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(err, ModelError::InputDimMismatch { got: 3, expected: 2 });
    }

    #[test]
    fn test_zero_dimension_rejected() {
        let err = LinearRegressor::new(0, 1, vec![], vec![0.0]).unwrap_err();
        assert_eq!(err, ModelError::ZeroDimension("input_dim"));

        let err = LinearClassifier::new(2, 0, vec![], vec![]).unwrap_err();
        assert_eq!(err, ModelError::ZeroDimension("output rows"));
    }

    #[test]
    fn test_classifier_argmax() {
        let model = LinearClassifier::new(
            2,
            2,
            vec![
                1.0, 2.0, // class 0
                2.0, 1.0, // class 1
            ],
            vec![0.0, 0.5],
        )
        .unwrap();

        // [3, 1]: class 0 scores 5.0, class 1 scores 7.5.
        assert_eq!(model.predict(&[3.0, 1.0]).unwrap(), 1);
        // [0, 2]: class 0 scores 4.0, class 1 scores 2.5.
        assert_eq!(model.predict(&[0.0, 2.0]).unwrap(), 0);
    }

    #[test]
    fn test_classifier_tie_takes_lowest_code() {
        let model =
            LinearClassifier::new(1, 2, vec![1.0, 1.0], vec![0.0, 0.0]).unwrap();
        assert_eq!(model.predict(&[1.0]).unwrap(), 0);
    }

    #[test]
    fn test_validate_after_deserialize() {
        let model = LinearRegressor::new(2, 1, vec![1.0, 1.0], vec![0.0]).unwrap();
        assert!(model.validate().is_ok());
    }
}
