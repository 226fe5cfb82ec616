//! Binary classification metrics over a 2x2 confusion matrix

use crate::error::{MlEvalError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// 2x2 table of prediction-vs-actual outcome counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionMatrix {
    /// Predicted positive, actually positive
    pub true_positives: usize,
    /// Predicted positive, actually negative
    pub false_positives: usize,
    /// Predicted negative, actually positive
    pub false_negatives: usize,
    /// Predicted negative, actually negative
    pub true_negatives: usize,
}

impl ConfusionMatrix {
    /// Create a matrix from raw counts
    pub fn new(tp: usize, fp: usize, fn_: usize, tn: usize) -> Self {
        Self {
            true_positives: tp,
            false_positives: fp,
            false_negatives: fn_,
            true_negatives: tn,
        }
    }

    /// Tally counts from parallel label arrays
    ///
    /// Values above 0.5 count as positive. Fails when the arrays differ
    /// in length.
    pub fn from_labels(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(MlEvalError::ValidationError(format!(
                "labels and predictions must have same length ({} vs {})",
                y_true.len(),
                y_pred.len()
            )));
        }

        let mut matrix = Self::new(0, 0, 0, 0);
        for (t, p) in y_true.iter().zip(y_pred.iter()) {
            match (*t > 0.5, *p > 0.5) {
                (true, true) => matrix.true_positives += 1,
                (false, true) => matrix.false_positives += 1,
                (true, false) => matrix.false_negatives += 1,
                (false, false) => matrix.true_negatives += 1,
            }
        }

        Ok(matrix)
    }

    /// Total number of counted outcomes
    pub fn total(&self) -> usize {
        self.true_positives + self.false_positives + self.false_negatives + self.true_negatives
    }

    /// Fraction of all predictions that are correct
    ///
    /// Undefined when the matrix is empty.
    pub fn accuracy(&self) -> Result<f64> {
        let total = self.total();
        if total == 0 {
            return Err(MlEvalError::UndefinedMetric {
                metric: "accuracy",
                reason: "confusion matrix is empty".to_string(),
            });
        }
        Ok((self.true_positives + self.true_negatives) as f64 / total as f64)
    }

    /// Fraction of positive predictions that are correct
    ///
    /// Undefined when there are no positive predictions.
    pub fn precision(&self) -> Result<f64> {
        let predicted_positives = self.true_positives + self.false_positives;
        if predicted_positives == 0 {
            return Err(MlEvalError::UndefinedMetric {
                metric: "precision",
                reason: "no positive predictions (tp + fp is zero)".to_string(),
            });
        }
        Ok(self.true_positives as f64 / predicted_positives as f64)
    }

    /// Fraction of actual positives that are correctly predicted
    ///
    /// Undefined when there are no actual positives.
    pub fn recall(&self) -> Result<f64> {
        let actual_positives = self.true_positives + self.false_negatives;
        if actual_positives == 0 {
            return Err(MlEvalError::UndefinedMetric {
                metric: "recall",
                reason: "no actual positives (tp + fn is zero)".to_string(),
            });
        }
        Ok(self.true_positives as f64 / actual_positives as f64)
    }

    /// Harmonic mean of precision and recall
    ///
    /// Undefined when either constituent is undefined or both are zero.
    pub fn f1_score(&self) -> Result<f64> {
        let p = self.precision()?;
        let r = self.recall()?;
        if p + r == 0.0 {
            return Err(MlEvalError::UndefinedMetric {
                metric: "f1_score",
                reason: "precision + recall is zero".to_string(),
            });
        }
        Ok(2.0 * p * r / (p + r))
    }

    /// Compute all four metrics, leaving undefined ones as `None`
    pub fn report(&self) -> ClassificationMetrics {
        ClassificationMetrics {
            accuracy: self.accuracy().ok(),
            precision: self.precision().ok(),
            recall: self.recall().ok(),
            f1_score: self.f1_score().ok(),
        }
    }
}

/// Metrics for binary classifier evaluation
///
/// A metric is `None` when its denominator summed to zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    /// Accuracy
    pub accuracy: Option<f64>,
    /// Precision
    pub precision: Option<f64>,
    /// Recall
    pub recall: Option<f64>,
    /// F1 score
    pub f1_score: Option<f64>,
}

impl ClassificationMetrics {
    /// Compute metrics from parallel label arrays
    pub fn compute(y_true: &Array1<f64>, y_pred: &Array1<f64>) -> Result<Self> {
        Ok(ConfusionMatrix::from_labels(y_true, y_pred)?.report())
    }
}

/// Accuracy from raw confusion counts: `(tp + tn) / (tp + fp + fn + tn)`
pub fn accuracy(tp: usize, fp: usize, fn_: usize, tn: usize) -> Result<f64> {
    ConfusionMatrix::new(tp, fp, fn_, tn).accuracy()
}

/// Precision from raw confusion counts: `tp / (tp + fp)`
pub fn precision(tp: usize, fp: usize, fn_: usize, tn: usize) -> Result<f64> {
    ConfusionMatrix::new(tp, fp, fn_, tn).precision()
}

/// Recall from raw confusion counts: `tp / (tp + fn)`
pub fn recall(tp: usize, fp: usize, fn_: usize, tn: usize) -> Result<f64> {
    ConfusionMatrix::new(tp, fp, fn_, tn).recall()
}

/// F1 score from raw confusion counts, the harmonic mean of precision
/// and recall
pub fn f1_score(tp: usize, fp: usize, fn_: usize, tn: usize) -> Result<f64> {
    ConfusionMatrix::new(tp, fp, fn_, tn).f1_score()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // Counts from the leukemia screening example: 70 sick correctly
    // flagged, 4930 false alarms, 13930 missed, 981070 correctly cleared.
    const TP: usize = 70;
    const FP: usize = 4930;
    const FN: usize = 13930;
    const TN: usize = 981070;

    #[test]
    fn test_accuracy() {
        let acc = accuracy(TP, FP, FN, TN).unwrap();
        assert!((acc - 0.98114).abs() < 1e-6);
    }

    #[test]
    fn test_precision() {
        let p = precision(TP, FP, FN, TN).unwrap();
        assert!((p - 0.014).abs() < 1e-6);
    }

    #[test]
    fn test_recall() {
        let r = recall(TP, FP, FN, TN).unwrap();
        assert!((r - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_f1_score() {
        let f1 = f1_score(TP, FP, FN, TN).unwrap();
        assert!((f1 - 0.00736).abs() < 1e-4);
    }

    #[test]
    fn test_f1_between_precision_and_recall() {
        let cases = [
            (70, 4930, 13930, 981070),
            (50, 10, 40, 900),
            (1, 1, 1, 1),
            (30, 5, 25, 0),
        ];

        for (tp, fp, fn_, tn) in cases {
            let p = precision(tp, fp, fn_, tn).unwrap();
            let r = recall(tp, fp, fn_, tn).unwrap();
            let f1 = f1_score(tp, fp, fn_, tn).unwrap();

            assert!(f1 >= p.min(r) - 1e-12, "f1 {} below min({}, {})", f1, p, r);
            assert!(f1 <= p.max(r) + 1e-12, "f1 {} above max({}, {})", f1, p, r);
        }
    }

    #[test]
    fn test_perfect_classifier() {
        let matrix = ConfusionMatrix::new(50, 0, 0, 50);
        assert!((matrix.accuracy().unwrap() - 1.0).abs() < 1e-12);
        assert!((matrix.precision().unwrap() - 1.0).abs() < 1e-12);
        assert!((matrix.recall().unwrap() - 1.0).abs() < 1e-12);
        assert!((matrix.f1_score().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_undefined_metrics_are_errors() {
        // empty matrix: everything undefined
        let empty = ConfusionMatrix::new(0, 0, 0, 0);
        assert!(matches!(
            empty.accuracy(),
            Err(MlEvalError::UndefinedMetric { metric: "accuracy", .. })
        ));
        assert!(empty.precision().is_err());
        assert!(empty.recall().is_err());
        assert!(empty.f1_score().is_err());

        // no positive predictions: precision undefined, accuracy fine
        let no_predicted = ConfusionMatrix::new(0, 0, 10, 90);
        assert!(no_predicted.accuracy().is_ok());
        assert!(no_predicted.precision().is_err());
        assert!(no_predicted.recall().is_ok());

        // precision and recall both zero: f1 undefined
        let all_wrong = ConfusionMatrix::new(0, 10, 10, 80);
        assert!((all_wrong.precision().unwrap()).abs() < 1e-12);
        assert!((all_wrong.recall().unwrap()).abs() < 1e-12);
        assert!(matches!(
            all_wrong.f1_score(),
            Err(MlEvalError::UndefinedMetric { metric: "f1_score", .. })
        ));
    }

    #[test]
    fn test_from_labels() {
        let y_true = array![1.0, 0.0, 1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let y_pred = array![1.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0];

        let matrix = ConfusionMatrix::from_labels(&y_true, &y_pred).unwrap();
        assert_eq!(matrix.true_positives, 3);
        assert_eq!(matrix.false_positives, 1);
        assert_eq!(matrix.false_negatives, 1);
        assert_eq!(matrix.true_negatives, 3);
        assert_eq!(matrix.total(), 8);
    }

    #[test]
    fn test_from_labels_rejects_length_mismatch() {
        let y_true = array![1.0, 0.0, 1.0];
        let y_pred = array![1.0, 0.0];
        assert!(ConfusionMatrix::from_labels(&y_true, &y_pred).is_err());
    }

    #[test]
    fn test_report_partial() {
        let matrix = ConfusionMatrix::new(0, 0, 10, 90);
        let report = matrix.report();

        assert!((report.accuracy.unwrap() - 0.9).abs() < 1e-12);
        assert!(report.precision.is_none());
        assert_eq!(report.recall, Some(0.0));
        assert!(report.f1_score.is_none());
    }

    #[test]
    fn test_compute_from_arrays() {
        let y_true = array![1.0, 1.0, 0.0, 0.0];
        let y_pred = array![1.0, 0.0, 1.0, 0.0];

        let metrics = ClassificationMetrics::compute(&y_true, &y_pred).unwrap();
        assert!((metrics.accuracy.unwrap() - 0.5).abs() < 1e-12);
        assert!((metrics.precision.unwrap() - 0.5).abs() < 1e-12);
        assert!((metrics.recall.unwrap() - 0.5).abs() < 1e-12);
        assert!((metrics.f1_score.unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_metrics_serialize_round_trip() {
        let matrix = ConfusionMatrix::new(70, 4930, 13930, 981070);
        let json = serde_json::to_string(&matrix).unwrap();
        let back: ConfusionMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(matrix, back);
    }
}
