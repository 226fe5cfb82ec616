//! Model evaluation metrics
//!
//! Currently covers binary classification via the 2x2 confusion matrix:
//! accuracy, precision, recall, and F1 score.

pub mod classification;

pub use classification::{
    accuracy, f1_score, precision, recall, ClassificationMetrics, ConfusionMatrix,
};
