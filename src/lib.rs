//! mleval - dataset splitting and binary classification metrics
//!
//! This crate provides the evaluation utilities used when introducing
//! foundational ML concepts:
//! - Random dataset partitioning, plain and paired
//! - Confusion-matrix metrics: accuracy, precision, recall, F1
//!
//! # Modules
//!
//! - [`split`] - Random and paired train/test splitting
//! - [`metrics`] - Binary classification metrics
//!
//! # Example
//!
//! ```
//! use mleval::prelude::*;
//!
//! let xs: Vec<i32> = (0..100).collect();
//! let ys: Vec<i32> = xs.iter().map(|x| x % 2).collect();
//! let (x_train, x_test, _, _) = train_test_split(xs, ys, 0.25)?;
//! assert_eq!(x_train.len(), 75);
//! assert_eq!(x_test.len(), 25);
//!
//! let acc = accuracy(70, 4930, 13930, 981070)?;
//! assert!((acc - 0.98114).abs() < 1e-6);
//! # Ok::<(), MlEvalError>(())
//! ```

// Core error handling
pub mod error;

// Dataset partitioning
pub mod split;

// Evaluation metrics
pub mod metrics;

pub use error::{MlEvalError, Result};

/// Re-export commonly used types
pub mod prelude {
    // Error handling
    pub use crate::error::{MlEvalError, Result};

    // Splitting
    pub use crate::split::{split_data, train_test_split, PairedSplit, RandomSplitter};

    // Classification metrics
    pub use crate::metrics::classification::{
        accuracy, f1_score, precision, recall, ClassificationMetrics, ConfusionMatrix,
    };
}
