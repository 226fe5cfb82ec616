//! Random dataset partitioning
//!
//! Provides plain and paired train/test splitting:
//! - [`split_data`] - partition one sequence at a random cut
//! - [`train_test_split`] - partition parallel input/label sequences consistently
//! - [`RandomSplitter`] - the same operations with an optional fixed seed

use crate::error::{MlEvalError, Result};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Output of a paired train/test split
///
/// Element `i` of the original inputs and labels lands in the same half,
/// so `x_train[j]` and `y_train[j]` were paired before the split.
#[derive(Debug, Clone)]
pub struct PairedSplit<X, Y> {
    pub x_train: Vec<X>,
    pub x_test: Vec<X>,
    pub y_train: Vec<Y>,
    pub y_test: Vec<Y>,
}

/// Random splitter with optional fixed seed
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RandomSplitter {
    random_state: Option<u64>,
}

impl RandomSplitter {
    /// Create a new splitter seeded from entropy
    pub fn new() -> Self {
        Self { random_state: None }
    }

    /// Set random state for reproducibility
    pub fn with_random_state(mut self, seed: u64) -> Self {
        self.random_state = Some(seed);
        self
    }

    /// Randomly partition `data` so the first half holds `floor(len * p)`
    /// elements and the second the rest
    ///
    /// Together the two halves hold every input element exactly once.
    pub fn split<T>(&self, data: Vec<T>, p: f64) -> Result<(Vec<T>, Vec<T>)> {
        validate_fraction(p)?;

        let n = data.len();
        let cut = (n as f64 * p).floor() as usize;

        let mut data = data;
        data.shuffle(&mut self.rng());
        let rest = data.split_off(cut);

        tracing::debug!(n, first = data.len(), second = rest.len(), "random split");
        Ok((data, rest))
    }

    /// Partition parallel `xs`/`ys` sequences with one shared random index
    /// permutation, routing fraction `test_pct` to the test halves
    ///
    /// Fails when the two sequences differ in length.
    pub fn split_paired<X, Y>(
        &self,
        xs: Vec<X>,
        ys: Vec<Y>,
        test_pct: f64,
    ) -> Result<PairedSplit<X, Y>> {
        if xs.len() != ys.len() {
            return Err(MlEvalError::ValidationError(format!(
                "inputs and labels must have same length ({} vs {})",
                xs.len(),
                ys.len()
            )));
        }
        validate_fraction(test_pct)?;

        let pairs: Vec<(X, Y)> = xs.into_iter().zip(ys).collect();
        let (train, test) = self.split(pairs, 1.0 - test_pct)?;

        let (x_train, y_train) = train.into_iter().unzip();
        let (x_test, y_test) = test.into_iter().unzip();

        Ok(PairedSplit {
            x_train,
            x_test,
            y_train,
            y_test,
        })
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.random_state {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

/// Randomly partition `data` into fractions `p` and `1 - p`
///
/// The first output holds exactly `floor(len * p)` elements.
pub fn split_data<T>(data: Vec<T>, p: f64) -> Result<(Vec<T>, Vec<T>)> {
    RandomSplitter::new().split(data, p)
}

/// Split parallel input/label sequences into train and test halves
///
/// Returns `(x_train, x_test, y_train, y_test)` with fraction `test_pct`
/// routed to the test halves and input/label pairing preserved.
#[allow(clippy::type_complexity)]
pub fn train_test_split<X, Y>(
    xs: Vec<X>,
    ys: Vec<Y>,
    test_pct: f64,
) -> Result<(Vec<X>, Vec<X>, Vec<Y>, Vec<Y>)> {
    let split = RandomSplitter::new().split_paired(xs, ys, test_pct)?;
    Ok((split.x_train, split.x_test, split.y_train, split.y_test))
}

fn validate_fraction(p: f64) -> Result<()> {
    if !p.is_finite() || !(0.0..=1.0).contains(&p) {
        return Err(MlEvalError::ValidationError(format!(
            "fraction must be in [0, 1], got {}",
            p
        )));
    }
    Ok(())
}
