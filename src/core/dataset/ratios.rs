use serde::Serialize;

use crate::error::{SplitError, SplitResult};

/// Train and test fractions. Validation always receives the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SplitRatios {
    train_pct: f64,
    test_pct: f64,
}

impl SplitRatios {
    /// Each ratio must lie in (0, 1) and together they must stay below 1.0.
    pub fn new(train_pct: f64, test_pct: f64) -> SplitResult<Self> {
        let in_range = |pct: f64| pct.is_finite() && pct > 0.0 && pct < 1.0;

        if !in_range(train_pct) || !in_range(test_pct) || train_pct + test_pct >= 1.0 {
            return Err(SplitError::InvalidRatio {
                train_pct,
                test_pct,
            });
        }

        Ok(Self {
            train_pct,
            test_pct,
        })
    }

    pub fn train_pct(&self) -> f64 {
        self.train_pct
    }

    pub fn test_pct(&self) -> f64 {
        self.test_pct
    }

    pub fn val_pct(&self) -> f64 {
        1.0 - self.train_pct - self.test_pct
    }
}

/// Number of items per split. Always sums to the item count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SplitCounts {
    pub train: usize,
    pub test: usize,
    pub val: usize,
}

impl SplitCounts {
    /// Train and test are floored; the rounding remainder lands in validation.
    pub fn from_ratios(total: usize, ratios: &SplitRatios) -> Self {
        let train = ((total as f64) * ratios.train_pct).floor() as usize;
        let train = train.min(total);
        let test = ((total as f64) * ratios.test_pct).floor() as usize;
        let test = test.min(total - train);

        Self {
            train,
            test,
            val: total - train - test,
        }
    }

    pub fn total(&self) -> usize {
        self.train + self.test + self.val
    }
}
