use crate::errors::SplitError;
use crate::splits::SplitPolicy;
use crate::types::Fraction;

/// Ratio configuration for train/test assignment.
#[derive(Clone, Copy, Debug)]
pub struct SplitRatios {
    /// Fraction assigned to train.
    pub train: Fraction,
    /// Fraction assigned to test.
    pub test: Fraction,
}

impl Default for SplitRatios {
    fn default() -> Self {
        Self {
            train: 0.8,
            test: 0.2,
        }
    }
}

impl SplitRatios {
    /// Build ratios from the caller-facing test fraction, inverting it into
    /// the train fraction used by the partition engine.
    pub fn from_test_ratio(test: Fraction) -> Result<Self, SplitError> {
        if !(0.0..=1.0).contains(&test) {
            return Err(SplitError::Configuration(
                "test ratio must be within [0, 1]".to_string(),
            ));
        }
        Ok(Self {
            train: 1.0 - test,
            test,
        })
    }

    /// Validate that ratios lie in `[0, 1]` and sum to `1.0` (within epsilon).
    pub fn normalized(self) -> Result<Self, SplitError> {
        if !(0.0..=1.0).contains(&self.train) || !(0.0..=1.0).contains(&self.test) {
            return Err(SplitError::Configuration(
                "split ratios must be within [0, 1]".to_string(),
            ));
        }
        if (self.train + self.test - 1.0).abs() > 1e-6 {
            return Err(SplitError::Configuration(
                "split ratios must sum to 1.0".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Top-level splitter configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct SplitConfig {
    /// Train/test ratios applied by the partition engine.
    pub ratios: SplitRatios,
    /// Partition policy to apply.
    pub policy: SplitPolicy,
    /// Optional RNG seed; `None` seeds from the OS for unrepeatable runs.
    pub seed: Option<u64>,
}
