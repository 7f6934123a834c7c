use crate::error::{CooccurError, Result};

pub const DEFAULT_SIGMA: usize = 4;
pub const DEFAULT_MIN_SET_SIZE: usize = 3;
/// Largest subset size the pruner looks up. Measured runs put 3 within ~10% of the best time.
pub const DEFAULT_MAX_COMBO_SIZE: usize = 3;

/// Thresholds and tuning knobs for one mining run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiningConfig {
    /// Minimum number of transactions an itemset must appear in.
    pub sigma: usize,
    /// Smallest itemset cardinality that is reported.
    pub min_set_size: usize,
    /// Largest subset size checked by the pruner. Affects speed only, never output.
    pub max_combo_size: usize,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            min_set_size: DEFAULT_MIN_SET_SIZE,
            max_combo_size: DEFAULT_MAX_COMBO_SIZE,
        }
    }
}

impl MiningConfig {
    pub fn new(sigma: usize, min_set_size: usize) -> Self {
        Self {
            sigma,
            min_set_size,
            ..Self::default()
        }
    }

    pub fn with_sigma(mut self, sigma: usize) -> Self {
        self.sigma = sigma;
        self
    }

    pub fn with_min_set_size(mut self, min_set_size: usize) -> Self {
        self.min_set_size = min_set_size;
        self
    }

    pub fn with_max_combo_size(mut self, max_combo_size: usize) -> Self {
        self.max_combo_size = max_combo_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("sigma", self.sigma),
            ("min_set_size", self.min_set_size),
            ("max_combo_size", self.max_combo_size),
        ] {
            if value == 0 {
                return Err(CooccurError::InvalidConfig { parameter, value });
            }
        }
        Ok(())
    }
}
