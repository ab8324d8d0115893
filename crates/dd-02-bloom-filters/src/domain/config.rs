//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```ignore
//! use dd_02_bloom_filters::domain::BloomConfigBuilder;
//!
//! let config = BloomConfigBuilder::new()
//!     .target_fpr(1e-6)
//!     .max_size_bits(1 << 30)
//!     .build()?;
//! ```

use crate::error::BloomError;
use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, BloomFilterParams};

/// Highest accepted target false positive rate.
pub const MAX_TARGET_FPR: f64 = 0.5;

/// Default cap on filter size: 2^32 - 1 bits (512 MiB).
pub const DEFAULT_MAX_SIZE_BITS: usize = u32::MAX as usize;

/// Bloom filter sizing configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BloomConfig {
    /// Target false positive rate, in `(0, 0.5]`
    pub target_fpr: f64,
    /// Maximum filter size in bits
    pub max_size_bits: usize,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            target_fpr: 1e-6,
            max_size_bits: DEFAULT_MAX_SIZE_BITS,
        }
    }
}

impl BloomConfig {
    /// Create a new configuration with validation
    pub fn new(target_fpr: f64, max_size_bits: usize) -> Result<Self, BloomError> {
        let config = Self {
            target_fpr,
            max_size_bits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration bounds
    pub fn validate(&self) -> Result<(), BloomError> {
        // Also rejects NaN
        if !(self.target_fpr > 0.0 && self.target_fpr <= MAX_TARGET_FPR) {
            return Err(BloomError::InvalidFPR {
                fpr: self.target_fpr,
                max: MAX_TARGET_FPR,
            });
        }

        if self.max_size_bits == 0 {
            return Err(BloomError::InvalidParameters(
                "max_size_bits cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Size a filter for `capacity` elements, enforcing `max_size_bits`.
    pub fn parameters_for(&self, capacity: usize) -> Result<BloomFilterParams, BloomError> {
        self.validate()?;
        let params = calculate_optimal_parameters(capacity, self.target_fpr);
        if params.size_bits > self.max_size_bits {
            return Err(BloomError::FilterTooLarge {
                size: params.size_bits,
                max: self.max_size_bits,
            });
        }
        Ok(params)
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }
}

/// Builder for BloomConfig with validation
#[derive(Default)]
pub struct BloomConfigBuilder {
    target_fpr: Option<f64>,
    max_size_bits: Option<usize>,
}

impl BloomConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set maximum filter size in bits
    pub fn max_size_bits(mut self, bits: usize) -> Self {
        self.max_size_bits = Some(bits);
        self
    }

    /// Build the BloomConfig, validating all parameters
    pub fn build(self) -> Result<BloomConfig, BloomError> {
        let defaults = BloomConfig::default();

        let config = BloomConfig {
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            max_size_bits: self.max_size_bits.unwrap_or(defaults.max_size_bits),
        };

        config.validate()?;
        Ok(config)
    }
}
