//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = -n*ln(p) / (ln(2)^2)  -- optimal bits
//! - k = (m/n) * ln(2)         -- optimal hash functions
//! - p = (1 - e^(-kn/m))^k     -- false positive rate

use std::f64::consts::LN_2;

/// Upper bound on the number of hash functions.
pub const MAX_HASH_COUNT: usize = 32;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Expected false positive rate at full capacity
    pub expected_fpr: f64,
}

/// Calculate optimal Bloom filter parameters for given constraints
///
/// # Arguments
/// * `num_elements` - Expected number of elements to insert (n)
/// * `target_fpr` - Target false positive rate, in `(0, 1)`
///
/// An empty capacity yields a one-bit, one-hash filter so that the
/// structure is always queryable. A rate that is not positive (or NaN) is
/// raised to `f64::MIN_POSITIVE`, keeping `m` finite.
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> BloomFilterParams {
    if num_elements == 0 {
        return BloomFilterParams {
            size_bits: 1,
            hash_count: 1,
            expected_fpr: 0.0,
        };
    }

    let n = num_elements as f64;
    let ln2_squared = LN_2 * LN_2;

    let p = if target_fpr > 0.0 { target_fpr } else { f64::MIN_POSITIVE };
    let m = (-n * p.ln() / ln2_squared).ceil().max(1.0) as usize;

    let k = ((m as f64 / n) * LN_2).round() as usize;
    let k = k.clamp(1, MAX_HASH_COUNT);

    BloomFilterParams {
        size_bits: m,
        hash_count: k,
        expected_fpr: calculate_fpr(m, num_elements, k),
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
