//! Buildable Bloom filter
//!
//! INVARIANTS:
//! - FPR = (1 - e^(-kn/m))^k for n insertions into m bits with k hashes
//! - No false negatives: if inserted, contains() MUST return true

use bitvec::prelude::*;

use super::artifact::{self, ArtifactHeader};
use super::config::BloomConfig;
use super::hash_functions::hash_positions;
use super::parameters::{calculate_optimal_parameters, MAX_HASH_COUNT};
use super::read_only::ReadOnlyBloomFilter;
use crate::error::{ArtifactError, BloomError};
use crate::ports::MembershipQuery;

/// Bloom filter for probabilistic membership testing
///
/// This is the build-time half of the filter: it supports `insert`.
/// Once populated it is either serialized with [`BloomFilter::to_bytes`] or
/// converted into a [`ReadOnlyBloomFilter`] with [`BloomFilter::freeze`].
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of insert calls (n)
    n: usize,
}

impl BloomFilter {
    /// Create a new Bloom filter with specified parameters
    ///
    /// `m` is raised to at least one bit and `k` is clamped to
    /// `1..=MAX_HASH_COUNT`.
    pub fn new(m: usize, k: usize) -> Self {
        let m = m.max(1);
        Self {
            bits: bitvec![u8, Lsb0; 0; m],
            k: k.clamp(1, MAX_HASH_COUNT),
            m,
            n: 0,
        }
    }

    /// Create a new Bloom filter with optimal parameters for target FPR
    ///
    /// # Arguments
    /// * `expected_elements` - Expected number of elements (n)
    /// * `target_fpr` - Target false positive rate
    pub fn new_with_fpr(expected_elements: usize, target_fpr: f64) -> Self {
        let params = calculate_optimal_parameters(expected_elements, target_fpr);
        Self::new(params.size_bits, params.hash_count)
    }

    /// Create a filter sized by a validated configuration
    pub fn with_config(expected_elements: usize, config: &BloomConfig) -> Result<Self, BloomError> {
        let params = config.parameters_for(expected_elements)?;
        Ok(Self::new(params.size_bits, params.hash_count))
    }

    /// Insert an element into the filter
    ///
    /// Re-inserting an element sets the same bits again.
    pub fn insert(&mut self, element: &[u8]) {
        for pos in hash_positions(element, self.k, self.m) {
            self.bits.set(pos, true);
        }
        self.n += 1;
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set, a direct estimate of saturation
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.m as f64
    }

    /// Raw bit array, LSB-first within each byte
    pub fn as_raw_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }

    /// Header describing this filter in the artifact format
    pub fn header(&self) -> ArtifactHeader {
        ArtifactHeader::new(self.m as u64, self.k as u32, self.n as u64)
    }

    /// Serialize the filter into a versioned artifact
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        artifact::encode(&self.header(), self.as_raw_bytes())
    }

    /// Convert into an immutable filter that can only be queried
    pub fn freeze(self) -> ReadOnlyBloomFilter {
        ReadOnlyBloomFilter::from_parts(self.bits, self.k, self.m, self.n)
    }
}

impl MembershipQuery for BloomFilter {
    fn contains(&self, element: &[u8]) -> bool {
        hash_positions(element, self.k, self.m).all(|pos| self.bits[pos])
    }

    fn size_bits(&self) -> usize {
        self.m
    }

    fn hash_count(&self) -> usize {
        self.k
    }

    fn elements_inserted(&self) -> usize {
        self.n
    }
}
