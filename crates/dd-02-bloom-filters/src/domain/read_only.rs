//! Read-only Bloom filter
//!
//! The query-time half of the filter. There is no `insert`: the only ways
//! to obtain one are decoding an artifact or freezing a built filter.

use bitvec::prelude::*;

use super::artifact::{self, ArtifactHeader};
use super::hash_functions::hash_positions;
use crate::error::ArtifactError;
use crate::ports::MembershipQuery;

/// Immutable Bloom filter loaded from an artifact
#[derive(Clone, Debug)]
pub struct ReadOnlyBloomFilter {
    bits: BitVec<u8, Lsb0>,
    k: usize,
    m: usize,
    n: usize,
}

impl ReadOnlyBloomFilter {
    pub(crate) fn from_parts(bits: BitVec<u8, Lsb0>, k: usize, m: usize, n: usize) -> Self {
        Self { bits, k, m, n }
    }

    /// Decode a filter from artifact bytes
    ///
    /// Fails on unknown magic or version, invalid parameters, or a bit array
    /// whose length disagrees with the header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (header, payload) = artifact::decode(bytes)?;

        let m = header.bit_count as usize;
        let mut bits = BitVec::<u8, Lsb0>::from_vec(payload.to_vec());
        bits.truncate(m);

        Ok(Self::from_parts(
            bits,
            header.hash_count as usize,
            m,
            header.element_count as usize,
        ))
    }

    /// Header describing this filter
    pub fn header(&self) -> ArtifactHeader {
        ArtifactHeader::new(self.m as u64, self.k as u32, self.n as u64)
    }

    /// Re-encode this filter as an artifact
    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        artifact::encode(&self.header(), self.bits.as_raw_slice())
    }
}

impl MembershipQuery for ReadOnlyBloomFilter {
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
