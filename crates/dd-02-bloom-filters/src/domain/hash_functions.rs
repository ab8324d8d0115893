//! Hash functions for the Bloom filter
//!
//! Uses MurmurHash3 (x64, 128-bit) with two seeds and derives the remaining
//! positions by double hashing: `g(i) = h1 + i * h2 (mod m)`.
//! `h2` has its low bit forced to 1 so it is never 0 and never a multiple
//! of an even `m`, which would collapse all k positions onto one bit.
//!
//! The position sequence is part of the artifact format. Changing the seeds,
//! the hash family or the combination step requires a new format version.

use std::io::Cursor;

/// Seed for the first base hash.
pub const SEED_PRIMARY: u32 = 0;
/// Seed for the second base hash.
pub const SEED_SECONDARY: u32 = 1;

/// Hash an element with MurmurHash3 and return the lower 64 bits.
pub fn murmur_hash(element: &[u8], seed: u32) -> u64 {
    let mut cursor = Cursor::new(element);
    // Reading from an in-memory cursor cannot fail.
    let hash = murmur3::murmur3_x64_128(&mut cursor, seed).unwrap_or(0);
    hash as u64
}

/// Iterator over the `k` bit positions of one element.
#[derive(Clone, Debug)]
pub struct HashPositions {
    h1: u64,
    h2: u64,
    m: u64,
    i: u64,
    k: u64,
}

impl Iterator for HashPositions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.i >= self.k {
            return None;
        }
        let hash = self.h1.wrapping_add(self.i.wrapping_mul(self.h2));
        self.i += 1;
        Some((hash % self.m) as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.k - self.i) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HashPositions {}

/// Compute the `k` bit positions for an element in a filter of `m` bits.
///
/// `m` must be non-zero; callers construct filters with at least one bit.
pub fn hash_positions(element: &[u8], k: usize, m: usize) -> HashPositions {
    HashPositions {
        h1: murmur_hash(element, SEED_PRIMARY),
        h2: murmur_hash(element, SEED_SECONDARY) | 1,
        m: m.max(1) as u64,
        i: 0,
        k: k as u64,
    }
}
