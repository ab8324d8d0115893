//! Versioned artifact format for serialized filters
//!
//! Layout (little-endian, bincode fixed-int encoding for the header):
//!
//! ```text
//! offset  field            type
//! 0       magic "DDBF"     [u8; 4]
//! 4       format_version   u32
//! 8       bit_count (m)    u64
//! 16      hash_count (k)   u32
//! 20      element_count    u64
//! 28      bit array        ceil(m / 8) bytes, bit i = byte[i / 8] >> (i % 8)
//! ```
//!
//! Bit positions come from MurmurHash3 x64/128 (seeds 0 and 1) combined as
//! `h1 + i * (h2 | 1) mod m`.
//!
//! Readers reject any magic or version they do not know before touching
//! the payload.

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_fpr, MAX_HASH_COUNT};
use crate::error::ArtifactError;

/// File magic identifying a domain filter artifact.
pub const ARTIFACT_MAGIC: [u8; 4] = *b"DDBF";

/// The only format version this build reads and writes.
pub const FORMAT_VERSION: u32 = 1;

/// Encoded header size in bytes.
pub const HEADER_LEN: usize = 28;

/// Fixed artifact header
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactHeader {
    pub magic: [u8; 4],
    pub format_version: u32,
    pub bit_count: u64,
    pub hash_count: u32,
    pub element_count: u64,
}

impl ArtifactHeader {
    /// Header for the current format version
    pub fn new(bit_count: u64, hash_count: u32, element_count: u64) -> Self {
        Self {
            magic: ARTIFACT_MAGIC,
            format_version: FORMAT_VERSION,
            bit_count,
            hash_count,
            element_count,
        }
    }

    /// Length of the bit array payload in bytes
    pub fn payload_len(&self) -> usize {
        self.bit_count.div_ceil(8) as usize
    }

    /// Total artifact length in bytes
    pub fn artifact_len(&self) -> usize {
        HEADER_LEN + self.payload_len()
    }

    /// Theoretical false positive rate at the recorded element count
    pub fn theoretical_fpr(&self) -> f64 {
        calculate_fpr(
            self.bit_count as usize,
            self.element_count as usize,
            self.hash_count as usize,
        )
    }

    /// Decode and validate a header from the start of `bytes`
    pub fn decode(bytes: &[u8]) -> Result<Self, ArtifactError> {
        if bytes.len() < HEADER_LEN {
            return Err(ArtifactError::TruncatedHeader(format!(
                "need {} bytes, have {}",
                HEADER_LEN,
                bytes.len()
            )));
        }

        let header: ArtifactHeader = bincode::deserialize(&bytes[..HEADER_LEN])
            .map_err(|e| ArtifactError::TruncatedHeader(e.to_string()))?;
        header.validate()?;
        Ok(header)
    }

    /// Check magic, version and parameter ranges
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.magic != ARTIFACT_MAGIC {
            return Err(ArtifactError::BadMagic { found: self.magic });
        }

        if self.format_version != FORMAT_VERSION {
            return Err(ArtifactError::UnsupportedVersion {
                found: self.format_version,
                supported: FORMAT_VERSION,
            });
        }

        if self.bit_count == 0 || usize::try_from(self.bit_count).is_err() {
            return Err(ArtifactError::InvalidParameters(format!(
                "bit_count {} out of range",
                self.bit_count
            )));
        }

        if self.hash_count == 0 || self.hash_count as usize > MAX_HASH_COUNT {
            return Err(ArtifactError::InvalidParameters(format!(
                "hash_count {} not in 1..={}",
                self.hash_count, MAX_HASH_COUNT
            )));
        }

        Ok(())
    }
}

/// Encode a header and its bit array into one artifact buffer
pub fn encode(header: &ArtifactHeader, bits: &[u8]) -> Result<Vec<u8>, ArtifactError> {
    header.validate()?;
    if bits.len() != header.payload_len() {
        return Err(ArtifactError::LengthMismatch {
            expected: header.payload_len(),
            found: bits.len(),
        });
    }

    let mut out = Vec::with_capacity(header.artifact_len());
    bincode::serialize_into(&mut out, header)
        .map_err(|e| ArtifactError::Serialization(e.to_string()))?;
    debug_assert_eq!(out.len(), HEADER_LEN);
    out.extend_from_slice(bits);
    Ok(out)
}

/// Split an artifact into its validated header and bit array
pub fn decode(bytes: &[u8]) -> Result<(ArtifactHeader, &[u8]), ArtifactError> {
    let header = ArtifactHeader::decode(bytes)?;
    let payload = &bytes[HEADER_LEN..];
    if payload.len() != header.payload_len() {
        return Err(ArtifactError::LengthMismatch {
            expected: header.payload_len(),
            found: payload.len(),
        });
    }
    Ok((header, payload))
}
