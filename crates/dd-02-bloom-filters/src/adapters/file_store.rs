//! Artifact file store
//!
//! One-shot reads and writes of serialized filters. File handles never
//! outlive the call that opened them.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::domain::artifact::HEADER_LEN;
use crate::domain::{ArtifactHeader, BloomFilter, ReadOnlyBloomFilter};
use crate::error::ArtifactError;
use crate::ports::MembershipQuery;

/// Load a read-only filter from an artifact file
pub fn load_filter(path: &Path) -> Result<ReadOnlyBloomFilter, ArtifactError> {
    let bytes = fs::read(path)?;
    let filter = ReadOnlyBloomFilter::from_bytes(&bytes)?;
    info!(
        path = %path.display(),
        bits = filter.size_bits(),
        hashes = filter.hash_count(),
        elements = filter.elements_inserted(),
        "Loaded bloom filter artifact"
    );
    Ok(filter)
}

/// Read and validate only the header of an artifact file
pub fn read_header(path: &Path) -> Result<ArtifactHeader, ArtifactError> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; HEADER_LEN];
    file.read_exact(&mut buf).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => {
            ArtifactError::TruncatedHeader(format!("{} is shorter than the header", path.display()))
        }
        _ => ArtifactError::Io(e),
    })?;
    ArtifactHeader::decode(&buf)
}

/// Write a filter artifact
///
/// The artifact is written next to `path` and renamed into place so readers
/// never observe a partial file.
pub fn write_filter(path: &Path, filter: &BloomFilter) -> Result<u64, ArtifactError> {
    let bytes = filter.to_bytes()?;

    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let written = write_synced(tmp, &bytes).and_then(|()| fs::rename(tmp, path));
    if let Err(e) = written {
        // The temp file may not exist if creating it was what failed.
        let _ = fs::remove_file(tmp);
        return Err(e.into());
    }

    debug!(path = %path.display(), bytes = bytes.len(), "Wrote bloom filter artifact");
    Ok(bytes.len() as u64)
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(bytes)?;
    writer.flush()?;
    writer.get_ref().sync_all()
}
