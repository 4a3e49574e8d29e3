//! Failures while exporting or importing a routine snapshot.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The routine could not be written out as `format`.
    #[error("could not encode snapshot as {format}: {reason}")]
    Encode { format: &'static str, reason: String },

    /// The input is not a well-formed `format` snapshot.
    #[error("could not decode {format} snapshot: {reason}")]
    Decode { format: &'static str, reason: String },

    /// Written by a newer release; older layouts are still read.
    #[error("snapshot layout v{found} is newer than v{supported}")]
    NewerVersion { found: u32, supported: u32 },
}
