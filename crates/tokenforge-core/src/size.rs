//! Artifact size accounting
//!
//! One source of truth for artifact byte counts: the validator's budget
//! rule and any UI display both derive from [`size_bytes`], so the number
//! the user sees is the number the threshold compared against.

use sha2::{Digest, Sha256};

/// Artifacts above this byte count trigger the size finding.
pub const SIZE_WARN_BYTES: usize = 100 * 1024;

/// Byte length of a UTF-8 encoded artifact string.
pub fn size_bytes(text: &str) -> usize {
    text.len()
}

/// Render a byte count as `B`, `KB`, or `MB` with two-decimal rounding.
pub fn format_file_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if (bytes as f64) < MIB {
        format!("{:.2} KB", bytes as f64 / KIB)
    } else {
        format!("{:.2} MB", bytes as f64 / MIB)
    }
}

/// Lowercase hex SHA-256 of an artifact string.
///
/// Two builds of the same document produce the same digest; the CLI
/// reports it so callers can cheaply compare outputs across runs.
pub fn artifact_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}
