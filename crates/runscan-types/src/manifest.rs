use serde::{Deserialize, Serialize};

/// One downloadable file in the output directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Relative to the output directory, `/` separated
    pub path: String,
    /// Bytes
    pub size: u64,
}
