use chrono::NaiveDate;
use runscan_types::RawDay;
use std::path::{Path, PathBuf};

use crate::Result;

/// Capture discovery and loading
///
/// Responsibilities:
/// - Recognize capture files by name
/// - Derive the ordering key for a capture
/// - Load a capture into a `RawDay`
pub trait CaptureSource: Send + Sync {
    /// Unique source ID (e.g., "historical", "live")
    fn id(&self) -> &'static str;

    /// Ordering key for a file this source can load.
    /// Returns None for names that do not match the source's pattern.
    fn probe(&self, path: &Path) -> Option<CaptureKey>;

    /// Parse the whole file
    fn load(&self, path: &Path) -> Result<RawDay>;
}

// --- Helper types ---

/// Sort key of a capture within its dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CaptureKey {
    /// Calendar day of a historical capture
    Date(NaiveDate),
    /// Numeric session token of a live capture
    Token(u64),
}

impl std::fmt::Display for CaptureKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CaptureKey::Date(date) => write!(f, "{}", date.format("%Y-%m-%d")),
            CaptureKey::Token(token) => write!(f, "{}", token),
        }
    }
}

/// A capture file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureFile {
    pub path: PathBuf,
    pub key: CaptureKey,
    pub source_id: &'static str,
}

impl CaptureFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
