// Error types
pub mod error;

// Trait-based architecture (public API)
pub mod traits;

// Capture implementations
pub mod historical;
pub mod live;

// Directory scanning
pub mod discovery;

// Source registry
pub mod registry;

// Traits
pub use traits::{CaptureFile, CaptureKey, CaptureSource};

// Capture sources
pub use historical::HistoricalSource;
pub use live::{LiveSource, parse_live_stream};

// Discovery
pub use discovery::scan_captures;

// Registry
pub use registry::{create_all_sources, create_source, detect_source_from_path};

// Error types
pub use error::{Error, Result};
