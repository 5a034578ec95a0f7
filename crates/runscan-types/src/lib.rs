pub mod day;
pub mod error;
pub mod manifest;
pub mod observation;
pub mod run;
mod util;

pub use day::{Day, RawDay};
pub use error::{Error, Result};
pub use manifest::ManifestEntry;
pub use observation::{Observation, RawObservation, Timer};
pub use run::{Checkpoints, Milestone, StrippedRun};
pub use util::*;
