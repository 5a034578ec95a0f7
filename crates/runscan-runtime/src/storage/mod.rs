pub mod fs;

pub use fs::{clear_dir, copy_raw, read_runs, write_json};
