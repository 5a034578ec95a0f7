pub mod console;
pub mod progress;
pub mod runs;
pub mod stats;

pub use console::Console;
pub use progress::render_progress;
