//! CLI command handlers, one per file.

mod check;
mod completions;
mod config;
mod report;
mod submit;
mod usn;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use submit::run_submit;
pub use usn::run_usn;
