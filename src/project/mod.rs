//! Project-level inputs: extractor configuration and change sets.

pub mod change_set;
pub mod config;

pub use change_set::{ChangeKind, ChangeSet};
pub use config::ExtractorConfig;
