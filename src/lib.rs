//! skuscan library - data reconnaissance for SKU catalogs
//!
//! This library exposes the core functionality of skuscan for testing purposes.

pub mod dataset;
pub mod error;
pub mod freq;
pub mod locate;
pub mod records;
pub mod report;

// Re-export commonly used types for convenience
pub use dataset::{Cell, Dataset};
pub use error::SkuscanError;
pub use freq::FrequencyTable;
pub use records::{JsonKind, Record};
