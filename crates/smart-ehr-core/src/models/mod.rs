//! Domain models for the Smart EHR portal.

mod document;
mod finding;
mod patient;

pub use document::*;
pub use finding::*;
pub use patient::*;
