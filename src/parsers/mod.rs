//! Document ingestion.
//!
//! - `document`: reads JSON and ARB message files into document trees
pub mod document;
