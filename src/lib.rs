//! trcache - per-language translation cache for i18n message files
//!
//! trcache remembers machine translations per target language so identical
//! source strings are never translated twice, and works out which cached
//! translations went stale when a message file changes.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Cache store, placeholder normalization, structural diff and invalidation
//! - `logging`: Tracing subscriber setup
//! - `mcp`: Model Context Protocol server implementation
//! - `parsers`: JSON/ARB document ingestion
//! - `translate`: Cache-aware translation over a pluggable backend

pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod mcp;
pub mod parsers;
pub mod translate;
