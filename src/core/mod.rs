//! Translation cache core.
//!
//! Everything with real invariants lives here; the CLI and MCP layers only
//! parse input, call into these modules and render the results.
//!
//! ## Module Structure
//!
//! - `normalize`: placeholder grammar and positional `__HB<i>__` tokens
//! - `store`: per-language cache files and the single-active-language store
//! - `diff`: structural comparison of two document trees
//! - `invalidate`: maps differences or explicit keys to cache removals

pub mod diff;
pub mod invalidate;
pub mod normalize;
pub mod store;

pub use diff::{Difference, find_differences};
pub use invalidate::{
    InvalidationReport, RemoveKeysReport, remove_differences_from_cache, remove_failed_entries,
    remove_keys,
};
pub use normalize::{NormalizedKey, normalize_key, restore_placeholders};
pub use store::{CacheDir, LanguageCacheStore, LoadStatus, is_valid_language_code};
