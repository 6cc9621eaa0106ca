//! Path and URL utilities.
//!
//! Pure functions for path manipulation. No side effects.
//!
//! - [`fs`]: Lexical normalization of working-relative paths
//! - [`route`]: Reference string helpers (`is_external_link`, `split_query_fragment`,
//!   `splice_fingerprint`)

pub mod fs;
pub mod route;

pub use fs::normalize_relative;
pub use route::{is_external_link, splice_fingerprint, split_query_fragment};
