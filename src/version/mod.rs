//! Version resolution.
//!
//! Determines the effective product version from an explicit environment
//! mapping, falling back to a version-reporting helper. The priority chain is:
//!
//! 1. `ELASTIC_VERSION` in the mapping (any value, including empty)
//! 2. Trimmed stdout of the helper (default `bin/elastic-version`)
//!
//! A non-empty `STAGING_BUILD_NUM` is appended to form the full version.

pub mod helper;
pub mod resolver;

pub use helper::{CommandHelper, VersionHelper, DEFAULT_HELPER};
pub use resolver::{
    ResolvedVersion, VersionKeys, VersionSource, STAGING_BUILD_VAR, VERSION_VAR,
};
