//! imagetag - Build-identifier resolution and artifact naming.
//!
//! Resolves the product version a test or deployment harness should run
//! against, then derives the display name, container image reference and
//! container name from it.
//!
//! # Modules
//!
//! - [`version`] - Version resolution from an explicit environment plus a helper fallback
//! - [`naming`] - Artifact names derived from a resolved version
//! - [`config`] - Config files, `.env` files and layered environments
//! - [`shell`] - Running the version helper
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`ui`] - Result and diagnostic output
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use imagetag::naming::derive_names;
//! use imagetag::version::ResolvedVersion;
//!
//! let mut env = HashMap::new();
//! env.insert("ELASTIC_VERSION".to_string(), "5.3.0".to_string());
//! env.insert("STAGING_BUILD_NUM".to_string(), "d5b30bd7".to_string());
//!
//! let helper = || -> imagetag::Result<String> { Ok("unused".to_string()) };
//! let version = ResolvedVersion::resolve(&env, &helper).unwrap();
//! let names = derive_names(&version);
//!
//! assert_eq!(names.display_name, "logstash 5.3.0");
//! assert_eq!(names.image_reference, "docker.elastic.co/logstash/logstash:5.3.0-d5b30bd7");
//! assert_eq!(names.container_name, "logstash");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod naming;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{ImagetagError, Result};
pub use naming::{derive_names, ArtifactNames, NamingScheme};
pub use version::{CommandHelper, ResolvedVersion, VersionHelper, VersionKeys, VersionSource};
