//! cloudinary-config: resolve Cloudinary SDK configuration
//!
//! Settings come from a `CLOUDINARY_URL`-style connection-string, a
//! `cloudinary_config.*` fallback file, or caller overrides, and are memoized
//! until the caller reloads or replaces them.

pub mod config;
pub mod domain;

pub use config::{shared, ConfigOrigin, ConfigResolver, DEFAULT_URL_PROPERTY};
pub use domain::{ConfigValue, Configuration};
