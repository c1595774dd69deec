//! Configuration resolution
//!
//! Derives the SDK configuration from a connection-string property or a
//! fallback file, and memoizes it until explicitly reloaded or replaced.

pub mod connection;
pub mod resolver;
pub mod sources;

pub use connection::{parse_connection_string, ConnectionStringError};
pub use resolver::{
    shared, ConfigOrigin, ConfigResolver, Resolution, ResolveRequest, DEFAULT_URL_PROPERTY,
};
pub use sources::{
    EnvProperties, FallbackError, FallbackSource, FileFallback, LoadedFallback, MapProperties,
    NoFallback, PropertySource,
};
