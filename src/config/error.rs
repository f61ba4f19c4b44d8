//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a [`MetaConfig`](super::MetaConfig).
///
/// Lookups and rendering never fail; only reading an overlay does.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config overlay parsing error")]
    Toml(#[from] toml::de::Error),
}
