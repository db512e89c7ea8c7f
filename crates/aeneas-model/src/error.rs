//! Error types for catalog identifiers.

use thiserror::Error;

/// Errors raised while turning text into catalog identifiers.
///
/// Typed lookups never fail; these only occur at the edges where a name
/// arrives from configuration or another textual source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The name does not match any studio mode.
    #[error("unknown mode '{name}' (expected one of: brand, web, visual)")]
    UnknownMode {
        /// The rejected name.
        name: String,
    },

    /// The name does not match any project.
    #[error("unknown project '{name}' (expected one of: zigzag, gmarket, travel)")]
    UnknownProject {
        /// The rejected name.
        name: String,
    },
}

/// Result alias for catalog operations.
pub type Result<T> = std::result::Result<T, ModelError>;
