//! Error types for baz-core.
//!
//! A missing optional module is its own variant so callers can match on it
//! instead of inspecting a message.

use crate::types::ModuleName;

/// Result type alias for baz operations.
pub type Result<T> = std::result::Result<T, BazError>;

/// Error type for baz operations.
#[derive(Debug, thiserror::Error)]
pub enum BazError {
    /// An optional module required by the operation is absent from the
    /// running deployment.
    #[error("missing dependency: {module}")]
    MissingDependency {
        /// Fully-qualified name of the absent module.
        module: ModuleName,
    },

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl BazError {
    /// Creates a missing dependency error.
    #[must_use]
    pub const fn missing_dependency(module: ModuleName) -> Self {
        Self::MissingDependency { module }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns true if this error reports an absent optional module.
    #[must_use]
    pub const fn is_missing_dependency(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }

    /// Returns the name of the absent module, if this is a missing dependency.
    #[must_use]
    pub const fn missing_module(&self) -> Option<&ModuleName> {
        match self {
            Self::MissingDependency { module } => Some(module),
            _ => None,
        }
    }

    /// Returns true if retrying the operation could succeed.
    ///
    /// A module absent from a built registry stays absent, so a missing
    /// dependency is never recoverable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Returns true if this error aborts the call that raised it.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingDependency { .. })
    }
}

impl From<toml::de::Error> for BazError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for BazError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
