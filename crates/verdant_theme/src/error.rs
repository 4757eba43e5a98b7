//! Theme error types

use thiserror::Error;

use crate::tokens::TokenKind;

/// Errors raised while building or querying a token registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A `theme(...)` lookup named a path that is not in the registry
    #[error("unresolved theme token `{path}`")]
    UnresolvedToken { path: String },

    /// The token exists but has no single-value CSS form (e.g. keyframes)
    #[error("theme token `{path}` is {kind} and cannot be used as a property value")]
    NotInterpolable { path: String, kind: TokenKind },

    /// The declared literal could not be turned into a token value
    #[error("invalid theme token `{path}`: {reason}")]
    InvalidToken { path: String, reason: String },
}

impl ThemeError {
    /// The dotted token path this error refers to
    pub fn path(&self) -> &str {
        match self {
            ThemeError::UnresolvedToken { path }
            | ThemeError::NotInterpolable { path, .. }
            | ThemeError::InvalidToken { path, .. } => path,
        }
    }
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
