//! Stylesheet generation error types

use std::path::PathBuf;

use thiserror::Error;
use verdant_theme::ThemeError;

/// Errors that abort a generation pass
#[derive(Error, Debug)]
pub enum CssError {
    /// A token lookup inside a component or utility value failed
    #[error("{selector} {{ {property} }}: {source}")]
    Token {
        selector: String,
        property: String,
        #[source]
        source: ThemeError,
    },

    /// The theme configuration itself is invalid
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// A value template could not be parsed
    #[error("invalid value template `{value}`: {message}")]
    InvalidTemplate { value: String, message: String },

    /// A component body entry has no usable literal form
    #[error("{selector} {{ {property} }}: {message}")]
    InvalidValue {
        selector: String,
        property: String,
        message: String,
    },

    /// A component selector is empty or otherwise unusable
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// A content glob could not be compiled
    #[error("invalid content glob `{pattern}`: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Reading or walking a file failed
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed
    #[error("failed to parse {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl CssError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CssError::Io {
            path: path.into(),
            source,
        }
    }

    /// The offending token path, if this error came from a token lookup
    pub fn token_path(&self) -> Option<&str> {
        match self {
            CssError::Token { source, .. } | CssError::Theme(source) => Some(source.path()),
            _ => None,
        }
    }
}

/// Result type for stylesheet generation
pub type Result<T> = std::result::Result<T, CssError>;
