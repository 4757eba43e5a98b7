//! Verdant Theme Tokens
//!
//! The design-token registry behind Verdant's generated stylesheets.
//!
//! # Overview
//!
//! - **Tokens**: tagged values (colors, lengths, shadows, animations,
//!   font stacks, keyframes) stored under dotted paths like
//!   `colors.primary.600`
//! - **Base defaults**: the framework token set every build starts from
//! - **Extensions**: the `theme.extend` section of a configuration,
//!   merged over the defaults with extension values winning
//! - **Resolution**: fail-fast lookups; a missing path is an error
//!
//! # Quick Start
//!
//! ```rust
//! use verdant_theme::{RawToken, ThemeExtension, TokenRegistry};
//!
//! let extension = ThemeExtension::new().with(
//!     "colors",
//!     RawToken::group([("primary", RawToken::leaves([("600", "#059669")]))]),
//! );
//!
//! let registry = TokenRegistry::merged(&extension).unwrap();
//! assert_eq!(registry.resolve_css("colors.primary.600").unwrap(), "#059669");
//! assert_eq!(registry.resolve_css("colors.white").unwrap(), "#ffffff");
//! assert!(registry.resolve("colors.primary.650").is_err());
//! ```

pub mod defaults;
pub mod error;
pub mod extension;
pub mod registry;
pub mod tokens;

pub use defaults::base_registry;
pub use error::{Result, ThemeError};
pub use extension::{RawToken, ThemeConfig, ThemeExtension, DEFAULT_KEY};
pub use registry::TokenRegistry;
pub use tokens::*;
