//! Token registry
//!
//! The registry is a flat, insertion-ordered map from dotted token paths to
//! tagged values. It is built once per build pass (base defaults first, then
//! the configuration's `theme.extend` tokens) and only read afterwards.
//!
//! Lookups are fail-fast: a path that is not present is an error, never an
//! empty string.

use std::borrow::Cow;

use indexmap::IndexMap;

use crate::defaults;
use crate::error::{Result, ThemeError};
use crate::extension::ThemeExtension;
use crate::tokens::TokenValue;

/// Flat mapping from dotted token paths to values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenRegistry {
    tokens: IndexMap<String, TokenValue>,
}

impl TokenRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the base framework defaults
    pub fn with_defaults() -> Self {
        defaults::base_registry()
    }

    /// Base defaults merged with `extension`, extension values winning on collision
    pub fn merged(extension: &ThemeExtension) -> Result<Self> {
        let mut registry = Self::with_defaults();
        registry.apply(extension)?;
        Ok(registry)
    }

    /// Merge every token declared in `extension` into this registry
    ///
    /// An existing path keeps its position and takes the new value; new
    /// paths are appended in declaration order.
    pub fn apply(&mut self, extension: &ThemeExtension) -> Result<()> {
        let mut overridden = 0usize;
        for (path, value) in extension.tokens()? {
            if self.insert(path, value).is_some() {
                overridden += 1;
            }
        }
        tracing::debug!(
            total = self.tokens.len(),
            overridden,
            "merged theme extension into registry"
        );
        Ok(())
    }

    /// Insert a token, returning the value it replaced
    pub fn insert(&mut self, path: impl Into<String>, value: TokenValue) -> Option<TokenValue> {
        self.tokens.insert(path.into(), value)
    }

    /// Get a token by path without raising an error
    pub fn get(&self, path: &str) -> Option<&TokenValue> {
        let path = normalize_path(path);
        self.tokens.get(path.as_ref())
    }

    /// Resolve a dotted path to its declared value
    ///
    /// Bracket segments are accepted as an alternative spelling, so
    /// `spacing[0.5]` and `spacing.0.5` name the same token.
    pub fn resolve(&self, path: &str) -> Result<&TokenValue> {
        self.get(path).ok_or_else(|| ThemeError::UnresolvedToken {
            path: path.to_string(),
        })
    }

    /// Resolve a path to the text substituted into a CSS property value
    pub fn resolve_css(&self, path: &str) -> Result<Cow<'_, str>> {
        self.resolve(path)?.css_value(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// All tokens in registry order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.tokens.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Tokens below `prefix`, yielded with the prefix and separating dot stripped
    ///
    /// `group("colors.primary")` yields `("50", ..)`, `("100", ..)` and so on.
    pub fn group<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a TokenValue)> + 'a {
        self.tokens.iter().filter_map(move |(path, value)| {
            path.strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('.'))
                .map(|rest| (rest, value))
        })
    }
}

/// Rewrite `a[b].c` to `a.b.c`
fn normalize_path(path: &str) -> Cow<'_, str> {
    let path = path.trim();
    if !path.contains('[') {
        return Cow::Borrowed(path);
    }
    let mut out = String::with_capacity(path.len());
    for c in path.chars() {
        match c {
            '[' => out.push('.'),
            ']' => {}
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}
