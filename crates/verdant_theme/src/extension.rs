//! `theme.extend` configuration
//!
//! Extensions arrive as arbitrarily nested tables (`colors.primary.600`,
//! `keyframes.pulse-green."50%".opacity`). They are flattened into dotted
//! paths with tagged values before being merged into a [`TokenRegistry`].
//!
//! [`TokenRegistry`]: crate::TokenRegistry

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::{Result, ThemeError};
use crate::tokens::{Keyframes, ThemeCategory, TokenKind, TokenValue};

const FLOAT_REASON: &str = "unquoted floats lose their literal text; write the value as a string";

/// Key that additionally names its parent path (`colors.brand.DEFAULT` → `colors.brand`)
pub const DEFAULT_KEY: &str = "DEFAULT";

/// The `theme` section of a configuration file
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ThemeConfig {
    /// Tokens added to (or overriding) the base defaults
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// A raw, not yet tagged, token tree
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawToken {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<RawToken>),
    Group(IndexMap<String, RawToken>),
}

impl RawToken {
    /// Build a group from `(key, token)` pairs
    pub fn group<K: Into<String>>(entries: impl IntoIterator<Item = (K, RawToken)>) -> Self {
        Self::Group(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a group of plain string leaves
    pub fn leaves<K: Into<String>, V: Into<String>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self::Group(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), RawToken::Text(v.into())))
                .collect(),
        )
    }

    /// Literal text of a string or integer leaf
    ///
    /// Floats have no literal form once parsed (`1.50` reads back as `1.5`),
    /// so they are left to the caller to reject.
    fn scalar_text(&self) -> Option<String> {
        match self {
            RawToken::Text(s) => Some(s.clone()),
            RawToken::Integer(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Category name → token tree, in declaration order
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ThemeExtension {
    categories: IndexMap<String, RawToken>,
}

impl ThemeExtension {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a whole category
    pub fn with(mut self, category: impl Into<String>, tokens: RawToken) -> Self {
        self.categories.insert(category.into(), tokens);
        self
    }

    /// Remove a whole category, returning its tokens
    pub fn remove(&mut self, category: &str) -> Option<RawToken> {
        self.categories.shift_remove(category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Declared category names, in order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Mutable access to one category's tree
    pub fn category_mut(&mut self, category: &str) -> Option<&mut RawToken> {
        self.categories.get_mut(category)
    }

    /// Flatten every category into `(path, value)` pairs, in declaration order
    pub fn tokens(&self) -> Result<Vec<(String, TokenValue)>> {
        let mut out = Vec::new();
        for (category, tree) in &self.categories {
            let RawToken::Group(entries) = tree else {
                return Err(ThemeError::InvalidToken {
                    path: category.clone(),
                    reason: "a theme category must be a table of tokens".to_string(),
                });
            };

            let kind = ThemeCategory::from_key(category)
                .map(ThemeCategory::kind)
                .unwrap_or(TokenKind::Raw);

            if kind == TokenKind::Keyframes {
                for (name, frames) in entries {
                    let path = format!("{category}.{name}");
                    let frames = keyframes_from_raw(&path, frames)?;
                    out.push((path, TokenValue::Keyframes(frames)));
                }
            } else {
                for (key, token) in entries {
                    flatten(category, key, token, kind, &mut out)?;
                }
            }
        }
        Ok(out)
    }
}

fn flatten(
    parent: &str,
    key: &str,
    token: &RawToken,
    kind: TokenKind,
    out: &mut Vec<(String, TokenValue)>,
) -> Result<()> {
    let path = format!("{parent}.{key}");
    let value = match token {
        RawToken::Group(entries) => {
            for (child, token) in entries {
                flatten(&path, child, token, kind, out)?;
            }
            return Ok(());
        }
        RawToken::Bool(_) => {
            return Err(ThemeError::InvalidToken {
                path,
                reason: "booleans are not valid token values".to_string(),
            });
        }
        RawToken::Float(_) => {
            return Err(ThemeError::InvalidToken {
                path,
                reason: FLOAT_REASON.to_string(),
            });
        }
        RawToken::List(items) => {
            let mut parts = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    RawToken::Text(s) => parts.push(s.clone()),
                    _ => {
                        return Err(ThemeError::InvalidToken {
                            path,
                            reason: "token lists may only contain strings".to_string(),
                        });
                    }
                }
            }
            if kind == TokenKind::FontStack {
                TokenValue::FontStack(parts)
            } else {
                TokenValue::scalar(kind, parts.join(", "))
            }
        }
        RawToken::Text(text) => TokenValue::scalar(kind, text.clone()),
        RawToken::Integer(n) => TokenValue::scalar(kind, n.to_string()),
    };

    if key == DEFAULT_KEY {
        out.push((parent.to_string(), value.clone()));
    }
    out.push((path, value));
    Ok(())
}

fn keyframes_from_raw(path: &str, token: &RawToken) -> Result<Keyframes> {
    let invalid = |reason: &str| ThemeError::InvalidToken {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    let RawToken::Group(stops) = token else {
        return Err(invalid("keyframes must be a table of stops"));
    };

    let mut frames = Keyframes::new();
    for (offset, body) in stops {
        let RawToken::Group(declarations) = body else {
            return Err(invalid(&format!("keyframe stop `{offset}` must be a table")));
        };
        let mut decls = IndexMap::with_capacity(declarations.len());
        for (property, value) in declarations {
            if let RawToken::Float(_) = value {
                return Err(invalid(&format!(
                    "keyframe property `{property}` in stop `{offset}`: {FLOAT_REASON}"
                )));
            }
            let Some(text) = value.scalar_text() else {
                return Err(invalid(&format!(
                    "keyframe property `{property}` in stop `{offset}` must be a string or number"
                )));
            };
            decls.insert(property.clone(), text);
        }
        frames.push_stop(offset.clone(), decls);
    }
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flatten_nested_colors() {
        let ext = ThemeExtension::new().with(
            "colors",
            RawToken::group([(
                "primary",
                RawToken::leaves([("50", "#ecfdf5"), ("600", "#059669")]),
            )]),
        );

        let tokens = ext.tokens().unwrap();
        assert_eq!(
            tokens,
            vec![
                ("colors.primary.50".to_string(), TokenValue::Color("#ecfdf5".into())),
                ("colors.primary.600".to_string(), TokenValue::Color("#059669".into())),
            ]
        );
    }

    #[test]
    fn test_default_key_names_parent() {
        let ext = ThemeExtension::new().with(
            "colors",
            RawToken::group([("brand", RawToken::leaves([("DEFAULT", "#10b981")]))]),
        );
        let paths: Vec<String> = ext.tokens().unwrap().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["colors.brand", "colors.brand.DEFAULT"]);
    }

    #[test]
    fn test_font_family_list_becomes_stack() {
        let ext = ThemeExtension::new().with(
            "fontFamily",
            RawToken::group([(
                "sans",
                RawToken::List(vec![
                    RawToken::Text("Inter".into()),
                    RawToken::Text("sans-serif".into()),
                ]),
            )]),
        );
        let tokens = ext.tokens().unwrap();
        assert_eq!(
            tokens[0].1,
            TokenValue::FontStack(vec!["Inter".into(), "sans-serif".into()])
        );
    }

    #[test]
    fn test_numbers_keep_literal_text() {
        let ext = ThemeExtension::new().with(
            "fontWeight",
            RawToken::group([("heavy", RawToken::Integer(850))]),
        );
        let tokens = ext.tokens().unwrap();
        assert_eq!(tokens[0].1, TokenValue::FontWeight("850".into()));
    }

    #[test]
    fn test_unknown_category_is_raw() {
        let ext = ThemeExtension::new().with("zIndex", RawToken::leaves([("modal", "50")]));
        let tokens = ext.tokens().unwrap();
        assert_eq!(tokens[0], ("zIndex.modal".to_string(), TokenValue::Raw("50".into())));
    }

    #[test]
    fn test_boolean_is_rejected() {
        let ext = ThemeExtension::new().with(
            "spacing",
            RawToken::group([("18", RawToken::Bool(true))]),
        );
        let err = ext.tokens().unwrap_err();
        assert_eq!(err.path(), "spacing.18");
    }

    #[test]
    fn test_keyframes_are_composite() {
        let ext = ThemeExtension::new().with(
            "keyframes",
            RawToken::group([(
                "pulse-green",
                RawToken::group([
                    ("0%, 100%", RawToken::leaves([("opacity", "1")])),
                    (
                        "50%",
                        RawToken::leaves([("opacity", ".7"), ("backgroundColor", "#a7f3d0")]),
                    ),
                ]),
            )]),
        );

        let tokens = ext.tokens().unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, "keyframes.pulse-green");
        let frames = tokens[0].1.as_keyframes().unwrap();
        assert_eq!(frames.stops().len(), 2);
        assert_eq!(frames.stops()[1].declarations["backgroundColor"], "#a7f3d0");
    }

    #[test]
    fn test_malformed_keyframes_are_rejected() {
        let ext = ThemeExtension::new().with(
            "keyframes",
            RawToken::group([("spin", RawToken::Text("rotate".into()))]),
        );
        let err = ext.tokens().unwrap_err();
        assert!(matches!(err, ThemeError::InvalidToken { ref path, .. } if path == "keyframes.spin"));
    }
}
