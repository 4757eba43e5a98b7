//! Tagged token values

use std::borrow::Cow;

use super::{Keyframes, TokenKind};
use crate::error::{Result, ThemeError};

/// A resolved design token
///
/// Scalar variants hold the literal exactly as it was declared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenValue {
    Color(String),
    Length(String),
    Shadow(String),
    Animation(String),
    FontWeight(String),
    FontStack(Vec<String>),
    Filter(String),
    Keyframes(Keyframes),
    Raw(String),
}

impl TokenValue {
    /// Wrap a scalar literal in the variant matching `kind`
    ///
    /// A scalar declared where keyframes are expected has no composite
    /// structure and is kept as [`TokenValue::Raw`].
    pub fn scalar(kind: TokenKind, literal: impl Into<String>) -> Self {
        let literal = literal.into();
        match kind {
            TokenKind::Color => Self::Color(literal),
            TokenKind::Length => Self::Length(literal),
            TokenKind::Shadow => Self::Shadow(literal),
            TokenKind::Animation => Self::Animation(literal),
            TokenKind::FontWeight => Self::FontWeight(literal),
            TokenKind::FontStack => Self::FontStack(vec![literal]),
            TokenKind::Filter => Self::Filter(literal),
            TokenKind::Keyframes | TokenKind::Raw => Self::Raw(literal),
        }
    }

    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Color(_) => TokenKind::Color,
            Self::Length(_) => TokenKind::Length,
            Self::Shadow(_) => TokenKind::Shadow,
            Self::Animation(_) => TokenKind::Animation,
            Self::FontWeight(_) => TokenKind::FontWeight,
            Self::FontStack(_) => TokenKind::FontStack,
            Self::Filter(_) => TokenKind::Filter,
            Self::Keyframes(_) => TokenKind::Keyframes,
            Self::Raw(_) => TokenKind::Raw,
        }
    }

    /// The declared literal for scalar tokens
    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Color(v)
            | Self::Length(v)
            | Self::Shadow(v)
            | Self::Animation(v)
            | Self::FontWeight(v)
            | Self::Filter(v)
            | Self::Raw(v) => Some(v),
            Self::FontStack(_) | Self::Keyframes(_) => None,
        }
    }

    pub fn as_keyframes(&self) -> Option<&Keyframes> {
        match self {
            Self::Keyframes(frames) => Some(frames),
            _ => None,
        }
    }

    /// Text used when this token is substituted into a property value
    ///
    /// Font stacks are joined with `", "`. Keyframes have no such form.
    pub fn to_css(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::FontStack(families) => Some(Cow::Owned(families.join(", "))),
            Self::Keyframes(_) => None,
            other => other.as_literal().map(Cow::Borrowed),
        }
    }

    /// Like [`TokenValue::to_css`], reporting `path` when the token cannot be interpolated
    pub fn css_value(&self, path: &str) -> Result<Cow<'_, str>> {
        self.to_css().ok_or_else(|| ThemeError::NotInterpolable {
            path: path.to_string(),
            kind: self.kind(),
        })
    }
}
