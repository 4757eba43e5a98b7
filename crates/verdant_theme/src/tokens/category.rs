//! Theme categories and token kinds

use std::fmt::{Display, Formatter};

/// Tag describing what a token value holds
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum TokenKind {
    Color,
    Length,
    Shadow,
    Animation,
    FontWeight,
    FontStack,
    Filter,
    Keyframes,
    Raw,
}

impl TokenKind {
    /// Human-readable name, used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Self::Color => "a color",
            Self::Length => "a length",
            Self::Shadow => "a shadow",
            Self::Animation => "an animation",
            Self::FontWeight => "a font weight",
            Self::FontStack => "a font stack",
            Self::Filter => "a filter",
            Self::Keyframes => "a keyframes block",
            Self::Raw => "a raw value",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Top-level theme category (the first segment of a token path)
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ThemeCategory {
    Colors,
    BackgroundColor,
    TextColor,
    BorderColor,
    RingColor,
    GradientColorStops,
    BoxShadow,
    Animation,
    Keyframes,
    FontFamily,
    FontSize,
    FontWeight,
    Spacing,
    BorderRadius,
    BackdropBlur,
}

impl ThemeCategory {
    /// Configuration key for this category, as written in `theme.extend`
    pub fn key(self) -> &'static str {
        match self {
            Self::Colors => "colors",
            Self::BackgroundColor => "backgroundColor",
            Self::TextColor => "textColor",
            Self::BorderColor => "borderColor",
            Self::RingColor => "ringColor",
            Self::GradientColorStops => "gradientColorStops",
            Self::BoxShadow => "boxShadow",
            Self::Animation => "animation",
            Self::Keyframes => "keyframes",
            Self::FontFamily => "fontFamily",
            Self::FontSize => "fontSize",
            Self::FontWeight => "fontWeight",
            Self::Spacing => "spacing",
            Self::BorderRadius => "borderRadius",
            Self::BackdropBlur => "backdropBlur",
        }
    }

    /// Look up a category by its configuration key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|c| c.key() == key)
    }

    /// Full category list, in utility emission order
    pub fn all() -> &'static [ThemeCategory] {
        const CATEGORIES: [ThemeCategory; 15] = [
            ThemeCategory::Colors,
            ThemeCategory::BackgroundColor,
            ThemeCategory::TextColor,
            ThemeCategory::BorderColor,
            ThemeCategory::RingColor,
            ThemeCategory::GradientColorStops,
            ThemeCategory::BoxShadow,
            ThemeCategory::Animation,
            ThemeCategory::Keyframes,
            ThemeCategory::FontFamily,
            ThemeCategory::FontSize,
            ThemeCategory::FontWeight,
            ThemeCategory::Spacing,
            ThemeCategory::BorderRadius,
            ThemeCategory::BackdropBlur,
        ];
        &CATEGORIES
    }

    /// Tag given to scalar values declared under this category
    pub fn kind(self) -> TokenKind {
        match self {
            Self::Colors
            | Self::BackgroundColor
            | Self::TextColor
            | Self::BorderColor
            | Self::RingColor
            | Self::GradientColorStops => TokenKind::Color,
            Self::Spacing | Self::BorderRadius | Self::FontSize => TokenKind::Length,
            Self::BoxShadow => TokenKind::Shadow,
            Self::Animation => TokenKind::Animation,
            Self::Keyframes => TokenKind::Keyframes,
            Self::FontFamily => TokenKind::FontStack,
            Self::FontWeight => TokenKind::FontWeight,
            Self::BackdropBlur => TokenKind::Filter,
        }
    }
}

impl Display for ThemeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Tag for a path whose first segment may or may not be a known category
pub fn kind_for_path(path: &str) -> TokenKind {
    let head = path.split('.').next().unwrap_or_default();
    ThemeCategory::from_key(head)
        .map(ThemeCategory::kind)
        .unwrap_or(TokenKind::Raw)
}
