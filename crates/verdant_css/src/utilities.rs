//! Extension utilities
//!
//! Every token declared in `theme.extend` gets single-purpose utility
//! classes (`bg-app`, `shadow-green-md`, `p-18` ...). Base defaults do not:
//! the base utility catalogue is supplied by the host framework.
//!
//! Keyframes are collected from the whole registry so that animations
//! referencing base keyframes (`spin`) still find them.

use tracing::debug;
use verdant_theme::{ThemeCategory, ThemeExtension, TokenRegistry, TokenValue, DEFAULT_KEY};

use crate::error::{CssError, Result};
use crate::rule::{KeyframesRule, Rule};

/// Prefix for custom properties written by generated utilities
pub const VAR_PREFIX: &str = "--vd";

/// Utility rules and keyframes derived from a theme
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Utilities {
    pub rules: Vec<Rule>,
    pub keyframes: Vec<KeyframesRule>,
}

/// Generate utilities for every extension token, in declaration order
pub fn extension_utilities(extension: &ThemeExtension, registry: &TokenRegistry) -> Result<Utilities> {
    let mut rules = Vec::new();

    for (path, value) in extension.tokens()? {
        // `boxShadow.DEFAULT` also registers `boxShadow`, which names the
        // category's bare utility (`shadow`).
        let (head, key) = path.split_once('.').unwrap_or((path.as_str(), ""));
        if key == DEFAULT_KEY || key.ends_with(".DEFAULT") {
            continue;
        }
        let Some(category) = ThemeCategory::from_key(head) else {
            debug!(path = %path, "no utilities for unknown theme category");
            continue;
        };
        if category == ThemeCategory::Keyframes {
            continue;
        }
        if key.is_empty() && !has_bare_utility(category) {
            debug!(path = %path, "category has no bare utility");
            continue;
        }

        // A DEFAULT leaf also registers its parent path; that parent is what
        // the rest of the registry sees, so use the registry's value.
        let value = registry.get(&path).unwrap_or(&value);
        let css = value.css_value(&path).map_err(|source| CssError::Token {
            selector: format!("{head} utilities"),
            property: key.to_string(),
            source,
        })?;

        let name = utility_name(category, key);
        rules.extend(category_rules(category, &name, &css));
    }

    let keyframes = registry
        .group("keyframes")
        .filter_map(|(name, value)| match value {
            TokenValue::Keyframes(frames) => Some(KeyframesRule::from_token(name, frames)),
            _ => None,
        })
        .collect();

    debug!(rules = rules.len(), "generated extension utilities");
    Ok(Utilities { rules, keyframes })
}

/// Utility suffix for a key inside `category`
///
/// Color ramps nest (`primary.600` → `primary-600`); every other category
/// keeps the key as written (`spacing.0.5` → `0.5`).
fn utility_name(category: ThemeCategory, key: &str) -> String {
    match category {
        ThemeCategory::Colors => key.replace('.', "-"),
        _ => key.to_string(),
    }
}

/// Categories whose `DEFAULT` maps to an unsuffixed class (`shadow`, `rounded`)
fn has_bare_utility(category: ThemeCategory) -> bool {
    matches!(
        category,
        ThemeCategory::BoxShadow | ThemeCategory::BorderRadius | ThemeCategory::BackdropBlur
    )
}

/// `prefix-name`, or just `prefix` for an empty name
fn class_name(prefix: &str, name: &str) -> String {
    if name.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix}-{name}")
    }
}

fn category_rules(category: ThemeCategory, name: &str, css: &str) -> Vec<Rule> {
    let single = |class: String, property: &str| vec![Rule::utility(&class).declare(property, css)];

    match category {
        ThemeCategory::Colors => vec![
            Rule::utility(&format!("bg-{name}")).declare("background-color", css),
            Rule::utility(&format!("text-{name}")).declare("color", css),
            Rule::utility(&format!("border-{name}")).declare("border-color", css),
        ],
        ThemeCategory::BackgroundColor => single(format!("bg-{name}"), "background-color"),
        ThemeCategory::TextColor => single(format!("text-{name}"), "color"),
        ThemeCategory::BorderColor => single(format!("border-{name}"), "border-color"),
        ThemeCategory::RingColor => {
            single(format!("ring-{name}"), &format!("{VAR_PREFIX}-ring-color"))
        }
        ThemeCategory::GradientColorStops => gradient_rules(name, css),
        ThemeCategory::BoxShadow => single(class_name("shadow", name), "box-shadow"),
        ThemeCategory::Animation => single(format!("animate-{name}"), "animation"),
        ThemeCategory::FontFamily => single(format!("font-{name}"), "font-family"),
        ThemeCategory::FontSize => single(format!("text-{name}"), "font-size"),
        ThemeCategory::FontWeight => single(format!("font-{name}"), "font-weight"),
        ThemeCategory::BorderRadius => single(class_name("rounded", name), "border-radius"),
        ThemeCategory::BackdropBlur => {
            single(class_name("backdrop-blur", name), "backdrop-filter")
        }
        ThemeCategory::Spacing => vec![
            Rule::utility(&format!("p-{name}")).declare("padding", css),
            Rule::utility(&format!("px-{name}"))
                .declare("padding-left", css)
                .declare("padding-right", css),
            Rule::utility(&format!("py-{name}"))
                .declare("padding-top", css)
                .declare("padding-bottom", css),
            Rule::utility(&format!("m-{name}")).declare("margin", css),
            Rule::utility(&format!("w-{name}")).declare("width", css),
            Rule::utility(&format!("h-{name}")).declare("height", css),
            Rule::utility(&format!("gap-{name}")).declare("gap", css),
        ],
        ThemeCategory::Keyframes => Vec::new(),
    }
}

fn gradient_rules(name: &str, css: &str) -> Vec<Rule> {
    let from = format!("{VAR_PREFIX}-gradient-from");
    let to = format!("{VAR_PREFIX}-gradient-to");
    let stops = format!("{VAR_PREFIX}-gradient-stops");
    vec![
        Rule::utility(&format!("from-{name}"))
            .declare(&from, css)
            .declare(&to, "transparent")
            .declare(&stops, format!("var({from}), var({to})")),
        Rule::utility(&format!("via-{name}"))
            .declare(&to, "transparent")
            .declare(&stops, format!("var({from}), {css}, var({to})")),
        Rule::utility(&format!("to-{name}")).declare(&to, css),
    ]
}
