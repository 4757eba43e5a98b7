//! Base framework defaults
//!
//! The token set every configuration starts from before `theme.extend` is
//! merged in. Values follow the conventional utility-framework defaults.
//! Font sizes carry the size only; line heights are not part of the token.

use crate::registry::TokenRegistry;
use crate::tokens::{Keyframes, ThemeCategory, TokenValue};

/// Single-value colors
pub const BASE_COLORS: &[(&str, &str)] = &[
    ("inherit", "inherit"),
    ("current", "currentColor"),
    ("transparent", "transparent"),
    ("black", "#000000"),
    ("white", "#ffffff"),
];

/// Gray ramp
pub const GRAY: &[(&str, &str)] = &[
    ("50", "#f9fafb"),
    ("100", "#f3f4f6"),
    ("200", "#e5e7eb"),
    ("300", "#d1d5db"),
    ("400", "#9ca3af"),
    ("500", "#6b7280"),
    ("600", "#4b5563"),
    ("700", "#374151"),
    ("800", "#1f2937"),
    ("900", "#111827"),
    ("950", "#030712"),
];

/// 0.25rem-based spacing scale
pub const SPACING: &[(&str, &str)] = &[
    ("px", "1px"),
    ("0", "0px"),
    ("0.5", "0.125rem"),
    ("1", "0.25rem"),
    ("1.5", "0.375rem"),
    ("2", "0.5rem"),
    ("2.5", "0.625rem"),
    ("3", "0.75rem"),
    ("3.5", "0.875rem"),
    ("4", "1rem"),
    ("5", "1.25rem"),
    ("6", "1.5rem"),
    ("7", "1.75rem"),
    ("8", "2rem"),
    ("9", "2.25rem"),
    ("10", "2.5rem"),
    ("11", "2.75rem"),
    ("12", "3rem"),
    ("14", "3.5rem"),
    ("16", "4rem"),
    ("20", "5rem"),
    ("24", "6rem"),
    ("28", "7rem"),
    ("32", "8rem"),
    ("36", "9rem"),
    ("40", "10rem"),
    ("44", "11rem"),
    ("48", "12rem"),
    ("52", "13rem"),
    ("56", "14rem"),
    ("60", "15rem"),
    ("64", "16rem"),
    ("72", "18rem"),
    ("80", "20rem"),
    ("96", "24rem"),
];

pub const BORDER_RADIUS: &[(&str, &str)] = &[
    ("none", "0px"),
    ("sm", "0.125rem"),
    ("DEFAULT", "0.25rem"),
    ("md", "0.375rem"),
    ("lg", "0.5rem"),
    ("xl", "0.75rem"),
    ("2xl", "1rem"),
    ("3xl", "1.5rem"),
    ("full", "9999px"),
];

pub const FONT_SIZE: &[(&str, &str)] = &[
    ("xs", "0.75rem"),
    ("sm", "0.875rem"),
    ("base", "1rem"),
    ("lg", "1.125rem"),
    ("xl", "1.25rem"),
    ("2xl", "1.5rem"),
    ("3xl", "1.875rem"),
    ("4xl", "2.25rem"),
    ("5xl", "3rem"),
    ("6xl", "3.75rem"),
    ("7xl", "4.5rem"),
    ("8xl", "6rem"),
    ("9xl", "8rem"),
];

pub const FONT_WEIGHT: &[(&str, &str)] = &[
    ("thin", "100"),
    ("extralight", "200"),
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("semibold", "600"),
    ("bold", "700"),
    ("extrabold", "800"),
    ("black", "900"),
];

pub const BOX_SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

pub const FONT_FAMILY: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "\"Apple Color Emoji\"",
            "\"Segoe UI Emoji\"",
        ],
    ),
    ("serif", &["ui-serif", "Georgia", "Cambria", "serif"]),
    ("mono", &["ui-monospace", "SFMono-Regular", "Menlo", "monospace"]),
];

/// Default animations
pub const ANIMATION: &[(&str, &str)] = &[
    ("none", "none"),
    ("spin", "spin 1s linear infinite"),
    ("ping", "ping 1s cubic-bezier(0, 0, 0.2, 1) infinite"),
    ("pulse", "pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite"),
    ("bounce", "bounce 1s infinite"),
];

/// Keyframes backing [`ANIMATION`]
pub fn base_keyframes() -> Vec<(&'static str, Keyframes)> {
    vec![
        (
            "spin",
            Keyframes::new().with_stop("to", [("transform", "rotate(360deg)")]),
        ),
        (
            "ping",
            Keyframes::new().with_stop("75%, 100%", [("transform", "scale(2)"), ("opacity", "0")]),
        ),
        (
            "pulse",
            Keyframes::new().with_stop("50%", [("opacity", ".5")]),
        ),
        (
            "bounce",
            Keyframes::new()
                .with_stop(
                    "0%, 100%",
                    [
                        ("transform", "translateY(-25%)"),
                        ("animationTimingFunction", "cubic-bezier(0.8, 0, 1, 1)"),
                    ],
                )
                .with_stop(
                    "50%",
                    [
                        ("transform", "none"),
                        ("animationTimingFunction", "cubic-bezier(0, 0, 0.2, 1)"),
                    ],
                ),
        ),
    ]
}

/// Build the registry holding every base default
pub fn base_registry() -> TokenRegistry {
    let mut registry = TokenRegistry::new();

    insert_all(&mut registry, "colors", ThemeCategory::Colors, BASE_COLORS);
    insert_all(&mut registry, "colors.gray", ThemeCategory::Colors, GRAY);
    insert_all(&mut registry, "spacing", ThemeCategory::Spacing, SPACING);
    insert_all(
        &mut registry,
        "borderRadius",
        ThemeCategory::BorderRadius,
        BORDER_RADIUS,
    );
    insert_all(&mut registry, "fontSize", ThemeCategory::FontSize, FONT_SIZE);
    insert_all(
        &mut registry,
        "fontWeight",
        ThemeCategory::FontWeight,
        FONT_WEIGHT,
    );
    insert_all(&mut registry, "boxShadow", ThemeCategory::BoxShadow, BOX_SHADOW);

    insert_all(&mut registry, "animation", ThemeCategory::Animation, ANIMATION);
    for (name, frames) in base_keyframes() {
        registry.insert(format!("keyframes.{name}"), TokenValue::Keyframes(frames));
    }

    for (name, families) in FONT_FAMILY {
        let stack = families.iter().map(|f| f.to_string()).collect();
        registry.insert(format!("fontFamily.{name}"), TokenValue::FontStack(stack));
    }

    registry
}

fn insert_all(
    registry: &mut TokenRegistry,
    prefix: &str,
    category: ThemeCategory,
    entries: &[(&str, &str)],
) {
    for (key, literal) in entries {
        let value = TokenValue::scalar(category.kind(), *literal);
        if *key == "DEFAULT" {
            registry.insert(prefix.to_string(), value.clone());
        }
        registry.insert(format!("{prefix}.{key}"), value);
    }
}
