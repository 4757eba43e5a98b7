//! Component class definitions
//!
//! A component is a selector with an ordered body. Body entries are either
//! declarations (`background-color = "theme(colors.primary.600)"`) or nested
//! blocks keyed by a relative selector (`"&:hover"`, `"&.active"`).
//!
//! Emission resolves every value template against the registry and yields
//! the parent rule first, then each nested block in declaration order.

use indexmap::IndexMap;
use serde::Deserialize;
use verdant_theme::TokenRegistry;

use crate::error::{CssError, Result};
use crate::rule::{Declaration, Rule};
use crate::selector::{nest, owner_classes};
use crate::template::ValueTemplate;

/// Ordered body of a component or nested block
pub type StyleBlock = IndexMap<String, StyleValue>;

/// Right-hand side of a body entry
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StyleValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Block(StyleBlock),
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

/// A named component class and its body
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentDefinition {
    pub selector: String,
    pub body: StyleBlock,
}

impl ComponentDefinition {
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            body: StyleBlock::new(),
        }
    }

    /// Add a declaration
    pub fn declare(mut self, property: &str, value: &str) -> Self {
        self.body.insert(property.to_string(), StyleValue::from(value));
        self
    }

    /// Add a nested block
    pub fn nest(mut self, key: &str, block: ComponentDefinition) -> Self {
        self.body.insert(key.to_string(), StyleValue::Block(block.body));
        self
    }

    /// Resolve the definition into rules
    pub fn emit(&self, registry: &TokenRegistry) -> Result<Vec<Rule>> {
        let selector = self.selector.trim();
        if selector.is_empty() {
            return Err(CssError::InvalidSelector {
                selector: self.selector.clone(),
                message: "component selector is empty".to_string(),
            });
        }

        let owners = owner_classes(selector);
        let mut rules = Vec::new();
        emit_block(selector, selector, &owners, &self.body, registry, &mut rules)?;
        Ok(rules)
    }
}

fn emit_block(
    component: &str,
    selector: &str,
    owners: &[String],
    body: &StyleBlock,
    registry: &TokenRegistry,
    out: &mut Vec<Rule>,
) -> Result<()> {
    let mut rule = Rule::new(selector, component, owners.to_vec());
    let mut nested = Vec::new();

    for (key, value) in body {
        let text = match value {
            StyleValue::Block(inner) => {
                if key.trim_start().starts_with('@') {
                    return Err(CssError::InvalidSelector {
                        selector: key.clone(),
                        message: "at-rules are not supported inside component bodies".to_string(),
                    });
                }
                nested.push((key, inner));
                continue;
            }
            StyleValue::Text(text) => text.clone(),
            StyleValue::Integer(n) => n.to_string(),
            StyleValue::Float(_) => {
                return Err(CssError::InvalidValue {
                    selector: selector.to_string(),
                    property: key.clone(),
                    message: "unquoted floats lose their literal text; write the value as a string"
                        .to_string(),
                });
            }
        };

        let template = ValueTemplate::parse(&text)?;
        let value = template.render(registry).map_err(|source| CssError::Token {
            selector: selector.to_string(),
            property: key.clone(),
            source,
        })?;
        rule.push(Declaration::new(key, value));
    }

    if !rule.declarations.is_empty() {
        out.push(rule);
    }

    for (key, inner) in nested {
        emit_block(component, &nest(selector, key), owners, inner, registry, out)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_theme::TokenValue;

    fn registry() -> TokenRegistry {
        let mut registry = TokenRegistry::with_defaults();
        for (shade, hex) in [("600", "#059669"), ("700", "#047857"), ("800", "#065f46")] {
            registry.insert(format!("colors.primary.{shade}"), TokenValue::Color(hex.into()));
        }
        registry
    }

    fn button() -> ComponentDefinition {
        ComponentDefinition::new(".btn-primary")
            .declare("backgroundColor", "theme(colors.primary.600)")
            .declare("padding", "theme(spacing.2) theme(spacing.4)")
            .nest(
                "&:hover",
                ComponentDefinition::new("").declare("backgroundColor", "theme(colors.primary.700)"),
            )
            .declare("fontWeight", "theme(fontWeight.semibold)")
            .nest(
                "&:active",
                ComponentDefinition::new("").declare("transform", "translateY(0)"),
            )
    }

    #[test]
    fn test_emit_parent_then_nested_in_order() {
        let rules = button().emit(&registry()).unwrap();
        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(
            selectors,
            vec![".btn-primary", ".btn-primary:hover", ".btn-primary:active"]
        );

        let parent = &rules[0];
        let props: Vec<&str> = parent.declarations.iter().map(|d| d.property.as_str()).collect();
        assert_eq!(props, vec!["background-color", "padding", "font-weight"]);
        assert_eq!(parent.get("padding"), Some("0.5rem 1rem"));
        assert_eq!(parent.get("font-weight"), Some("600"));
        assert_eq!(rules[1].get("background-color"), Some("#047857"));
    }

    #[test]
    fn test_rules_share_owner_and_component() {
        let rules = button().emit(&registry()).unwrap();
        for rule in &rules {
            assert_eq!(rule.owners, vec!["btn-primary"]);
            assert_eq!(rule.component, ".btn-primary");
        }
    }

    #[test]
    fn test_unresolved_token_names_selector_and_property() {
        let def = ComponentDefinition::new(".alert").nest(
            "&:hover",
            ComponentDefinition::new("").declare("color", "theme(colors.sage.600)"),
        );
        let err = def.emit(&registry()).unwrap_err();
        match err {
            CssError::Token {
                selector,
                property,
                source,
            } => {
                assert_eq!(selector, ".alert:hover");
                assert_eq!(property, "color");
                assert_eq!(source.path(), "colors.sage.600");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_parent_is_skipped() {
        let def = ComponentDefinition::new(".only-hover").nest(
            "&:hover",
            ComponentDefinition::new("").declare("opacity", "0.5"),
        );
        let rules = def.emit(&registry()).unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].selector, ".only-hover:hover");
    }

    #[test]
    fn test_unquoted_float_is_rejected() {
        let mut def = ComponentDefinition::new(".fade").declare("opacity", "0.50");
        let rules = def.emit(&registry()).unwrap();
        assert_eq!(rules[0].get("opacity"), Some("0.50"));

        def.body.insert("lineHeight".to_string(), StyleValue::Float(1.5));
        match def.emit(&registry()).unwrap_err() {
            CssError::InvalidValue { selector, property, .. } => {
                assert_eq!(selector, ".fade");
                assert_eq!(property, "lineHeight");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_empty_selector_is_rejected() {
        let def = ComponentDefinition::new("  ").declare("color", "red");
        assert!(matches!(
            def.emit(&registry()),
            Err(CssError::InvalidSelector { .. })
        ));
    }
}
