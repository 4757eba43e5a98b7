//! Component plugins
//!
//! A plugin is a pure function from the token registry to a sequence of
//! rules. Plugins run in declaration order; their output is concatenated
//! without reordering.
//!
//! When two plugins (or one plugin twice) define the same component
//! selector, the later definition wins and takes the earlier one's slot.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, warn};
use verdant_theme::TokenRegistry;

use crate::component::{ComponentDefinition, StyleBlock};
use crate::error::Result;
use crate::rule::Rule;

/// A provider of component rules
pub trait ComponentPlugin {
    /// Name used in diagnostics
    fn name(&self) -> &str;

    /// Produce rules for this plugin's components
    fn components(&self, theme: &TokenRegistry) -> Result<Vec<Rule>>;

    /// Rules grouped by the component that defined them
    ///
    /// The default groups consecutive rules sharing a component. Plugins
    /// that know their definitions up front return one group per definition,
    /// empty ones included, so that an empty redefinition still replaces an
    /// earlier one.
    fn component_groups(&self, theme: &TokenRegistry) -> Result<Vec<ComponentGroup>> {
        Ok(group_by_component(self.components(theme)?))
    }
}

/// A component selector and the rules it emitted
pub type ComponentGroup = (String, Vec<Rule>);

/// Any `Fn(&TokenRegistry) -> Result<Vec<Rule>>` is a plugin
impl<F> ComponentPlugin for F
where
    F: Fn(&TokenRegistry) -> Result<Vec<Rule>>,
{
    fn name(&self) -> &str {
        "fn"
    }

    fn components(&self, theme: &TokenRegistry) -> Result<Vec<Rule>> {
        self(theme)
    }
}

/// A plugin declared in the configuration file
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct DeclarativePlugin {
    #[serde(default = "default_plugin_name")]
    pub name: String,
    /// Component selector → body, in declaration order
    #[serde(default)]
    pub components: IndexMap<String, StyleBlock>,
}

fn default_plugin_name() -> String {
    "components".to_string()
}

impl DeclarativePlugin {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: IndexMap::new(),
        }
    }

    /// Add a component definition
    pub fn with_component(mut self, definition: ComponentDefinition) -> Self {
        self.components.insert(definition.selector, definition.body);
        self
    }

    /// The plugin's definitions, in order
    pub fn definitions(&self) -> impl Iterator<Item = ComponentDefinition> + '_ {
        self.components
            .iter()
            .map(|(selector, body)| ComponentDefinition {
                selector: selector.clone(),
                body: body.clone(),
            })
    }
}

impl ComponentPlugin for DeclarativePlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn components(&self, theme: &TokenRegistry) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();
        for definition in self.definitions() {
            rules.extend(definition.emit(theme)?);
        }
        Ok(rules)
    }

    fn component_groups(&self, theme: &TokenRegistry) -> Result<Vec<ComponentGroup>> {
        self.definitions()
            .map(|definition| -> Result<ComponentGroup> {
                let rules = definition.emit(theme)?;
                Ok((definition.selector.trim().to_string(), rules))
            })
            .collect()
    }
}

/// Run every plugin in order and merge their rules
///
/// Duplicate component selectors resolve last-writer-wins.
pub fn emit_component_classes<'a, I>(plugins: I, registry: &TokenRegistry) -> Result<Vec<Rule>>
where
    I: IntoIterator<Item = &'a dyn ComponentPlugin>,
{
    let mut components: IndexMap<String, Vec<Rule>> = IndexMap::new();

    for plugin in plugins {
        let groups = plugin.component_groups(registry)?;
        debug!(
            plugin = plugin.name(),
            components = groups.len(),
            rules = groups.iter().map(|(_, rules)| rules.len()).sum::<usize>(),
            "emitted component rules"
        );

        for (component, group) in groups {
            if let Some(existing) = components.get_mut(&component) {
                warn!(
                    plugin = plugin.name(),
                    component = %component,
                    "component defined more than once; the later definition wins"
                );
                *existing = group;
            } else {
                components.insert(component, group);
            }
        }
    }

    Ok(components.into_values().flatten().collect())
}

/// Split a rule sequence into runs sharing the same component
fn group_by_component(rules: Vec<Rule>) -> Vec<ComponentGroup> {
    let mut groups: Vec<ComponentGroup> = Vec::new();
    for rule in rules {
        match groups.last_mut() {
            Some((component, group)) if *component == rule.component => group.push(rule),
            _ => groups.push((rule.component.clone(), vec![rule])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CssError;

    fn registry() -> TokenRegistry {
        TokenRegistry::with_defaults()
    }

    #[test]
    fn test_plugins_run_in_order() {
        let first = DeclarativePlugin::new("first")
            .with_component(ComponentDefinition::new(".a").declare("color", "theme(colors.white)"));
        let second = |_: &TokenRegistry| -> Result<Vec<Rule>> {
            Ok(vec![Rule::new(".b", ".b", vec!["b".into()]).declare("color", "red")])
        };

        let plugins: Vec<&dyn ComponentPlugin> = vec![&first, &second];
        let rules = emit_component_classes(plugins, &registry()).unwrap();
        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", ".b"]);
        assert_eq!(rules[0].get("color"), Some("#ffffff"));
    }

    #[test]
    fn test_duplicate_component_last_writer_wins_in_place() {
        let first = DeclarativePlugin::new("first")
            .with_component(ComponentDefinition::new(".a").declare("color", "red"))
            .with_component(ComponentDefinition::new(".b").declare("color", "blue"));
        let second = DeclarativePlugin::new("second").with_component(
            ComponentDefinition::new(".a")
                .declare("color", "green")
                .nest("&:hover", ComponentDefinition::new("").declare("color", "lime")),
        );

        let plugins: Vec<&dyn ComponentPlugin> = vec![&first, &second];
        let rules = emit_component_classes(plugins, &registry()).unwrap();
        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", ".a:hover", ".b"]);
        assert_eq!(rules[0].get("color"), Some("green"));
    }

    #[test]
    fn test_empty_redefinition_replaces_earlier_one() {
        let first = DeclarativePlugin::new("first")
            .with_component(ComponentDefinition::new(".x").declare("color", "red"))
            .with_component(ComponentDefinition::new(".y").declare("color", "blue"));
        let second = DeclarativePlugin::new("second")
            .with_component(ComponentDefinition::new(".x"))
            .with_component(
                ComponentDefinition::new(".y").nest("&:hover", ComponentDefinition::new("")),
            );

        let plugins: Vec<&dyn ComponentPlugin> = vec![&first, &second];
        let rules = emit_component_classes(plugins, &registry()).unwrap();
        assert!(rules.is_empty());
    }

    #[test]
    fn test_closure_plugins_group_by_component() {
        let first = DeclarativePlugin::new("first")
            .with_component(ComponentDefinition::new(".a").declare("color", "red"));
        let second = |_: &TokenRegistry| -> Result<Vec<Rule>> {
            Ok(vec![
                Rule::new(".a", ".a", vec!["a".into()]).declare("color", "teal"),
                Rule::new(".a:hover", ".a", vec!["a".into()]).declare("color", "navy"),
            ])
        };

        let groups = second.component_groups(&registry()).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, ".a");

        let plugins: Vec<&dyn ComponentPlugin> = vec![&first, &second];
        let rules = emit_component_classes(plugins, &registry()).unwrap();
        let selectors: Vec<&str> = rules.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a", ".a:hover"]);
        assert_eq!(rules[0].get("color"), Some("teal"));
    }

    #[test]
    fn test_plugin_error_aborts() {
        let broken = DeclarativePlugin::new("broken")
            .with_component(ComponentDefinition::new(".x").declare("color", "theme(colors.nope)"));
        let plugins: Vec<&dyn ComponentPlugin> = vec![&broken];
        let err = emit_component_classes(plugins, &registry()).unwrap_err();
        assert!(matches!(err, CssError::Token { .. }));
        assert_eq!(err.token_path(), Some("colors.nope"));
    }
}
