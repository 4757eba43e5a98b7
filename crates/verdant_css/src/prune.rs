//! Usage-based pruning

use rustc_hash::FxHashSet;
use tracing::info;

use crate::rule::Rule;
use crate::scan::ContentSet;
use crate::stylesheet::Stylesheet;

/// Drop every rule none of whose owner classes occur in `content`
///
/// Rules without owners are kept. Keyframes are kept only when a
/// surviving rule's `animation` or `animation-name` names them.
pub fn prune_unused(sheet: Stylesheet, content: &ContentSet) -> Stylesheet {
    let before = sheet.rule_count();

    let keep = |rule: &Rule| {
        rule.owners.is_empty() || rule.owners.iter().any(|owner| content.contains(owner))
    };
    let components: Vec<Rule> = sheet.components.into_iter().filter(|r| keep(r)).collect();
    let utilities: Vec<Rule> = sheet.utilities.into_iter().filter(|r| keep(r)).collect();

    let animated = animation_names(components.iter().chain(&utilities));
    let keyframes = sheet
        .keyframes
        .into_iter()
        .filter(|k| animated.contains(k.name.as_str()))
        .collect();

    let pruned = Stylesheet {
        components,
        keyframes,
        utilities,
    };
    info!(before, after = pruned.rule_count(), "pruned unused rules");
    pruned
}

/// Identifiers mentioned by `animation` / `animation-name` declarations
fn animation_names<'a>(rules: impl Iterator<Item = &'a Rule>) -> FxHashSet<&'a str> {
    rules
        .flat_map(|rule| rule.declarations.iter())
        .filter(|d| d.property == "animation" || d.property == "animation-name")
        .flat_map(|d| d.value.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentDefinition;
    use crate::rule::{Declaration, KeyframesRule};
    use verdant_theme::TokenRegistry;

    fn keyframes(name: &str) -> KeyframesRule {
        KeyframesRule {
            name: name.to_string(),
            stops: vec![("to".to_string(), vec![Declaration::new("opacity", "1")])],
        }
    }

    fn sheet() -> Stylesheet {
        Stylesheet {
            components: vec![
                Rule::new(".btn-primary", ".btn-primary", vec!["btn-primary".into()])
                    .declare("color", "white"),
                Rule::new(".btn-primary:hover", ".btn-primary", vec!["btn-primary".into()])
                    .declare("color", "black"),
                Rule::new(".btn-secondary", ".btn-secondary", vec!["btn-secondary".into()])
                    .declare("color", "green"),
                Rule::new("body", "body", Vec::new()).declare("margin", "0"),
                Rule::new(".spinner", ".spinner", vec!["spinner".into()])
                    .declare("animation", "spin 1s linear infinite"),
            ],
            keyframes: vec![keyframes("spin"), keyframes("pulse-green")],
            utilities: vec![
                Rule::utility("animate-pulse-green").declare("animation", "pulse-green 2s infinite"),
                Rule::utility("bg-app").declare("background-color", "#f0fdf4"),
            ],
        }
    }

    #[test]
    fn test_unused_owners_are_dropped() {
        let content = ContentSet::from_text(r#"<a class="btn-primary bg-app">"#);
        let pruned = prune_unused(sheet(), &content);
        let selectors: Vec<&str> = pruned.components.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".btn-primary", ".btn-primary:hover", "body"]);
        assert_eq!(pruned.utilities.len(), 1);
        assert!(pruned.keyframes.is_empty());
    }

    #[test]
    fn test_keyframes_follow_animation_usage() {
        let content = ContentSet::from_text("spinner");
        let pruned = prune_unused(sheet(), &content);
        let names: Vec<&str> = pruned.keyframes.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["spin"]);

        let content = ContentSet::from_text("animate-pulse-green");
        let pruned = prune_unused(sheet(), &content);
        let names: Vec<&str> = pruned.keyframes.iter().map(|k| k.name.as_str()).collect();
        assert_eq!(names, vec!["pulse-green"]);
    }

    #[test]
    fn test_selector_list_kept_by_any_member() {
        let def = ComponentDefinition::new(".a, .b")
            .declare("color", "red")
            .nest("&:hover", ComponentDefinition::new("").declare("color", "blue"));
        let components = def.emit(&TokenRegistry::with_defaults()).unwrap();
        let sheet = || Stylesheet {
            components: components.clone(),
            ..Stylesheet::default()
        };

        let pruned = prune_unused(sheet(), &ContentSet::from_text(r#"<i class="b">"#));
        let selectors: Vec<&str> = pruned.components.iter().map(|r| r.selector.as_str()).collect();
        assert_eq!(selectors, vec![".a, .b", ".a:hover, .b:hover"]);

        let pruned = prune_unused(sheet(), &ContentSet::from_text(r#"<i class="c">"#));
        assert!(pruned.components.is_empty());
    }
}
