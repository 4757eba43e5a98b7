//! Stylesheet assembly and rendering

use std::fmt::Write;
use std::sync::OnceLock;

use regex::Regex;

use crate::rule::{Declaration, KeyframesRule, Rule};

/// Output formatting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputStyle {
    /// Two-space indentation, one blank line between rules
    #[default]
    Pretty,
    /// No insignificant whitespace
    Minified,
}

impl OutputStyle {
    pub fn from_minify(minify: bool) -> Self {
        if minify {
            Self::Minified
        } else {
            Self::Pretty
        }
    }
}

/// A generated stylesheet: components, then keyframes, then utilities
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    pub components: Vec<Rule>,
    pub keyframes: Vec<KeyframesRule>,
    pub utilities: Vec<Rule>,
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| {
        Regex::new(r"@verdant\s+(components|utilities)\s*;").expect("directive regex is valid")
    })
}

impl Stylesheet {
    /// Style rules plus keyframes blocks
    pub fn rule_count(&self) -> usize {
        self.components.len() + self.keyframes.len() + self.utilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rule_count() == 0
    }

    /// Every style rule, in output order
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.components.iter().chain(&self.utilities)
    }

    /// Find a style rule by its exact selector
    pub fn rule(&self, selector: &str) -> Option<&Rule> {
        self.rules().find(|r| r.selector == selector)
    }

    /// Render the whole sheet
    pub fn render(&self, style: OutputStyle) -> String {
        let mut blocks = self.component_blocks(style);
        blocks.extend(self.utility_blocks(style));
        join_blocks(&blocks, style)
    }

    /// Render into an input template
    ///
    /// `@verdant components;` receives component rules and keyframes,
    /// `@verdant utilities;` receives utility rules. A section whose
    /// directive is missing is appended after the template.
    pub fn render_with_template(&self, template: &str, style: OutputStyle) -> String {
        let components = join_blocks(&self.component_blocks(style), style);
        let utilities = join_blocks(&self.utility_blocks(style), style);

        let mut seen_components = false;
        let mut seen_utilities = false;
        let mut out = directive_regex()
            .replace_all(template, |caps: &regex::Captures<'_>| {
                if &caps[1] == "components" {
                    seen_components = true;
                    components.trim_end().to_string()
                } else {
                    seen_utilities = true;
                    utilities.trim_end().to_string()
                }
            })
            .into_owned();

        for (seen, section) in [(seen_components, &components), (seen_utilities, &utilities)] {
            if seen || section.is_empty() {
                continue;
            }
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            if style == OutputStyle::Pretty && !out.is_empty() {
                out.push('\n');
            }
            out.push_str(section);
        }
        out
    }

    fn component_blocks(&self, style: OutputStyle) -> Vec<String> {
        self.components
            .iter()
            .map(|r| render_rule(r, style))
            .chain(self.keyframes.iter().map(|k| render_keyframes(k, style)))
            .collect()
    }

    fn utility_blocks(&self, style: OutputStyle) -> Vec<String> {
        self.utilities.iter().map(|r| render_rule(r, style)).collect()
    }
}

fn join_blocks(blocks: &[String], style: OutputStyle) -> String {
    if blocks.is_empty() {
        return String::new();
    }
    match style {
        OutputStyle::Pretty => {
            let mut out = blocks.join("\n\n");
            out.push('\n');
            out
        }
        OutputStyle::Minified => {
            let mut out = blocks.concat();
            out.push('\n');
            out
        }
    }
}

fn render_rule(rule: &Rule, style: OutputStyle) -> String {
    match style {
        OutputStyle::Pretty => {
            let mut out = format!("{} {{\n", rule.selector);
            write_declarations(&mut out, &rule.declarations, "  ");
            out.push('}');
            out
        }
        OutputStyle::Minified => format!(
            "{}{{{}}}",
            minify_selector(&rule.selector),
            minify_declarations(&rule.declarations)
        ),
    }
}

fn render_keyframes(keyframes: &KeyframesRule, style: OutputStyle) -> String {
    match style {
        OutputStyle::Pretty => {
            let mut out = format!("@keyframes {} {{\n", keyframes.name);
            for (offset, declarations) in &keyframes.stops {
                let _ = writeln!(out, "  {offset} {{");
                write_declarations(&mut out, declarations, "    ");
                out.push_str("  }\n");
            }
            out.push('}');
            out
        }
        OutputStyle::Minified => {
            let mut out = format!("@keyframes {}{{", keyframes.name);
            for (offset, declarations) in &keyframes.stops {
                let _ = write!(
                    out,
                    "{}{{{}}}",
                    minify_selector(offset),
                    minify_declarations(declarations)
                );
            }
            out.push('}');
            out
        }
    }
}

fn write_declarations(out: &mut String, declarations: &[Declaration], indent: &str) {
    for d in declarations {
        let _ = writeln!(out, "{indent}{}: {};", d.property, d.value);
    }
}

fn minify_declarations(declarations: &[Declaration]) -> String {
    declarations
        .iter()
        .map(|d| format!("{}:{}", d.property, d.value))
        .collect::<Vec<_>>()
        .join(";")
}

fn minify_selector(selector: &str) -> String {
    selector
        .split(',')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(",")
}
