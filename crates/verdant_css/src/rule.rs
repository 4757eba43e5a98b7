//! Emitted CSS rules

/// A single `property: value` pair
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    /// Create a declaration, normalising a camelCase property to kebab-case
    pub fn new(property: &str, value: impl Into<String>) -> Self {
        Self {
            property: kebab_case(property),
            value: value.into(),
        }
    }
}

/// A style rule
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    /// Full selector text, e.g. `.btn-primary:hover`
    pub selector: String,
    /// Root selector of the definition that produced this rule
    pub component: String,
    /// Classes whose usage keeps this rule (any one suffices); empty keeps it unconditionally
    pub owners: Vec<String>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selector: impl Into<String>, component: impl Into<String>, owners: Vec<String>) -> Self {
        Self {
            selector: selector.into(),
            component: component.into(),
            owners,
            declarations: Vec::new(),
        }
    }

    /// A standalone utility rule for `.class`
    pub fn utility(class: &str) -> Self {
        let selector = crate::selector::class_selector(class);
        Self::new(selector.clone(), selector, vec![class.to_string()])
    }

    pub fn declare(mut self, property: &str, value: impl Into<String>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    pub fn push(&mut self, declaration: Declaration) {
        self.declarations.push(declaration);
    }

    /// Value of the last declaration for `property`
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }
}

/// An `@keyframes` block
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyframesRule {
    pub name: String,
    pub stops: Vec<(String, Vec<Declaration>)>,
}

impl KeyframesRule {
    /// Build from a keyframes token
    pub fn from_token(name: &str, frames: &verdant_theme::Keyframes) -> Self {
        let stops = frames
            .stops()
            .iter()
            .map(|stop| {
                let decls = stop
                    .declarations
                    .iter()
                    .map(|(property, value)| Declaration::new(property, value.clone()))
                    .collect();
                (stop.offset.clone(), decls)
            })
            .collect();
        Self {
            name: name.to_string(),
            stops,
        }
    }
}

/// Convert `backgroundColor` to `background-color`
///
/// Custom properties (`--x`) and already kebab-cased names pass through.
/// Vendor prefixes gain their leading dash (`WebkitTransition`,
/// `msTransform`).
pub fn kebab_case(property: &str) -> String {
    if property.starts_with("--") || !property.chars().any(|c| c.is_ascii_uppercase()) {
        return property.to_string();
    }

    let mut out = String::with_capacity(property.len() + 4);
    if property.starts_with("ms") && property[2..].starts_with(|c: char| c.is_ascii_uppercase()) {
        out.push('-');
    }
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
