//! Selector helpers
//!
//! Nesting (`&:hover` under `.btn-primary`), owner-class extraction used by
//! pruning, and class-name escaping for generated utilities.

/// Compose a nested block key with its parent selector
///
/// `&` is replaced by the parent (`&:hover` → `.btn:hover`, `&.active` →
/// `.btn.active`); a key without `&` is a descendant (`svg` → `.btn svg`).
/// Parent selector lists are expanded member by member.
pub fn nest(parent: &str, key: &str) -> String {
    let key = key.trim();
    split_list(parent)
        .map(|p| {
            if key.contains('&') {
                key.replace('&', p)
            } else {
                format!("{p} {key}")
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn split_list(selector: &str) -> impl Iterator<Item = &str> {
    selector.split(',').map(str::trim).filter(|s| !s.is_empty())
}

/// The first class named in `selector`, unescaped
///
/// `.nav-link-green.active` → `nav-link-green`, `.p-0\.5` → `p-0.5`,
/// `h1` → `None`.
pub fn owner_class(selector: &str) -> Option<String> {
    let mut chars = selector.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '.' => {
                let mut name = String::new();
                while let Some(&next) = chars.peek() {
                    if next == '\\' {
                        chars.next();
                        if let Some(escaped) = chars.next() {
                            name.push(escaped);
                        }
                    } else if is_class_char(next) {
                        name.push(next);
                        chars.next();
                    } else {
                        break;
                    }
                }
                if !name.is_empty() {
                    return Some(name);
                }
            }
            _ => {}
        }
    }
    None
}

/// The owner class of every member of a selector list, deduplicated
///
/// `.a:hover, .b:hover` → `[a, b]`. Members without a class contribute
/// nothing, so `h1, h2` → `[]`.
pub fn owner_classes(selector: &str) -> Vec<String> {
    let mut owners: Vec<String> = Vec::new();
    for member in split_list(selector) {
        if let Some(owner) = owner_class(member) {
            if !owners.contains(&owner) {
                owners.push(owner);
            }
        }
    }
    owners
}

/// Escape a class name for use in a selector
pub fn escape_class(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if !is_class_char(c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// `.` followed by the escaped class name
pub fn class_selector(name: &str) -> String {
    format!(".{}", escape_class(name))
}

/// Characters allowed unescaped in a class name
pub fn is_class_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_' || !c.is_ascii()
}
