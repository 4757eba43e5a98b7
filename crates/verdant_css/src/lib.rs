//! Verdant Stylesheet Generator
//!
//! Turns a `verdant.toml` configuration into a stylesheet: component classes
//! from plugins, utility classes for every `theme.extend` token, and the
//! keyframes their animations need, pruned to the classes that actually
//! occur in the project's content files.
//!
//! # Pipeline
//!
//! 1. [`VerdantConfig`] is parsed and its `theme.extend` merged over the
//!    base defaults into a [`TokenRegistry`]
//! 2. Each [`ComponentPlugin`] emits [`Rule`]s; `theme(path)` lookups in
//!    values are resolved fail-fast
//! 3. [`extension_utilities`] adds utilities and keyframes
//! 4. [`ContentScanner`] collects class-like tokens from the content globs
//!    and [`prune_unused`] drops every rule whose owner class is absent
//! 5. [`Stylesheet::render`] writes pretty or minified CSS
//!
//! # Quick Start
//!
//! ```rust
//! use verdant_css::{ContentSet, Generator, OutputStyle, Preset};
//!
//! let config = Preset::Green.config().unwrap();
//! let generator = Generator::from_config(&config).unwrap();
//!
//! let content = ContentSet::from_text(r#"<button class="btn-primary">Save</button>"#);
//! let css = generator.generate(&content).unwrap().render(OutputStyle::Pretty);
//!
//! assert!(css.contains(".btn-primary:hover {"));
//! assert!(!css.contains(".btn-secondary"));
//! ```
//!
//! [`TokenRegistry`]: verdant_theme::TokenRegistry

pub mod component;
pub mod config;
pub mod error;
pub mod generator;
pub mod plugin;
pub mod presets;
pub mod prune;
pub mod rule;
pub mod scan;
pub mod selector;
pub mod stylesheet;
pub mod template;
pub mod utilities;

pub use component::{ComponentDefinition, StyleBlock, StyleValue};
pub use config::{BuildConfig, VerdantConfig, CONFIG_FILE};
pub use error::{CssError, Result};
pub use generator::Generator;
pub use plugin::{emit_component_classes, ComponentGroup, ComponentPlugin, DeclarativePlugin};
pub use presets::Preset;
pub use prune::prune_unused;
pub use rule::{Declaration, KeyframesRule, Rule};
pub use scan::{ContentScanner, ContentSet};
pub use stylesheet::{OutputStyle, Stylesheet};
pub use template::{render_value, ValueTemplate};
pub use utilities::{extension_utilities, Utilities};
