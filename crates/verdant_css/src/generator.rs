//! Full generation pass
//!
//! ```text
//! config ─► registry ─► plugins ─► component rules ─┐
//!              │                                    ├─► prune(content) ─► Stylesheet
//!              └──────► extension utilities ────────┘
//! ```

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use verdant_theme::{ThemeExtension, TokenRegistry};

use crate::config::VerdantConfig;
use crate::error::Result;
use crate::plugin::{emit_component_classes, ComponentPlugin};
use crate::prune::prune_unused;
use crate::scan::{ContentScanner, ContentSet};
use crate::stylesheet::Stylesheet;
use crate::utilities::extension_utilities;

/// A configured generator
///
/// Holds the merged registry and the plugin list; every call to
/// [`Generator::build`] is an independent, deterministic pass.
pub struct Generator {
    registry: TokenRegistry,
    extension: ThemeExtension,
    plugins: Vec<Box<dyn ComponentPlugin>>,
    content: Vec<String>,
    root: PathBuf,
}

impl Generator {
    /// A generator with no plugins over `extension` merged into the base defaults
    pub fn new(extension: ThemeExtension) -> Result<Self> {
        Ok(Self {
            registry: TokenRegistry::merged(&extension)?,
            extension,
            plugins: Vec::new(),
            content: Vec::new(),
            root: PathBuf::from("."),
        })
    }

    pub fn from_config(config: &VerdantConfig) -> Result<Self> {
        let mut generator = Self::new(config.theme.extend.clone())?
            .with_content(config.content.clone())
            .with_root(config.base_dir.clone());
        for plugin in &config.plugins {
            generator = generator.with_plugin(plugin.clone());
        }
        debug!(
            tokens = generator.registry.len(),
            plugins = generator.plugins.len(),
            "generator configured"
        );
        Ok(generator)
    }

    /// Append a plugin; plugins run in the order they were added
    pub fn with_plugin(mut self, plugin: impl ComponentPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    pub fn with_content(mut self, globs: Vec<String>) -> Self {
        self.content = globs;
        self
    }

    /// Directory the content globs are relative to
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn registry(&self) -> &TokenRegistry {
        &self.registry
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    /// Resolve a token path to its CSS text
    pub fn resolve(&self, path: &str) -> Result<Cow<'_, str>> {
        Ok(self.registry.resolve_css(path)?)
    }

    /// Every component rule, keyframes block and utility, unpruned
    pub fn emit(&self) -> Result<Stylesheet> {
        let plugins: Vec<&dyn ComponentPlugin> = self.plugins.iter().map(|p| &**p).collect();
        let components = emit_component_classes(plugins, &self.registry)?;
        let utilities = extension_utilities(&self.extension, &self.registry)?;

        Ok(Stylesheet {
            components,
            keyframes: utilities.keyframes,
            utilities: utilities.rules,
        })
    }

    /// Emit and prune against an already scanned content set
    pub fn generate(&self, content: &ContentSet) -> Result<Stylesheet> {
        Ok(prune_unused(self.emit()?, content))
    }

    /// A scanner over this generator's content globs
    pub fn scanner(&self) -> Result<ContentScanner> {
        ContentScanner::new(&self.root, &self.content)
    }

    /// Scan the content globs and generate
    pub fn build(&self) -> Result<Stylesheet> {
        if self.content.is_empty() {
            warn!("no content globs configured; every class rule will be pruned");
        }
        let content = self.scanner()?.scan()?;
        let sheet = self.generate(&content)?;
        info!(
            components = sheet.components.len(),
            keyframes = sheet.keyframes.len(),
            utilities = sheet.utilities.len(),
            "generated stylesheet"
        );
        Ok(sheet)
    }
}
