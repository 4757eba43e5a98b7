//! Verdant configuration file handling (verdant.toml)

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use verdant_theme::{ThemeConfig, TokenRegistry};

use crate::error::{CssError, Result};
use crate::plugin::DeclarativePlugin;

/// Configuration file name looked up by [`VerdantConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "verdant.toml";

/// Top-level Verdant configuration
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct VerdantConfig {
    /// Content globs, relative to the configuration's directory
    #[serde(default)]
    pub content: Vec<String>,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub plugins: Vec<DeclarativePlugin>,
    /// Directory the configuration was loaded from
    #[serde(skip)]
    pub base_dir: PathBuf,
}

/// Default input/output for the CLI
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct BuildConfig {
    /// Input template containing `@verdant` directives
    #[serde(default)]
    pub input: Option<PathBuf>,
    /// Stylesheet destination; stdout when unset
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub minify: bool,
}

impl VerdantConfig {
    /// Parse configuration text
    ///
    /// `origin` is only used for error messages.
    pub fn from_toml_str(text: &str, origin: &Path) -> Result<Self> {
        toml::from_str(text).map_err(|err| CssError::Config {
            path: origin.to_path_buf(),
            source: Box::new(err),
        })
    }

    /// Load a configuration file; content globs become relative to its directory
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|err| CssError::io(path, err))?;
        let mut config = Self::from_toml_str(&text, path)?;
        config.base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(config)
    }

    /// Load from a directory (looks for verdant.toml) or an explicit file
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            Self::load(&path.join(CONFIG_FILE))
        }
    }

    /// Base defaults merged with `theme.extend`
    pub fn registry(&self) -> Result<TokenRegistry> {
        Ok(TokenRegistry::merged(&self.theme.extend)?)
    }

    /// Resolve a configured path against the base directory
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}
