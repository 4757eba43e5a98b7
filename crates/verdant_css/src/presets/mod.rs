//! Built-in configuration presets

use std::fmt::{Display, Formatter};
use std::path::Path;

use crate::config::VerdantConfig;
use crate::error::Result;

/// Built-in preset catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Green palettes, semantic aliases and the green component set.
    Green,
}

impl Preset {
    /// Stable preset id for the CLI.
    pub fn id(self) -> &'static str {
        match self {
            Self::Green => "green",
        }
    }

    /// User-facing display name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Green => "Green",
        }
    }

    /// Full preset list.
    pub fn all() -> &'static [Preset] {
        const PRESETS: [Preset; 1] = [Preset::Green];
        &PRESETS
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.id() == id)
    }

    /// The preset as `verdant.toml` text.
    pub fn source(self) -> &'static str {
        match self {
            Self::Green => include_str!("green.toml"),
        }
    }

    /// Parsed configuration, rooted at the current directory.
    pub fn config(self) -> Result<VerdantConfig> {
        let mut config =
            VerdantConfig::from_toml_str(self.source(), Path::new(self.file_name()))?;
        config.base_dir = ".".into();
        Ok(config)
    }

    fn file_name(self) -> &'static str {
        match self {
            Self::Green => "presets/green.toml",
        }
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
