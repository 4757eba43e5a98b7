//! Project scaffolding (`verdant init`)

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use verdant_css::{Preset, CONFIG_FILE};

/// Write `preset` as `dir/verdant.toml`; an existing file is never overwritten
pub fn init(dir: &Path, preset: &str) -> Result<()> {
    let preset = find_preset(preset)?;
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        anyhow::bail!(
            "{} already exists; remove it first to start over",
            path.display()
        );
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    fs::write(&path, preset.source())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), preset = preset.id(), "created configuration");
    Ok(())
}

pub fn find_preset(id: &str) -> Result<Preset> {
    Preset::from_id(id).with_context(|| {
        let known: Vec<&str> = Preset::all().iter().map(|p| p.id()).collect();
        format!("Unknown preset `{id}` (available: {})", known.join(", "))
    })
}
