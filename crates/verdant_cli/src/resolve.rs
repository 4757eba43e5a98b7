//! `verdant resolve`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use verdant_css::{VerdantConfig, CONFIG_FILE};
use verdant_theme::TokenRegistry;

use crate::project::find_preset;

pub fn run(paths: &[String], config: Option<&Path>, preset: Option<&str>, json: bool) -> Result<()> {
    let registry = load_registry(config, preset)?;
    let resolved = resolve_all(&registry, paths)?;
    print!("{}", render(&resolved, json)?);
    Ok(())
}

fn load_registry(config: Option<&Path>, preset: Option<&str>) -> Result<TokenRegistry> {
    let config = match preset {
        Some(id) => find_preset(id)?.config()?,
        None => {
            let path = config.map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
            VerdantConfig::load(&path).with_context(|| {
                format!(
                    "Failed to load {} (run `verdant init` or pass --preset)",
                    path.display()
                )
            })?
        }
    };
    Ok(config.registry()?)
}

/// Resolve every path, failing on the first unresolved one
pub fn resolve_all<'a>(registry: &TokenRegistry, paths: &'a [String]) -> Result<IndexMap<&'a str, String>> {
    let mut resolved = IndexMap::with_capacity(paths.len());
    for path in paths {
        let value = registry.resolve_css(path)?;
        resolved.insert(path.as_str(), value.into_owned());
    }
    Ok(resolved)
}

fn render(resolved: &IndexMap<&str, String>, json: bool) -> Result<String> {
    if json {
        let mut out = serde_json::to_string_pretty(resolved).context("Failed to encode JSON")?;
        out.push('\n');
        return Ok(out);
    }
    Ok(resolved
        .iter()
        .map(|(path, value)| format!("{path}: {value}\n"))
        .collect())
}
