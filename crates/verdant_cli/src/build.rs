//! `verdant build`

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;
use verdant_css::{Generator, OutputStyle, VerdantConfig, CONFIG_FILE};

/// Flags shared by `build` and `watch`
#[derive(Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Input stylesheet containing `@verdant components;` / `@verdant utilities;`
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Minify the generated CSS
    #[arg(long)]
    pub minify: bool,

    /// Directory content globs are relative to (defaults to the config's directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

/// Everything one build pass needs, with CLI flags applied over `[build]`
#[derive(Debug)]
pub struct BuildPlan {
    pub config_path: PathBuf,
    pub config: VerdantConfig,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub style: OutputStyle,
    pub root: PathBuf,
}

impl BuildArgs {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE))
    }

    /// Load the configuration and merge it with the command-line flags
    pub fn plan(&self) -> Result<BuildPlan> {
        let config_path = self.config_path();
        if !config_path.exists() {
            anyhow::bail!(
                "No {} found. Run `verdant init` to create one.",
                config_path.display()
            );
        }

        let config = VerdantConfig::load(&config_path)
            .with_context(|| format!("Failed to load {}", config_path.display()))?;

        let input = self
            .input
            .clone()
            .or_else(|| config.build.input.as_deref().map(|p| config.resolve_path(p)));
        let output = self
            .output
            .clone()
            .or_else(|| config.build.output.as_deref().map(|p| config.resolve_path(p)));
        let style = OutputStyle::from_minify(self.minify || config.build.minify);
        let root = self.root.clone().unwrap_or_else(|| config.base_dir.clone());

        Ok(BuildPlan {
            config_path,
            config,
            input,
            output,
            style,
            root,
        })
    }
}

/// Run one build and return the stylesheet text
pub fn run(args: &BuildArgs) -> Result<String> {
    let plan = args.plan()?;
    run_plan(&plan)
}

pub fn run_plan(plan: &BuildPlan) -> Result<String> {
    let generator = Generator::from_config(&plan.config)
        .with_context(|| format!("Invalid configuration in {}", plan.config_path.display()))?
        .with_root(plan.root.clone());
    let sheet = generator.build().context("Failed to generate stylesheet")?;

    let css = match &plan.input {
        Some(input) => {
            let template = fs::read_to_string(input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            sheet.render_with_template(&template, plan.style)
        }
        None => sheet.render(plan.style),
    };

    match &plan.output {
        Some(output) => write_output(output, &css)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(css.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(css)
}

fn write_output(path: &Path, css: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, css).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = css.len(), "wrote stylesheet");
    Ok(())
}
