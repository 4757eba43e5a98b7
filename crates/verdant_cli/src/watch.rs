//! `verdant watch`

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use notify::{RecursiveMode, Watcher};
use tracing::{debug, error, info, warn};

use crate::build::{self, BuildArgs, BuildPlan};

/// Quiet period after the last event before a rebuild starts
const DEBOUNCE: Duration = Duration::from_millis(200);

const POLL_INTERVAL: Duration = Duration::from_millis(500);

pub fn run(args: &BuildArgs, poll: bool) -> Result<()> {
    let plan = args.plan()?;
    if let Err(err) = build::run_plan(&plan) {
        error!("build failed: {err:#}");
    }

    let (tx, rx) = channel::<notify::Result<notify::Event>>();
    let mut watcher: Box<dyn Watcher> = if poll {
        Box::new(
            notify::PollWatcher::new(tx, notify::Config::default().with_poll_interval(POLL_INTERVAL))
                .context("Failed to start poll watcher")?,
        )
    } else {
        Box::new(notify::recommended_watcher(tx).context("Failed to start watcher")?)
    };

    for root in watch_roots(&plan) {
        if !root.exists() {
            warn!(root = %root.display(), "watch root does not exist; skipping");
            continue;
        }
        watcher
            .watch(&root, RecursiveMode::Recursive)
            .with_context(|| format!("Failed to watch {}", root.display()))?;
        debug!(root = %root.display(), "watching");
    }

    if poll {
        info!("watching for changes (polling, press Ctrl+C to stop)");
    } else {
        info!("watching for changes (press Ctrl+C to stop)");
    }

    let mut output = plan.output.clone();
    let mut debouncer = Debouncer::new(DEBOUNCE);
    loop {
        match rx.recv_timeout(debouncer.timeout(Instant::now())) {
            Ok(Ok(event)) => {
                if !is_output_event(&event, output.as_deref()) {
                    debouncer.event(Instant::now());
                }
            }
            Ok(Err(err)) => warn!("watch error: {err}"),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if debouncer.ready(Instant::now()) {
            info!("change detected, rebuilding");
            if let Err(err) = args.plan().and_then(|plan| {
                output = plan.output.clone();
                build::run_plan(&plan)
            }) {
                error!("build failed: {err:#}");
            }
        }
    }

    Ok(())
}

/// Trailing-edge debounce
///
/// Every event pushes the deadline back by `delay`; a rebuild becomes due
/// once no event has arrived for that long.
#[derive(Debug)]
struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    fn event(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// True once per burst, when its deadline has passed
    fn ready(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// How long to wait for the next event
    fn timeout(&self, now: Instant) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(self.delay)
    }
}

/// Directories to watch: content glob roots, the config file and the input template
///
/// Roots are deduplicated and kept in first-seen order.
pub fn watch_roots(plan: &BuildPlan) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::new();
    let mut push = |path: PathBuf| {
        let path = if path.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            path
        };
        if !roots.contains(&path) {
            roots.push(path);
        }
    };

    for pattern in &plan.config.content {
        push(plan.root.join(glob_root(pattern)));
    }
    for file in [Some(&plan.config_path), plan.input.as_ref()].into_iter().flatten() {
        push(file.parent().map(Path::to_path_buf).unwrap_or_default());
    }
    roots
}

/// The literal directory prefix of a glob (`./views/**/*.templ` → `views`)
fn glob_root(pattern: &str) -> PathBuf {
    let pattern = pattern.trim();
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    let meta = pattern
        .find(|c| matches!(c, '*' | '?' | '[' | '{'))
        .unwrap_or(pattern.len());
    let literal = &pattern[..meta];
    match literal.rfind('/') {
        Some(idx) => PathBuf::from(&literal[..idx]),
        None => PathBuf::new(),
    }
}

/// True when every path in the event is the generated stylesheet
fn is_output_event(event: &notify::Event, output: Option<&Path>) -> bool {
    let Some(output) = output else {
        return false;
    };
    let output = output.canonicalize().unwrap_or_else(|_| output.to_path_buf());
    !event.paths.is_empty()
        && event.paths.iter().all(|path| {
            path.canonicalize().unwrap_or_else(|_| path.clone()) == output
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdant_css::{OutputStyle, VerdantConfig};

    fn plan(content: &[&str], input: Option<&str>) -> BuildPlan {
        BuildPlan {
            config_path: PathBuf::from("conf/verdant.toml"),
            config: VerdantConfig {
                content: content.iter().map(|s| s.to_string()).collect(),
                ..VerdantConfig::default()
            },
            input: input.map(PathBuf::from),
            output: None,
            style: OutputStyle::Pretty,
            root: PathBuf::from("site"),
        }
    }

    #[test]
    fn test_debounce_fires_after_the_last_event() {
        let start = Instant::now();
        let ms = |n: u64| start + Duration::from_millis(n);
        let mut debouncer = Debouncer::new(DEBOUNCE);
        assert!(!debouncer.ready(start));

        debouncer.event(ms(0));
        debouncer.event(ms(120));
        assert!(!debouncer.ready(ms(250)));
        assert_eq!(debouncer.timeout(ms(250)), Duration::from_millis(70));

        assert!(debouncer.ready(ms(320)));
        assert!(!debouncer.ready(ms(400)));
        assert_eq!(debouncer.timeout(ms(400)), DEBOUNCE);
    }

    #[test]
    fn test_event_after_rebuild_starts_a_new_burst() {
        let start = Instant::now();
        let ms = |n: u64| start + Duration::from_millis(n);
        let mut debouncer = Debouncer::new(DEBOUNCE);

        debouncer.event(ms(0));
        assert!(debouncer.ready(ms(200)));
        debouncer.event(ms(210));
        assert!(!debouncer.ready(ms(300)));
        assert!(debouncer.ready(ms(410)));
    }

    #[test]
    fn test_glob_root() {
        assert_eq!(glob_root("./views/**/*.{templ,go}"), PathBuf::from("views"));
        assert_eq!(glob_root("./**/*.html"), PathBuf::new());
        assert_eq!(glob_root("src/pages/index.html"), PathBuf::from("src/pages"));
        assert_eq!(glob_root("*.html"), PathBuf::new());
    }

    #[test]
    fn test_watch_roots_include_content_config_and_input() {
        let roots = watch_roots(&plan(
            &["./views/**/*.templ", "./views/**/*.go", "./**/*.html"],
            Some("styles/app.css"),
        ));
        assert_eq!(
            roots,
            vec![
                PathBuf::from("site/views"),
                PathBuf::from("site"),
                PathBuf::from("conf"),
                PathBuf::from("styles"),
            ]
        );
    }

    #[test]
    fn test_config_in_current_directory_watches_dot() {
        let mut plan = plan(&[], None);
        plan.config_path = PathBuf::from("verdant.toml");
        assert_eq!(watch_roots(&plan), vec![PathBuf::from(".")]);
    }

    #[test]
    fn test_output_events_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("out.css");
        std::fs::write(&output, "").unwrap();

        let event = notify::Event::new(notify::EventKind::Any).add_path(output.clone());
        assert!(is_output_event(&event, Some(output.as_path())));

        let other = notify::Event::new(notify::EventKind::Any).add_path(dir.path().join("a.html"));
        assert!(!is_output_event(&other, Some(output.as_path())));
        assert!(!is_output_event(&event, None));
    }
}
