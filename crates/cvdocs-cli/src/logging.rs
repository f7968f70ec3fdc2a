use cvdocs_core::config::{ensure_config_dir, get_log_file_path};
use cvdocs_core::{DocsError, Result};
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    /// `~/.cvdocs/cvdocs.log`; used while the dashboard owns the terminal.
    File,
}

/// Install the global subscriber. `RUST_LOG` wins over `default_level`.
pub fn init_logging(default_level: &str, target: LogTarget) -> Result<()> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(from_env.as_deref(), default_level)?;

    let installed = match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .without_time()
                    .with_ansi(false),
            )
            .with(filter)
            .try_init(),
        LogTarget::File => {
            ensure_config_dir()?;
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(get_log_file_path())?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_writer(Mutex::new(file))
                        .with_ansi(false),
                )
                .with(filter)
                .try_init()
        }
    };

    installed.map_err(|e| DocsError::Other(format!("failed to initialize logging: {}", e)))
}

/// The filter from `RUST_LOG` when set, else `default_level`. A bad one is an error.
fn build_filter(from_env: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    let (source, directives) = match from_env {
        Some(directives) if !directives.trim().is_empty() => (EnvFilter::DEFAULT_ENV, directives),
        _ => ("log_level", default_level),
    };
    EnvFilter::try_new(directives)
        .map_err(|e| DocsError::InvalidConfig(format!("{} '{}': {}", source, directives, e)))
}
