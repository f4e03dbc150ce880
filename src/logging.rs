use std::fs::{self, OpenOptions};
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr, eyre};
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "WINTOP_LOG";

/// Sends `tracing` output to `path`, appending. The filter comes from
/// `WINTOP_LOG` when set, otherwise from `default_level`.
pub fn init_file_logging(path: &Path, default_level: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;

    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), default_level)?;

    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(move || -> Box<dyn std::io::Write> {
            match file.try_clone() {
                Ok(clone) => Box::new(clone),
                Err(_) => Box::new(std::io::sink()),
            }
        })
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| eyre!("failed to set tracing subscriber: {e}"))?;
    Ok(())
}

fn build_filter(env_value: Option<&str>, default_level: &str) -> Result<EnvFilter> {
    let directives = match env_value {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => format!("wintop={default_level}"),
    };
    EnvFilter::try_new(&directives).wrap_err_with(|| format!("invalid log filter `{directives}`"))
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
