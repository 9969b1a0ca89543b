use std::{
    fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context};
use portfolio_core::PortfolioSettings;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";
/// Upper bound for `fetch_timeout_secs` from any source.
pub const MAX_FETCH_TIMEOUT_SECS: u64 = 600;

/// Optional keys accepted in `portfolio.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SettingsFile {
    account: Option<String>,
    api_base: Option<String>,
    web_base: Option<String>,
    fetch_timeout_secs: Option<u64>,
    user_agent: Option<String>,
    fallback_name: Option<String>,
    fallback_bio: Option<String>,
}

/// Command-line values layered on top of file and environment.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config: Option<PathBuf>,
    pub account: Option<String>,
}

/// Defaults, then the TOML file, then `PORTFOLIO_*` variables, then flags.
pub fn load_settings(cli: &CliOverrides) -> anyhow::Result<PortfolioSettings> {
    load_settings_with(cli, |name| std::env::var(name).ok())
}

fn load_settings_with(
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<PortfolioSettings> {
    let mut settings = PortfolioSettings::default();

    let file = match &cli.config {
        Some(path) => Some(read_settings_file(path)?),
        None => read_default_settings_file(Path::new(DEFAULT_CONFIG_FILE))?,
    };
    if let Some(file) = file {
        apply_file(&mut settings, file)?;
    }

    if let Some(v) = non_empty(env("PORTFOLIO_ACCOUNT")) {
        settings.account = v;
    }
    if let Some(v) = non_empty(env("PORTFOLIO_API_BASE")) {
        settings.api_base = v;
    }
    if let Some(v) = non_empty(env("PORTFOLIO_FETCH_TIMEOUT_SECS")) {
        match v.parse::<u64>() {
            Ok(secs) if (1..=MAX_FETCH_TIMEOUT_SECS).contains(&secs) => {
                settings.fetch_timeout = Duration::from_secs(secs)
            }
            _ => tracing::warn!(value = %v, "ignoring invalid PORTFOLIO_FETCH_TIMEOUT_SECS"),
        }
    }

    if let Some(account) = non_empty(cli.account.clone()) {
        settings.account = account;
    }

    if settings.account.trim().is_empty() {
        bail!("GitHub account must not be empty");
    }
    Ok(settings)
}

fn read_settings_file(path: &Path) -> anyhow::Result<SettingsFile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    parse_settings_file(&raw, path)
}

fn read_default_settings_file(path: &Path) -> anyhow::Result<Option<SettingsFile>> {
    match fs::read_to_string(path) {
        Ok(raw) => parse_settings_file(&raw, path).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("failed to read config file '{}'", path.display()))
        }
    }
}

fn parse_settings_file(raw: &str, path: &Path) -> anyhow::Result<SettingsFile> {
    toml::from_str(raw).with_context(|| format!("malformed config file '{}'", path.display()))
}

fn apply_file(settings: &mut PortfolioSettings, file: SettingsFile) -> anyhow::Result<()> {
    if let Some(v) = non_empty(file.account) {
        settings.account = v;
    }
    if let Some(v) = non_empty(file.api_base) {
        settings.api_base = v;
    }
    if let Some(v) = non_empty(file.web_base) {
        settings.web_base = v;
    }
    if let Some(secs) = file.fetch_timeout_secs.filter(|secs| *secs > 0) {
        if secs > MAX_FETCH_TIMEOUT_SECS {
            bail!("fetch_timeout_secs must be at most {MAX_FETCH_TIMEOUT_SECS}, got {secs}");
        }
        settings.fetch_timeout = Duration::from_secs(secs);
    }
    if let Some(v) = non_empty(file.user_agent) {
        settings.user_agent = v;
    }
    if let Some(v) = non_empty(file.fallback_name) {
        settings.fallback_name = v;
    }
    if let Some(v) = non_empty(file.fallback_bio) {
        settings.fallback_bio = v;
    }
    Ok(())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
