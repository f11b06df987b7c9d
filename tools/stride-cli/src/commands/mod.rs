//! CLI command implementations.

pub mod classify;
pub mod config;
pub mod render;

use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Subcommand};
use stride_catalog::shoe::parse_release_date;
use stride_catalog::{Catalog, ReleaseWindow};

use crate::context::Context;

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Catalog file (JSON or TOML).
    pub catalog: String,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Reference time for the new-release check (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub as_of: Option<String>,

    /// Grid order (featured, newest, price-low-high, price-high-low, name).
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Page title.
    #[arg(short, long)]
    pub title: Option<String>,
}

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Catalog file (JSON or TOML).
    pub catalog: String,

    /// Reference time for the new-release check (RFC 3339 or YYYY-MM-DD).
    #[arg(long)]
    pub as_of: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Read, parse and validate a catalog file.
pub async fn load_catalog(path: &str, ctx: &Context) -> Result<Catalog> {
    let resolved = ctx.resolve_path(path);
    let content = tokio::fs::read_to_string(&resolved)
        .await
        .with_context(|| format!("Failed to read catalog: {}", resolved.display()))?;

    let catalog = Catalog::parse(Path::new(path), &content)
        .with_context(|| format!("Failed to parse catalog: {}", path))?;
    catalog
        .validate()
        .with_context(|| format!("Invalid catalog: {}", path))?;

    Ok(catalog)
}

/// Release window from config, optionally pinned with `--as-of`.
pub fn release_window(as_of: Option<&str>, ctx: &Context) -> Result<ReleaseWindow> {
    let window = ctx.config.release_window()?;
    match as_of {
        Some(text) => Ok(window.as_of(parse_as_of(text)?)),
        None => Ok(window),
    }
}

fn parse_as_of(text: &str) -> Result<DateTime<Utc>> {
    parse_release_date(text).with_context(|| format!("Invalid --as-of value: {}", text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;

    fn context(cwd: &Path) -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    #[tokio::test]
    async fn test_load_catalog_reports_bad_release_date() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "shoes.json",
            r#"[{"slug":"a","name":"A","imageSrc":"a.jpg","price":100,
                "releaseDate":"not a date","numOfColors":1}]"#,
        );

        let err = load_catalog("shoes.json", &context(dir.path()))
            .await
            .unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Failed to parse catalog: shoes.json"));
        assert!(message.contains("invalid release date: not a date"));
    }

    #[tokio::test]
    async fn test_load_catalog_rejects_misspelled_wrapper() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "shoes.json", r#"{"shoe": []}"#);

        let err = load_catalog("shoes.json", &context(dir.path()))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("missing field `shoes`"));
    }

    #[tokio::test]
    async fn test_load_catalog_reports_invalid_listing() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "shoes.json",
            r#"[{"slug":"a b","name":"A","imageSrc":"a.jpg","price":100,
                "releaseDate":"2024-01-01","numOfColors":1}]"#,
        );

        let err = load_catalog("shoes.json", &context(dir.path()))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid catalog: shoes.json"));
    }

    #[tokio::test]
    async fn test_load_catalog_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog("nope.json", &context(dir.path()))
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read catalog"));
    }

    #[test]
    fn test_release_window_pins_as_of() {
        let dir = tempfile::tempdir().unwrap();
        let window = release_window(Some("2026-10-19"), &context(dir.path())).unwrap();
        assert_eq!(window.as_of, Some(parse_release_date("2026-10-19").unwrap()));
        assert!(release_window(Some("soon"), &context(dir.path())).is_err());
    }
}
