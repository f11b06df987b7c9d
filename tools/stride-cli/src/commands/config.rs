//! Configuration management commands.

use std::path::Path;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("currency", &ctx.config.store.currency);

    ctx.output.info("[release]");
    ctx.output.kv("window_days", &ctx.config.release.window_days.to_string());

    ctx.output.info("[render]");
    if let Some(ref title) = ctx.config.render.title {
        ctx.output.kv("title", title);
    }
    ctx.output.kv("sort", &ctx.config.render.sort);

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    write_default_config(&path).await?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}

async fn write_default_config(path: &Path) -> Result<()> {
    tokio::fs::write(path, generate_default_config()).await?;
    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.config.validate()?;

    match &ctx.config_path {
        Some(path) => ctx
            .output
            .success(&format!("{} is valid", path.display())),
        None => ctx
            .output
            .warn("No config file found; built-in defaults are valid"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CliConfig;

    #[tokio::test]
    async fn test_write_default_config_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stride.toml");

        write_default_config(&path).await.unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert!(config.validate().is_ok());
    }
}
