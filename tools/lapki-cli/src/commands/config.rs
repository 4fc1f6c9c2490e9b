//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("[features]");
    ctx.output.kv(
        "delivery_estimator",
        &ctx.config.features.delivery_estimator.to_string(),
    );
    ctx.output
        .kv("lightbox", &ctx.config.features.lightbox.to_string());

    ctx.output.info("[delivery]");
    ctx.output.kv(
        "free_threshold",
        &ctx.config.delivery.free_threshold.to_string(),
    );

    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output
        .kv("format", &ctx.config.logging.format.to_string());

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output
        .success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if ctx.config.delivery.free_threshold < 0 {
        errors.push("delivery.free_threshold must not be negative".to_string());
    }

    if tracing_subscriber::EnvFilter::try_new(&ctx.config.logging.level).is_err() {
        errors.push(format!(
            "logging.level '{}' is not a valid filter",
            ctx.config.logging.level
        ));
    }

    if !ctx.config.features.delivery_estimator && !ctx.config.features.lightbox {
        warnings.push("both optional features are off; this is the basic page".to_string());
    }

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["features", "delivery_estimator"] => Ok(config.features.delivery_estimator.to_string()),
        ["features", "lightbox"] => Ok(config.features.lightbox.to_string()),
        ["delivery", "free_threshold"] => Ok(config.delivery.free_threshold.to_string()),
        ["logging", "level"] => Ok(config.logging.level.clone()),
        ["logging", "format"] => Ok(config.logging.format.to_string()),
        _ => bail!("Unknown config key: {}", key),
    }
}
