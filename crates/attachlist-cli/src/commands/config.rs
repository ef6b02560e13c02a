use std::path::Path;

use attachlist_core::config::{PluginRule, ResolverConfig};

use crate::cli::ConfigCommands;
use crate::error::CliError;

pub fn run_config(command: ConfigCommands, global_path: Option<&Path>) -> Result<(), CliError> {
    match command {
        ConfigCommands::Check { path } => {
            let path = path.as_deref().or(global_path);
            run_config_check(path)
        }
    }
}

pub fn run_config_check(path: Option<&Path>) -> Result<(), CliError> {
    let path = path.ok_or(CliError::ConfigNotSpecified)?;
    if !path.exists() {
        return Err(CliError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("config file not found: {}", path.display()),
        )));
    }

    let config = ResolverConfig::load_from_path(path)?;
    config.plugin_entries()?;

    println!("{}: ok", path.display());
    for line in format_config_lines(&config) {
        println!("{line}");
    }
    Ok(())
}

pub fn format_config_lines(config: &ResolverConfig) -> Vec<String> {
    let display = &config.display;
    let mut lines = vec![format!(
        "display: compact={} svg_previews={} embeds={} locale={}",
        display.compact_display, display.enable_svgs, display.is_embed_visible, display.locale
    )];

    if config.plugins.is_empty() {
        lines.push("plugins: none".to_string());
    }
    for (index, rule) in config.plugins.iter().enumerate() {
        lines.push(format!(
            "{:>2}. {} ({}) -> {}  [{}]",
            index + 1,
            rule.id,
            rule.plugin_id,
            rule.renderer,
            describe_criteria(rule)
        ));
    }
    lines
}

fn describe_criteria(rule: &PluginRule) -> String {
    let mut parts = Vec::new();
    if !rule.extensions.is_empty() {
        parts.push(format!("ext: {}", rule.extensions.join(",")));
    }
    if !rule.mime_prefixes.is_empty() {
        parts.push(format!("mime: {}", rule.mime_prefixes.join(",")));
    }
    if let Some(pattern) = &rule.name_pattern {
        parts.push(format!("name: /{pattern}/"));
    }
    parts.join("; ")
}
