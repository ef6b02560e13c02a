use std::env;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use attachlist_core::config::ResolverConfig;
use attachlist_core::file_type::format_file_size;
use attachlist_core::{AttachmentLayout, DisplayMode, FileInfo, PostRef};
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::CliError;

const CONFIG_ENV_VAR: &str = "ATTACHLIST_CONFIG";

/// Attachment document accepted by `attachlist resolve`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttachmentInput {
    #[serde(default)]
    pub post: PostRef,
    #[serde(default)]
    pub file_count: Option<usize>,
    #[serde(default)]
    pub file_infos: Vec<FileInfo>,
}

impl AttachmentInput {
    /// Explicit count, else the post's file ids, else the loaded metadata.
    pub fn effective_file_count(&self) -> usize {
        self.file_count
            .or_else(|| Some(self.post.file_count()).filter(|count| *count > 0))
            .unwrap_or(self.file_infos.len())
    }
}

pub fn parse_input(raw: &str) -> Result<AttachmentInput, CliError> {
    serde_json::from_str(raw).map_err(|error| CliError::InvalidInput(error.to_string()))
}

pub fn read_input(path: &Path) -> Result<AttachmentInput, CliError> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|source| CliError::ReadInput {
                path: "stdin".to_string(),
                source,
            })?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::ReadInput {
            path: path.display().to_string(),
            source,
        })?
    };

    parse_input(&raw)
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Option<PathBuf> {
    explicit.or_else(|| {
        env::var(CONFIG_ENV_VAR)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    })
}

pub fn load_config(path: Option<&Path>) -> Result<ResolverConfig, CliError> {
    match path {
        Some(path) => Ok(ResolverConfig::load_from_path(path)?),
        None => Ok(ResolverConfig::default()),
    }
}

pub fn format_timestamp(timestamp_ms: Option<i64>) -> String {
    timestamp_ms
        .and_then(DateTime::<Utc>::from_timestamp_millis)
        .map_or_else(
            || "-".to_string(),
            |time| time.format("%Y-%m-%d %H:%M").to_string(),
        )
}

pub fn format_layout_header<C>(layout: &AttachmentLayout<C>) -> String {
    let mode = match layout.mode {
        DisplayMode::Single => "single preview",
        DisplayMode::List => "list",
    };
    let count = layout.attachments.len();
    let noun = if count == 1 { "file" } else { "files" };
    let style = if layout.compact { ", compact" } else { "" };

    if layout.missing > 0 {
        format!("{mode} ({count} {noun}, {} missing{style})", layout.missing)
    } else {
        format!("{mode} ({count} {noun}{style})")
    }
}

pub fn format_layout_lines<C>(layout: &AttachmentLayout<C>) -> Vec<String> {
    layout
        .attachments
        .iter()
        .map(|attachment| {
            let props = &attachment.props;
            let name = truncate_name(&props.file_info.name, 32);
            let renderer = attachment.renderer.label();
            let size = format_file_size(props.file_info.size);
            let created = format_timestamp(props.file_info.create_at);
            let kind = props.file_type.label();

            format!(
                "{:>2}  {name:<32}  {kind:<12}  {renderer:<16}  {size:>9}  {created}",
                props.index + 1
            )
        })
        .collect()
}

pub fn truncate_name(name: &str, max_chars: usize) -> String {
    if name.chars().count() <= max_chars {
        return name.to_string();
    }

    let mut truncated: String = name.chars().take(max_chars.saturating_sub(3)).collect();
    truncated.push_str("...");
    truncated
}
