//! Resolver configuration.
//!
//! A JSON document carrying the display settings and an ordered list of
//! declarative plugin rules. Rules become [`PluginRendererEntry`] values whose
//! component is the rule's renderer name.

use std::collections::HashSet;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{DisplayContext, FileInfo};
use crate::plugin::{FileMatcher, MatchError, PluginRendererEntry};
use crate::util::{normalize_extension, normalize_text_option};

/// Top-level configuration document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    #[serde(default)]
    pub display: DisplaySettings,
    #[serde(default)]
    pub plugins: Vec<PluginRule>,
}

/// Serializable part of [`DisplayContext`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplaySettings {
    #[serde(default)]
    pub compact_display: bool,
    #[serde(default)]
    pub enable_svgs: bool,
    #[serde(default)]
    pub is_embed_visible: bool,
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            compact_display: false,
            enable_svgs: false,
            is_embed_visible: false,
            locale: default_locale(),
        }
    }
}

impl DisplaySettings {
    /// Display context without any handlers attached.
    pub fn to_context(&self) -> DisplayContext {
        DisplayContext {
            compact_display: self.compact_display,
            enable_svgs: self.enable_svgs,
            is_embed_visible: self.is_embed_visible,
            locale: self.locale.clone(),
            ..DisplayContext::default()
        }
    }
}

/// Declarative plugin registration.
///
/// A rule claims a file when any of its criteria matches.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PluginRule {
    pub id: String,
    pub plugin_id: String,
    /// Renderer name handed back on match
    pub renderer: String,
    /// Extensions, compared case-insensitively without the dot
    #[serde(default)]
    pub extensions: Vec<String>,
    /// MIME type prefixes such as `audio/`
    #[serde(default)]
    pub mime_prefixes: Vec<String>,
    /// Regular expression tested against the file name
    #[serde(default)]
    pub name_pattern: Option<String>,
}

fn default_locale() -> String {
    "en".to_string()
}

impl ResolverConfig {
    /// Parse and validate a configuration document.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut config: Self = serde_json::from_str(raw)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No resolver config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Check rule identifiers and criteria.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();

        for rule in &self.plugins {
            if rule.id.is_empty() {
                return Err(Error::InvalidConfig("plugin rule id cannot be empty".to_string()));
            }
            if rule.plugin_id.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "plugin rule '{}' has an empty plugin_id",
                    rule.id
                )));
            }
            if rule.renderer.is_empty() {
                return Err(Error::InvalidConfig(format!(
                    "plugin rule '{}' has an empty renderer",
                    rule.id
                )));
            }
            if !seen.insert(rule.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate plugin rule id '{}'",
                    rule.id
                )));
            }
            if rule.extensions.is_empty()
                && rule.mime_prefixes.is_empty()
                && rule.name_pattern.is_none()
            {
                return Err(Error::InvalidConfig(format!(
                    "plugin rule '{}' has no match criteria",
                    rule.id
                )));
            }
            if let Some(pattern) = &rule.name_pattern {
                Regex::new(pattern)?;
            }
        }

        Ok(())
    }

    /// Build plugin entries in rule order.
    pub fn plugin_entries(&self) -> Result<Vec<PluginRendererEntry<String>>> {
        self.plugins
            .iter()
            .map(|rule| {
                let matcher = RuleMatcher::compile(rule)?;
                Ok(PluginRendererEntry::new(
                    rule.id.clone(),
                    rule.plugin_id.clone(),
                    rule.renderer.clone(),
                    matcher,
                ))
            })
            .collect()
    }

    fn normalize(&mut self) {
        self.display.locale =
            normalize_text_option(Some(self.display.locale.clone())).unwrap_or_else(default_locale);

        for rule in &mut self.plugins {
            rule.id = rule.id.trim().to_string();
            rule.plugin_id = rule.plugin_id.trim().to_string();
            rule.renderer = rule.renderer.trim().to_string();
            rule.extensions = rule
                .extensions
                .iter()
                .map(|extension| normalize_extension(extension))
                .filter(|extension| !extension.is_empty())
                .collect();
            rule.mime_prefixes = rule
                .mime_prefixes
                .iter()
                .map(|prefix| prefix.trim().to_ascii_lowercase())
                .filter(|prefix| !prefix.is_empty())
                .collect();
            rule.name_pattern = normalize_text_option(rule.name_pattern.take());
        }
    }
}

/// Matcher compiled from a [`PluginRule`].
#[derive(Debug, Clone)]
pub struct RuleMatcher {
    extensions: Vec<String>,
    mime_prefixes: Vec<String>,
    name_pattern: Option<Regex>,
}

impl RuleMatcher {
    pub fn compile(rule: &PluginRule) -> Result<Self> {
        let name_pattern = rule.name_pattern.as_deref().map(Regex::new).transpose()?;

        Ok(Self {
            extensions: rule
                .extensions
                .iter()
                .map(|extension| normalize_extension(extension))
                .collect(),
            mime_prefixes: rule
                .mime_prefixes
                .iter()
                .map(|prefix| prefix.to_ascii_lowercase())
                .collect(),
            name_pattern,
        })
    }
}

impl FileMatcher for RuleMatcher {
    fn matches(&self, file: &FileInfo) -> std::result::Result<bool, MatchError> {
        if !self.extensions.is_empty() {
            let extension = file.effective_extension();
            if self.extensions.iter().any(|candidate| *candidate == extension) {
                return Ok(true);
            }
        }

        if !self.mime_prefixes.is_empty() {
            let mime_type = file.effective_mime_type();
            if self
                .mime_prefixes
                .iter()
                .any(|prefix| mime_type.starts_with(prefix.as_str()))
            {
                return Ok(true);
            }
        }

        Ok(self
            .name_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&file.name)))
    }
}
