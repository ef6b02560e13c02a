//! Plugin renderer entries.
//!
//! A plugin claims files through a [`FileMatcher`] and supplies an opaque
//! component `C` that the embedding layer knows how to mount. Entries are
//! consumed as an ordered slice: earlier entries take priority.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::models::{FileId, FileInfo};

/// Failure raised by a plugin's match predicate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    /// The predicate reported an error
    #[error("matcher failed: {0}")]
    Failed(String),
    /// The predicate panicked
    #[error("matcher panicked: {0}")]
    Panicked(String),
}

impl From<String> for MatchError {
    fn from(value: String) -> Self {
        Self::Failed(value)
    }
}

impl From<&str> for MatchError {
    fn from(value: &str) -> Self {
        Self::Failed(value.to_string())
    }
}

/// Predicate deciding whether a plugin renders a file.
pub trait FileMatcher: Send + Sync {
    fn matches(&self, file: &FileInfo) -> Result<bool, MatchError>;
}

impl<F> FileMatcher for F
where
    F: Fn(&FileInfo) -> bool + Send + Sync,
{
    fn matches(&self, file: &FileInfo) -> Result<bool, MatchError> {
        Ok(self(file))
    }
}

/// A renderer override registered by a plugin.
pub struct PluginRendererEntry<C> {
    /// Registration identifier
    pub id: String,
    /// Owning plugin
    pub plugin_id: String,
    /// Renderer reference handed back on match
    pub component: C,
    matcher: Arc<dyn FileMatcher>,
}

impl<C> PluginRendererEntry<C> {
    /// Create an entry from any matcher, including plain closures.
    pub fn new(
        id: impl Into<String>,
        plugin_id: impl Into<String>,
        component: C,
        matcher: impl FileMatcher + 'static,
    ) -> Self {
        Self {
            id: id.into(),
            plugin_id: plugin_id.into(),
            component,
            matcher: Arc::new(matcher),
        }
    }

    /// Run this entry's predicate.
    pub fn matches(&self, file: &FileInfo) -> Result<bool, MatchError> {
        self.matcher.matches(file)
    }
}

impl<C: Clone> Clone for PluginRendererEntry<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            plugin_id: self.plugin_id.clone(),
            component: self.component.clone(),
            matcher: Arc::clone(&self.matcher),
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for PluginRendererEntry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRendererEntry")
            .field("id", &self.id)
            .field("plugin_id", &self.plugin_id)
            .field("component", &self.component)
            .finish_non_exhaustive()
    }
}

/// A predicate failure isolated during selection, reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchFailure {
    pub file_id: FileId,
    pub entry_id: String,
    pub plugin_id: String,
    pub error: MatchError,
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "plugin {} entry {} on file {}: {}",
            self.plugin_id, self.entry_id, self.file_id, self.error
        )
    }
}
