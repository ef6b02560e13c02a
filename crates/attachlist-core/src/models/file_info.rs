//! File metadata model

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::util::{extension_from_name, normalize_extension, normalize_text_option};

const OCTET_STREAM: &str = "application/octet-stream";

/// Identifier of an uploaded file, as assigned by the file store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(String);

impl FileId {
    /// Wrap an identifier issued by the file store.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FileId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Metadata for one file attached to a post.
///
/// Values are owned by the caller and never mutated during resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    /// Unique file identifier.
    pub id: FileId,
    /// Display name, including the extension.
    pub name: String,
    /// Lowercase extension without the dot. May be empty.
    #[serde(default)]
    pub extension: String,
    /// Upload timestamp (Unix ms). Missing values sort as `0`.
    #[serde(default)]
    pub create_at: Option<i64>,
    /// Size in bytes.
    #[serde(default)]
    pub size: u64,
    /// Content MIME type reported by the file store.
    #[serde(default)]
    pub mime_type: Option<String>,
}

impl FileInfo {
    /// Create a file record from its id, name and extension.
    pub fn new(id: impl Into<FileId>, name: impl Into<String>, extension: &str) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extension: normalize_extension(extension),
            create_at: None,
            size: 0,
            mime_type: None,
        }
    }

    /// Set the upload timestamp.
    #[must_use]
    pub fn with_create_at(mut self, create_at: i64) -> Self {
        self.create_at = Some(create_at);
        self
    }

    /// Set the size in bytes.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Set the reported MIME type.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Timestamp used for display ordering.
    pub fn sort_timestamp(&self) -> i64 {
        self.create_at.unwrap_or(0)
    }

    /// Lowercase extension, falling back to the one in `name` when the
    /// store reported none.
    pub fn effective_extension(&self) -> String {
        let extension = normalize_extension(&self.extension);
        if extension.is_empty() {
            extension_from_name(&self.name)
        } else {
            extension
        }
    }

    /// MIME type for classification.
    ///
    /// The reported type wins unless it is empty or the generic octet
    /// stream; otherwise it is guessed from the file name.
    pub fn effective_mime_type(&self) -> String {
        if let Some(reported) = normalize_text_option(self.mime_type.clone()) {
            if !reported.eq_ignore_ascii_case(OCTET_STREAM) {
                return reported.to_ascii_lowercase();
            }
        }

        mime_guess::from_path(self.name.trim())
            .first_raw()
            .map_or_else(|| OCTET_STREAM.to_string(), str::to_string)
    }
}
