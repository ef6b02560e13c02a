//! Post reference model

use serde::{Deserialize, Serialize};

use super::file_info::FileId;

/// The post whose attachments are being laid out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    /// Post identifier
    pub id: String,
    /// Identifiers of every file attached to the post
    #[serde(default)]
    pub file_ids: Vec<FileId>,
}

impl PostRef {
    /// Create a post reference
    pub fn new(id: impl Into<String>, file_ids: impl IntoIterator<Item = FileId>) -> Self {
        Self {
            id: id.into(),
            file_ids: file_ids.into_iter().collect(),
        }
    }

    /// Number of files the post claims, whether or not their metadata loaded
    pub fn file_count(&self) -> usize {
        self.file_ids.len()
    }
}
