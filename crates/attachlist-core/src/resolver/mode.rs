use serde::{Deserialize, Serialize};

use crate::models::FileInfo;

/// Layout of the attachment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// One expanded preview
    Single,
    /// Compact attachment rows
    List,
}

/// Pick the layout from the post's file count.
///
/// `file_count` is authoritative: it may exceed the number of descriptors
/// when some metadata failed to load, and only an exact count of one yields
/// [`DisplayMode::Single`].
pub fn select_mode(file_count: usize, file_infos: &[FileInfo]) -> DisplayMode {
    if file_count != file_infos.len() {
        tracing::debug!(
            file_count,
            loaded = file_infos.len(),
            "File count differs from loaded metadata"
        );
    }

    if file_count == 1 {
        DisplayMode::Single
    } else {
        DisplayMode::List
    }
}
