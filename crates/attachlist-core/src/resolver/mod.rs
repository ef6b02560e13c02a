//! Attachment list resolution.
//!
//! A resolve call runs four pure stages, leaves first:
//!
//! 1. [`order_files`] sorts descriptors oldest first.
//! 2. [`select_mode`] picks single preview or list from the file count.
//! 3. [`select_renderer`] chooses one renderer per file.
//! 4. [`compose`] pairs each file with its renderer and props.
//!
//! Nothing is cached between calls; identical requests produce identical
//! layouts.

mod compose;
mod mode;
mod order;
mod select;

use serde::Serialize;

pub use compose::{compose, AttachmentProps, ResolvedAttachment};
pub use mode::{select_mode, DisplayMode};
pub use order::order_files;
pub use select::{select_renderer, select_renderer_reporting, Renderer};

use crate::models::{DisplayContext, FileInfo, FilePreviewRequest, PostRef};
use crate::plugin::{MatchFailure, PluginRendererEntry};

/// Inputs for one resolve call.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    pub post: PostRef,
    /// Authoritative number of files on the post
    pub file_count: usize,
    /// Loaded metadata, in any order, possibly fewer than `file_count`
    pub file_infos: Vec<FileInfo>,
    pub context: DisplayContext,
}

/// Resolved attachment list, ready for the embedding layer to mount.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentLayout<C> {
    pub mode: DisplayMode,
    pub compact: bool,
    pub post_id: String,
    pub attachments: Vec<ResolvedAttachment<C>>,
    /// Files counted on the post whose metadata is not available
    pub missing: usize,
    /// Plugin predicates that failed and were skipped
    #[serde(skip)]
    pub match_failures: Vec<MatchFailure>,
}

impl<C> AttachmentLayout<C> {
    /// Build the preview modal request for the attachment at `index`.
    pub fn preview_request(&self, index: usize) -> Option<FilePreviewRequest> {
        if index >= self.attachments.len() {
            return None;
        }

        Some(FilePreviewRequest {
            post_id: self.post_id.clone(),
            file_infos: self
                .attachments
                .iter()
                .map(|attachment| attachment.props.file_info.clone())
                .collect(),
            start_index: index,
        })
    }

    /// Open the preview modal at `index` through the context's opener.
    ///
    /// Returns `false` when the index is out of range or no opener is set.
    pub fn open_preview(&self, index: usize, context: &DisplayContext) -> bool {
        let Some(opener) = context.open_modal.as_ref() else {
            return false;
        };
        let Some(request) = self.preview_request(index) else {
            return false;
        };

        opener.call(request);
        true
    }
}

/// Resolves attachment lists against an ordered set of plugin renderers.
#[derive(Debug, Clone)]
pub struct AttachmentListResolver<C> {
    plugins: Vec<PluginRendererEntry<C>>,
}

impl<C> Default for AttachmentListResolver<C> {
    fn default() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }
}

impl<C: Clone> AttachmentListResolver<C> {
    /// Create a resolver; earlier entries take priority.
    pub const fn new(plugins: Vec<PluginRendererEntry<C>>) -> Self {
        Self { plugins }
    }

    /// Registered plugin entries in priority order.
    pub fn plugins(&self) -> &[PluginRendererEntry<C>] {
        &self.plugins
    }

    /// Run the full pipeline for one render.
    pub fn resolve(&self, request: &ResolveRequest) -> AttachmentLayout<C> {
        let ordered = order_files(&request.file_infos);
        let mode = select_mode(request.file_count, &request.file_infos);

        let mut match_failures = Vec::new();
        let attachments = compose(
            &request.post,
            &ordered,
            mode,
            &request.context,
            &self.plugins,
            |failure| match_failures.push(failure),
        );

        AttachmentLayout {
            mode,
            compact: request.context.compact_display,
            post_id: request.post.id.clone(),
            missing: request.file_count.saturating_sub(attachments.len()),
            attachments,
            match_failures,
        }
    }
}
