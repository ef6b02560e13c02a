use serde::Serialize;

use super::mode::DisplayMode;
use super::select::{select_renderer_reporting, Renderer};
use crate::file_type::FileType;
use crate::models::{Callback, DisplayContext, FileId, FileInfo, FilePreviewRequest, PostRef};
use crate::plugin::{MatchFailure, PluginRendererEntry};

/// Props passed to whichever renderer mounts a file.
#[derive(Debug, Clone, Serialize)]
pub struct AttachmentProps {
    pub file_info: FileInfo,
    /// Position in display order
    pub index: usize,
    pub post_id: String,
    pub file_type: FileType,
    pub compact_display: bool,
    pub is_embed_visible: bool,
    pub locale: String,
    #[serde(skip)]
    pub on_dropdown_opened: Option<Callback<bool>>,
    #[serde(skip)]
    pub open_modal: Option<Callback<FilePreviewRequest>>,
}

/// One file paired with its renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedAttachment<C> {
    /// Stable mount key: the file id
    pub key: FileId,
    pub renderer: Renderer<C>,
    pub props: AttachmentProps,
}

/// Pair every ordered file with its renderer and props.
///
/// Output has the same length and order as `ordered`.
pub fn compose<C: Clone>(
    post: &PostRef,
    ordered: &[&FileInfo],
    mode: DisplayMode,
    context: &DisplayContext,
    plugins: &[PluginRendererEntry<C>],
    mut on_failure: impl FnMut(MatchFailure),
) -> Vec<ResolvedAttachment<C>> {
    ordered
        .iter()
        .enumerate()
        .map(|(index, file)| {
            let renderer = select_renderer_reporting(file, mode, context, plugins, &mut on_failure);
            tracing::debug!(
                file_id = %file.id,
                index,
                renderer = renderer.label(),
                "Selected attachment renderer"
            );

            ResolvedAttachment {
                key: file.id.clone(),
                renderer,
                props: AttachmentProps {
                    file_info: (*file).clone(),
                    index,
                    post_id: post.id.clone(),
                    file_type: FileType::of(file),
                    compact_display: context.compact_display,
                    is_embed_visible: context.is_embed_visible,
                    locale: context.locale.clone(),
                    on_dropdown_opened: context.on_dropdown_opened.clone(),
                    open_modal: context.open_modal.clone(),
                },
            }
        })
        .collect()
}
