//! Per-render display context

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::file_info::FileInfo;

/// A shareable handler supplied by the embedding layer.
///
/// The resolver only forwards handlers into renderer props; it never calls
/// them while resolving.
pub struct Callback<A>(Arc<dyn Fn(A) + Send + Sync>);

impl<A> Callback<A> {
    /// Wrap a handler function.
    pub fn new(handler: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self(Arc::new(handler))
    }

    /// Invoke the handler.
    pub fn call(&self, arg: A) {
        (self.0)(arg);
    }
}

impl<A> Clone for Callback<A> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<A> fmt::Debug for Callback<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Request to open the file preview modal at a given attachment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePreviewRequest {
    /// Post the files belong to
    pub post_id: String,
    /// Files in display order
    pub file_infos: Vec<FileInfo>,
    /// Index of the clicked file within `file_infos`
    pub start_index: usize,
}

/// Display configuration for one resolve call.
///
/// Threaded explicitly through every stage; there is no global equivalent.
#[derive(Debug, Clone)]
pub struct DisplayContext {
    /// Render rows in the condensed message style
    pub compact_display: bool,
    /// Allow SVG files to use the inline image preview
    pub enable_svgs: bool,
    /// Whether inline embeds are currently expanded
    pub is_embed_visible: bool,
    /// Locale for labels rendered by the embedding layer
    pub locale: String,
    /// Notified when a file's dropdown menu opens or closes
    pub on_dropdown_opened: Option<Callback<bool>>,
    /// Opens the file preview modal
    pub open_modal: Option<Callback<FilePreviewRequest>>,
}

impl DisplayContext {
    /// Attach the dropdown notification handler.
    #[must_use]
    pub fn with_dropdown_handler(mut self, handler: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_dropdown_opened = Some(Callback::new(handler));
        self
    }

    /// Attach the modal opener.
    #[must_use]
    pub fn with_modal_opener(
        mut self,
        opener: impl Fn(FilePreviewRequest) + Send + Sync + 'static,
    ) -> Self {
        self.open_modal = Some(Callback::new(opener));
        self
    }
}

impl Default for DisplayContext {
    fn default() -> Self {
        Self {
            compact_display: false,
            enable_svgs: false,
            is_embed_visible: false,
            locale: "en".to_string(),
            on_dropdown_opened: None,
            open_modal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_display_context_default() {
        let context = DisplayContext::default();
        assert!(!context.enable_svgs);
        assert!(!context.compact_display);
        assert_eq!(context.locale, "en");
        assert!(context.open_modal.is_none());
    }

    #[test]
    fn test_callback_clones_share_handler() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let context = DisplayContext::default().with_dropdown_handler(move |opened| {
            if opened {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        let handler = context.on_dropdown_opened.clone().unwrap();
        handler.call(true);
        handler.call(false);
        context.on_dropdown_opened.unwrap().call(true);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(format!("{handler:?}"), "Callback(..)");
    }
}
