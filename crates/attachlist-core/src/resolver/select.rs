//! Renderer selection for a single file.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use serde::{Deserialize, Serialize};

use super::mode::DisplayMode;
use crate::file_type::is_previewable_image;
use crate::models::{DisplayContext, FileInfo};
use crate::plugin::{MatchError, MatchFailure, PluginRendererEntry};

/// The renderer chosen for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Renderer<C> {
    /// Renderer supplied by a plugin entry
    Plugin {
        entry_id: String,
        plugin_id: String,
        component: C,
    },
    /// Built-in inline preview for a lone image
    SingleImage,
    /// Built-in generic attachment row
    FileAttachment,
}

impl<C> Renderer<C> {
    /// Short name for logs and text output.
    pub fn label(&self) -> &str {
        match self {
            Self::Plugin { plugin_id, .. } => plugin_id,
            Self::SingleImage => "single_image",
            Self::FileAttachment => "file_attachment",
        }
    }

    pub const fn is_plugin(&self) -> bool {
        matches!(self, Self::Plugin { .. })
    }
}

/// Pick exactly one renderer for `file`.
///
/// Plugins are tried in order and the first match wins, even over the inline
/// image preview. Without a plugin match, a previewable image in single mode
/// gets [`Renderer::SingleImage`] and everything else falls back to
/// [`Renderer::FileAttachment`]. Faulty predicates are skipped.
///
/// A panicking predicate is caught and treated as a non-match, but the
/// process panic hook still runs first. With the default hook that prints
/// the panic message to stderr; embedders that need silence must install
/// their own hook with [`std::panic::set_hook`].
pub fn select_renderer<C: Clone>(
    file: &FileInfo,
    mode: DisplayMode,
    context: &DisplayContext,
    plugins: &[PluginRendererEntry<C>],
) -> Renderer<C> {
    select_renderer_reporting(file, mode, context, plugins, |_| {})
}

/// [`select_renderer`], handing every skipped predicate failure to `on_failure`.
///
/// Nothing is logged here; reporting is left to `on_failure`. The panic hook
/// caveat on [`select_renderer`] applies.
pub fn select_renderer_reporting<C: Clone>(
    file: &FileInfo,
    mode: DisplayMode,
    context: &DisplayContext,
    plugins: &[PluginRendererEntry<C>],
    mut on_failure: impl FnMut(MatchFailure),
) -> Renderer<C> {
    for entry in plugins {
        match run_matcher(entry, file) {
            Ok(true) => {
                return Renderer::Plugin {
                    entry_id: entry.id.clone(),
                    plugin_id: entry.plugin_id.clone(),
                    component: entry.component.clone(),
                };
            }
            Ok(false) => {}
            Err(error) => on_failure(MatchFailure {
                file_id: file.id.clone(),
                entry_id: entry.id.clone(),
                plugin_id: entry.plugin_id.clone(),
                error,
            }),
        }
    }

    if mode == DisplayMode::Single
        && is_previewable_image(&file.effective_extension(), context.enable_svgs)
    {
        Renderer::SingleImage
    } else {
        Renderer::FileAttachment
    }
}

fn run_matcher<C>(entry: &PluginRendererEntry<C>, file: &FileInfo) -> Result<bool, MatchError> {
    panic::catch_unwind(AssertUnwindSafe(|| entry.matches(file)))
        .unwrap_or_else(|payload| Err(MatchError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(ToString::to_string)
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::FileMatcher;
    use pretty_assertions::assert_eq;

    struct Failing;

    impl FileMatcher for Failing {
        fn matches(&self, _file: &FileInfo) -> Result<bool, MatchError> {
            Err("lookup failed".into())
        }
    }

    fn extension_plugin(id: &str, extension: &'static str) -> PluginRendererEntry<String> {
        PluginRendererEntry::new(id, id, format!("{extension}-cmp"), move |file: &FileInfo| {
            file.extension == extension
        })
    }

    fn svg_context() -> DisplayContext {
        DisplayContext {
            enable_svgs: true,
            ..DisplayContext::default()
        }
    }

    #[test]
    fn single_png_uses_single_image() {
        let file = FileInfo::new("file_id_1", "image.png", "png");
        let renderer = select_renderer::<String>(
            &file,
            DisplayMode::Single,
            &DisplayContext::default(),
            &[],
        );
        assert_eq!(renderer, Renderer::SingleImage);
    }

    #[test]
    fn list_mode_never_uses_single_image() {
        let file = FileInfo::new("file_id_1", "image.png", "png");
        let renderer =
            select_renderer::<String>(&file, DisplayMode::List, &svg_context(), &[]);
        assert_eq!(renderer, Renderer::FileAttachment);
    }

    #[test]
    fn svg_requires_previews_enabled() {
        let file = FileInfo::new("file_id_1", "image.svg", "svg");

        for mode in [DisplayMode::Single, DisplayMode::List] {
            let renderer =
                select_renderer::<String>(&file, mode, &DisplayContext::default(), &[]);
            assert_eq!(renderer, Renderer::FileAttachment);
        }

        let renderer = select_renderer::<String>(&file, DisplayMode::Single, &svg_context(), &[]);
        assert_eq!(renderer, Renderer::SingleImage);
    }

    #[test]
    fn non_image_in_single_mode_is_generic() {
        let file = FileInfo::new("file_id_1", "file.txt", "txt");
        let renderer =
            select_renderer::<String>(&file, DisplayMode::Single, &svg_context(), &[]);
        assert_eq!(renderer, Renderer::FileAttachment);
    }

    #[test]
    fn plugin_takes_precedence_over_single_image() {
        let file = FileInfo::new("file_id_1", "image.svg", "svg");
        let plugins = [extension_plugin("svg", "svg")];
        let renderer = select_renderer(&file, DisplayMode::Single, &svg_context(), &plugins);
        assert_eq!(
            renderer,
            Renderer::Plugin {
                entry_id: "svg".to_string(),
                plugin_id: "svg".to_string(),
                component: "svg-cmp".to_string(),
            }
        );
    }

    #[test]
    fn first_matching_entry_wins() {
        let file = FileInfo::new("file_id_1", "audio.mp3", "mp3");
        let plugins = [
            extension_plugin("video", "mp4"),
            extension_plugin("audio", "mp3"),
            PluginRendererEntry::new("any", "any", "any-cmp".to_string(), |_: &FileInfo| true),
        ];

        let renderer = select_renderer(&file, DisplayMode::List, &svg_context(), &plugins);
        assert_eq!(renderer.label(), "audio");

        let winner = plugins
            .iter()
            .position(|entry| entry.matches(&file) == Ok(true))
            .unwrap();
        assert_eq!(plugins[winner].id, "audio");
    }

    #[test]
    fn failing_matcher_is_skipped_and_reported() {
        let file = FileInfo::new("file_id_1", "audio.mp3", "mp3");
        let plugins = [
            PluginRendererEntry::new("broken", "broken", "broken-cmp".to_string(), Failing),
            extension_plugin("audio", "mp3"),
        ];

        let mut failures = Vec::new();
        let renderer = select_renderer_reporting(
            &file,
            DisplayMode::List,
            &DisplayContext::default(),
            &plugins,
            |failure| failures.push(failure),
        );

        assert_eq!(renderer.label(), "audio");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].entry_id, "broken");
        assert_eq!(
            failures[0].error,
            MatchError::Failed("lookup failed".to_string())
        );
    }

    #[test]
    fn panicking_matcher_falls_back_to_builtin() {
        let file = FileInfo::new("file_id_1", "image.png", "png");
        let plugins = [PluginRendererEntry::new(
            "panics",
            "panics",
            "panics-cmp".to_string(),
            |_: &FileInfo| -> bool { panic!("matcher exploded") },
        )];

        let mut failures = Vec::new();
        let renderer = select_renderer_reporting(
            &file,
            DisplayMode::Single,
            &DisplayContext::default(),
            &plugins,
            |failure| failures.push(failure),
        );

        assert_eq!(renderer, Renderer::SingleImage);
        assert_eq!(
            failures[0].error,
            MatchError::Panicked("matcher exploded".to_string())
        );
    }

    #[test]
    fn panicking_matcher_with_formatted_message_is_reported() {
        let file = FileInfo::new("file_id_1", "notes.txt", "txt");
        let plugins = [
            PluginRendererEntry::new(
                "panics",
                "panics",
                "panics-cmp".to_string(),
                |file: &FileInfo| -> bool { panic!("no handler for {}", file.extension) },
            ),
            extension_plugin("text", "txt"),
        ];

        let mut failures = Vec::new();
        let renderer = select_renderer_reporting(
            &file,
            DisplayMode::List,
            &DisplayContext::default(),
            &plugins,
            |failure| failures.push(failure),
        );

        assert_eq!(renderer.label(), "text");
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].plugin_id, "panics");
        assert_eq!(
            failures[0].error,
            MatchError::Panicked("no handler for txt".to_string())
        );
    }

    #[test]
    fn missing_extension_uses_file_name() {
        let file = FileInfo::new("file_id_1", "photo.JPEG", "");
        let renderer = select_renderer::<String>(
            &file,
            DisplayMode::Single,
            &DisplayContext::default(),
            &[],
        );
        assert_eq!(renderer, Renderer::SingleImage);
    }
}
