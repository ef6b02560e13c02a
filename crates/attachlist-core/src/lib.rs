//! attachlist-core - Core library for attachlist
//!
//! This crate decides how the files attached to a message post are
//! displayed: their order, whether they form a single preview or a list,
//! and which renderer (a plugin override or one of the two built-ins) shows
//! each file.

pub mod config;
pub mod error;
pub mod file_type;
pub mod models;
pub mod plugin;
pub mod resolver;
pub mod util;

pub use error::{Error, Result};
pub use file_type::FileType;
pub use models::{DisplayContext, FileId, FileInfo, PostRef};
pub use plugin::{FileMatcher, MatchError, MatchFailure, PluginRendererEntry};
pub use resolver::{AttachmentLayout, AttachmentListResolver, DisplayMode, Renderer, ResolveRequest};
