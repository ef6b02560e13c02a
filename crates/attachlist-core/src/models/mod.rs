//! Data models for attachlist

mod display;
mod file_info;
mod post;

pub use display::{Callback, DisplayContext, FilePreviewRequest};
pub use file_info::{FileId, FileInfo};
pub use post::PostRef;
