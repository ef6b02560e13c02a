//! File type classification by extension.

use serde::{Deserialize, Serialize};

use crate::models::FileInfo;

const KIB_BYTES: u64 = 1024;
const MIB_BYTES: u64 = KIB_BYTES * 1024;
const GIB_BYTES: u64 = MIB_BYTES * 1024;
const SIZE_UNITS: [(u64, &str); 3] = [(KIB_BYTES, "KB"), (MIB_BYTES, "MB"), (GIB_BYTES, "GB")];

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "gif", "bmp", "png", "jpeg", "tiff", "tif", "psd"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "wma", "m4a", "flac", "aac", "ogg", "m4r"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "webm", "mkv", "wmv", "mpg", "mov", "flv"];
const SPREADSHEET_EXTENSIONS: &[&str] = &["ods", "xls", "xlsx", "csv"];
const PRESENTATION_EXTENSIONS: &[&str] = &["odp", "ppt", "pptx"];
const WORD_EXTENSIONS: &[&str] = &["doc", "docx", "odt", "rtf"];
const TEXT_EXTENSIONS: &[&str] = &["txt", "log"];
const CODE_EXTENSIONS: &[&str] = &[
    "bash", "c", "cc", "clj", "coffee", "cpp", "cs", "css", "dart", "diff", "erl", "ex", "exs",
    "go", "h", "hpp", "hs", "html", "java", "js", "json", "jsx", "kt", "less", "lua", "m", "md",
    "php", "pl", "ps1", "py", "r", "rb", "rs", "scala", "scss", "sh", "sql", "swift", "tex",
    "toml", "ts", "tsx", "vb", "xml", "yaml", "yml", "zsh",
];

/// Coarse file category used to pick icons and preview behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Image,
    Svg,
    Audio,
    Video,
    Pdf,
    Spreadsheet,
    Presentation,
    Word,
    Text,
    Code,
    Patch,
    Other,
}

impl FileType {
    /// Classify a normalized (lowercase, dotless) extension.
    pub fn from_extension(extension: &str) -> Self {
        let contains = |set: &[&str]| set.contains(&extension);

        if extension.is_empty() {
            Self::Other
        } else if contains(IMAGE_EXTENSIONS) {
            Self::Image
        } else if extension == "svg" {
            Self::Svg
        } else if contains(AUDIO_EXTENSIONS) {
            Self::Audio
        } else if contains(VIDEO_EXTENSIONS) {
            Self::Video
        } else if extension == "pdf" {
            Self::Pdf
        } else if contains(SPREADSHEET_EXTENSIONS) {
            Self::Spreadsheet
        } else if contains(PRESENTATION_EXTENSIONS) {
            Self::Presentation
        } else if contains(WORD_EXTENSIONS) {
            Self::Word
        } else if contains(TEXT_EXTENSIONS) {
            Self::Text
        } else if contains(CODE_EXTENSIONS) {
            Self::Code
        } else if extension == "patch" {
            Self::Patch
        } else {
            Self::Other
        }
    }

    /// Classify a file by extension, refined by MIME type when the extension
    /// is unknown.
    ///
    /// MIME never yields `Image` or `Svg`: only a known extension makes a
    /// file eligible for inline image preview.
    pub fn of(file: &FileInfo) -> Self {
        let by_extension = Self::from_extension(&file.effective_extension());
        if by_extension != Self::Other {
            return by_extension;
        }

        let mime_type = file.effective_mime_type();
        if mime_type.starts_with("audio/") {
            Self::Audio
        } else if mime_type.starts_with("video/") {
            Self::Video
        } else if mime_type.starts_with("text/") {
            Self::Text
        } else if mime_type == "application/pdf" {
            Self::Pdf
        } else {
            Self::Other
        }
    }

    /// Short lowercase label, matching the serialized form.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Svg => "svg",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Spreadsheet => "spreadsheet",
            Self::Presentation => "presentation",
            Self::Word => "word",
            Self::Text => "text",
            Self::Code => "code",
            Self::Patch => "patch",
            Self::Other => "other",
        }
    }
}

/// Whether a file with this extension may use the inline image preview.
///
/// SVG qualifies only when SVG previews are enabled.
pub fn is_previewable_image(extension: &str, enable_svgs: bool) -> bool {
    match FileType::from_extension(extension) {
        FileType::Image => true,
        FileType::Svg => enable_svgs,
        _ => false,
    }
}

/// Human-readable size with one decimal for units above bytes.
///
/// A value that rounds up to 1024 of one unit is shown in the next unit.
pub fn format_file_size(size_bytes: u64) -> String {
    if size_bytes < KIB_BYTES {
        return format!("{size_bytes} B");
    }

    let (tenths, suffix) = SIZE_UNITS
        .iter()
        .map(|&(unit, suffix)| (rounded_tenths(size_bytes, unit), suffix))
        .find(|(tenths, _)| *tenths < KIB_BYTES * 10)
        .unwrap_or_else(|| (rounded_tenths(size_bytes, GIB_BYTES), "GB"));

    format!("{}.{} {suffix}", tenths / 10, tenths % 10)
}

fn rounded_tenths(bytes: u64, unit: u64) -> u64 {
    (bytes / unit) * 10 + ((bytes % unit) * 10 + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_known_extensions() {
        assert_eq!(FileType::from_extension("png"), FileType::Image);
        assert_eq!(FileType::from_extension("jpeg"), FileType::Image);
        assert_eq!(FileType::from_extension("svg"), FileType::Svg);
        assert_eq!(FileType::from_extension("mp3"), FileType::Audio);
        assert_eq!(FileType::from_extension("mp4"), FileType::Video);
        assert_eq!(FileType::from_extension("pdf"), FileType::Pdf);
        assert_eq!(FileType::from_extension("xlsx"), FileType::Spreadsheet);
        assert_eq!(FileType::from_extension("pptx"), FileType::Presentation);
        assert_eq!(FileType::from_extension("docx"), FileType::Word);
        assert_eq!(FileType::from_extension("txt"), FileType::Text);
        assert_eq!(FileType::from_extension("rs"), FileType::Code);
        assert_eq!(FileType::from_extension("patch"), FileType::Patch);
        assert_eq!(FileType::from_extension("xyz"), FileType::Other);
        assert_eq!(FileType::from_extension(""), FileType::Other);
    }

    #[test]
    fn mime_refines_unknown_extension_but_never_to_image() {
        let audio = FileInfo::new("a", "voice", "").with_mime_type("audio/ogg");
        assert_eq!(FileType::of(&audio), FileType::Audio);

        let image = FileInfo::new("b", "picture", "").with_mime_type("image/png");
        assert_eq!(FileType::of(&image), FileType::Other);

        let named = FileInfo::new("c", "photo.JPG", "");
        assert_eq!(FileType::of(&named), FileType::Image);
    }

    #[test]
    fn svg_preview_requires_flag() {
        assert!(is_previewable_image("png", false));
        assert!(!is_previewable_image("svg", false));
        assert!(is_previewable_image("svg", true));
        assert!(!is_previewable_image("txt", true));
        assert!(!is_previewable_image("", true));
    }

    #[test]
    fn format_file_size_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(1536), "1.5 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn format_file_size_rounds_into_next_unit() {
        assert_eq!(format_file_size(KIB_BYTES - 1), "1023 B");
        assert_eq!(format_file_size(MIB_BYTES - 1), "1.0 MB");
        assert_eq!(format_file_size(MIB_BYTES - 60), "1023.9 KB");
        assert_eq!(format_file_size(GIB_BYTES - 1), "1.0 GB");
        assert_eq!(format_file_size(1024 * GIB_BYTES), "1024.0 GB");
    }
}
