use crate::Category;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "heic"];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "avi", "mkv", "webm", "m4v"];
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "m4a", "flac", "ogg"];
const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "txt", "rtf", "xls", "xlsx", "ppt", "pptx",
];
const ARCHIVE_EXTENSIONS: &[&str] = &["zip", "rar", "7z", "tar", "gz"];

/// Lower-cased text after the last `.`, empty when the name has no dot.
pub fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Maps a file name to its category by extension, case-insensitively.
pub fn classify(filename: &str) -> Category {
    let ext = extension_of(filename);
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        Category::Image
    } else if VIDEO_EXTENSIONS.contains(&ext) {
        Category::Video
    } else if AUDIO_EXTENSIONS.contains(&ext) {
        Category::Audio
    } else if DOCUMENT_EXTENSIONS.contains(&ext) {
        Category::Document
    } else if ARCHIVE_EXTENSIONS.contains(&ext) {
        Category::Archive
    } else {
        Category::Other
    }
}
