use std::path::Path;

/// File types worth backing up; everything else is skipped.
pub const DEFAULT_ALLOWED_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".gif", ".png", ".mp4"];

/// Case-insensitive check against the configured extension allow-list.
pub fn is_supported_media(file_name: &str, allowed: &[String]) -> bool {
    let Some(ext) = Path::new(file_name).extension().and_then(|e| e.to_str()) else {
        return false;
    };
    let ext = format!(".{}", ext.to_ascii_lowercase());
    allowed.iter().any(|allowed| *allowed == ext)
}

/// A file is ignored when its full source path contains any configured
/// substring.
pub fn is_in_ignored_folder(path: &Path, ignored: &[String]) -> bool {
    let path = path.to_string_lossy();
    ignored.iter().any(|needle| path.contains(needle.as_str()))
}
