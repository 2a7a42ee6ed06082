use std::path::Path;

/// Build the name shown for a track: the last path component, extension kept.
///
/// Falls back to the whole path when there is no file name (e.g. `..` or `/`).
pub fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) if !name.is_empty() => name.to_string_lossy().into_owned(),
        _ => path.display().to_string(),
    }
}
