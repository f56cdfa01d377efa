use once_cell::sync::Lazy;
use regex::Regex;

/// Reduce a caller-supplied filename to a single safe path component.
///
/// Directory parts are dropped (both separator styles), runs of characters
/// outside `[A-Za-z0-9._-]` collapse to `_`, and leading/trailing dots and
/// underscores are stripped so the result can never escape the upload
/// directory or hide as a dotfile. Returns `"upload"` when nothing usable
/// remains.
pub fn sanitize_filename(filename: &str) -> String {
    static UNSAFE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]+").unwrap());

    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let cleaned = UNSAFE.replace_all(base, "_");
    let cleaned = cleaned.trim_matches(|c| c == '.' || c == '_');

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}
