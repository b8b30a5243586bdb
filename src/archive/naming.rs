// src/archive/naming.rs
// =============================================================================
// Turns a URL into the file name of its archived document.
//
// Rule: every character that is not an ASCII letter or digit becomes '_',
// the result is lower-cased, and the extension is appended.
//
//   https://docs.example.com/a?x=1  ->  https___docs_example_com_a_x_1.pdf
//
// The mapping is a pure function of the URL string, so re-running a crawl
// overwrites the same files. Different URLs can map to the same name
// ("/a-b" and "/a_b"); the later one wins.
// =============================================================================

use std::path::{Path, PathBuf};

/// Extension of archived documents
pub const ARCHIVE_EXTENSION: &str = "pdf";

/// Replaces characters outside [A-Za-z0-9] with this
pub const FILLER: char = '_';

/// Sanitized, lower-cased stem for `url` (no extension)
pub fn sanitize_url(url: &str) -> String {
    url.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                FILLER
            }
        })
        .collect()
}

/// Full path of the archived document for `url` inside `output_dir`
pub fn artifact_path(output_dir: &Path, url: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", sanitize_url(url), ARCHIVE_EXTENSION))
}
