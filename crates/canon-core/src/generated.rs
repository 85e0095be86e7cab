//! Generated-code detection by file path.

use regex::Regex;
use std::sync::LazyLock;

static GENERATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(\\bin|\\service|\\obj|\\TemporaryGeneratedFile_|assemblyinfo|assemblyattributes|designer.|\.generated.|\.g.|\.i.)\b",
    )
    .expect("generated-file pattern is valid")
});

/// True when `path` points at tool-generated source that should not be analysed.
///
/// Forward slashes are normalised to backslashes first so the same patterns
/// cover Windows and Unix paths.
#[must_use]
pub fn is_generated_file(path: &str) -> bool {
    let normalized = path.replace('/', "\\");
    GENERATED_RE.is_match(&normalized)
}
