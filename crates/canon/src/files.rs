//! Facts file collection

use anyhow::Result;
use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;
use std::fs;

pub const FACTS_SUFFIX: &str = ".facts.json";

#[must_use]
pub fn is_facts_file(path: &Utf8Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.len() > FACTS_SUFFIX.len() && name.ends_with(FACTS_SUFFIX))
}

/// Explicit files are always kept; directories are walked for `*.facts.json`
/// with gitignore filtering.
pub fn collect_facts_files(paths: &[Utf8PathBuf]) -> Result<Vec<Utf8PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        let metadata = fs::metadata(path)?;
        if metadata.is_file() {
            files.push(path.clone());
            continue;
        }

        let walker = WalkBuilder::new(path).standard_filters(true).build();

        for result in walker {
            let entry = result?;
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let p = Utf8PathBuf::from_path_buf(entry.path().to_owned())
                .map_err(|_| anyhow::anyhow!("non-utf8 path: {}", entry.path().display()))?;
            if is_facts_file(&p) {
                files.push(p);
            }
        }
    }
    files.sort();
    Ok(files)
}
