use std::collections::HashSet;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::decode::SourceFormat;

/// Recursively collects every convertible file under `root`.
///
/// Files are grouped per recognized extension and the groups concatenated in
/// the order [`SourceFormat::RECOGNIZED_EXTENSIONS`] declares, matching one
/// glob pass per extension. Paths are deduplicated as a guard against
/// extension lists ever overlapping.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut buckets: Vec<Vec<PathBuf>> =
        vec![Vec::new(); SourceFormat::RECOGNIZED_EXTENSIONS.len()];

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| std::io::Error::other(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(extension) = entry.path().extension() else {
            continue;
        };
        let extension = extension.to_string_lossy().to_lowercase();
        if let Some(index) = SourceFormat::RECOGNIZED_EXTENSIONS
            .iter()
            .position(|&e| e == extension)
        {
            buckets[index].push(entry.path().to_path_buf());
        }
    }

    let mut seen = HashSet::new();
    let mut files = Vec::new();
    for bucket in buckets {
        for path in bucket {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}
