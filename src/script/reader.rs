//! Script reading module
//!
//! Loads a resolved path as text. Every failure (missing, not a regular
//! file, permission denied, invalid UTF-8) collapses into `Absent`.

use crate::logger;
use std::path::Path;
use tokio::fs;

/// Result of a single read attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Found(String),
    Absent,
}

/// Read `path` if it is a regular file.
///
/// Logs the path to the error log when nothing could be read.
pub async fn read(path: &Path) -> ReadOutcome {
    match load_text(path).await {
        Some(content) => ReadOutcome::Found(content),
        None => {
            logger::log_not_found(path);
            ReadOutcome::Absent
        }
    }
}

/// Like [`read`], but also reports `Absent` when `path` does not lie
/// under `root` once both are canonicalized.
pub async fn read_contained(path: &Path, root: &Path) -> ReadOutcome {
    let (Ok(root_canonical), Ok(path_canonical)) =
        (fs::canonicalize(root).await, fs::canonicalize(path).await)
    else {
        logger::log_not_found(path);
        return ReadOutcome::Absent;
    };

    if !path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path outside of {} blocked: {}",
            root.display(),
            path_canonical.display()
        ));
        return ReadOutcome::Absent;
    }

    read(&path_canonical).await
}

async fn load_text(path: &Path) -> Option<String> {
    let metadata = fs::metadata(path).await.ok()?;
    if !metadata.is_file() {
        return None;
    }
    fs::read_to_string(path).await.ok()
}
