//! One-level directory listings.
//!
//! The source tree has a fixed depth (campus, then building), so every pass
//! only looks at the direct children of a directory. Entries come back in the
//! order the filesystem enumerates them.

use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Direct children of `dir`.
///
/// Failing to read `dir` itself is an error. A child whose link target is
/// gone is neither a directory nor a file, so it is skipped.
fn children(dir: &Path) -> impl Iterator<Item = walkdir::Result<DirEntry>> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter(|entry| match entry {
            Err(err) => !is_dangling_link(err),
            Ok(_) => true,
        })
}

fn is_dangling_link(err: &walkdir::Error) -> bool {
    err.depth() == 1
        && err
            .io_error()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

/// Direct subdirectories of `dir` as (name, path) pairs
pub fn subdirectories(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in children(dir) {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push((
                entry.file_name().to_string_lossy().into_owned(),
                entry.into_path(),
            ));
        }
    }
    Ok(dirs)
}

/// Direct regular files of `dir` as (name, path) pairs
pub fn files(dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut files = Vec::new();
    for entry in children(dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push((
                entry.file_name().to_string_lossy().into_owned(),
                entry.into_path(),
            ));
        }
    }
    Ok(files)
}
