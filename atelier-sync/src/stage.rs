//! The staging cache — a process-scoped directory tree mirroring remote
//! objects for local editing.
//!
//! The tree is purely transient: no index or metadata file lives under
//! the root, and it is safe to delete whenever no document is open.
//! Paths follow `<root>/<KIND-NAMESPACE>/<identity>/<relative path>`,
//! with each open document namespaced onto a disjoint path.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};
use crate::files::StagedFile;

/// Owns the staging root for the lifetime of one process.
///
/// Single-threaded from the caller's perspective: callers serialise
/// writes to the same path, and [`StagingCache::purge_all`] runs once at
/// teardown after all materializations have completed.
#[derive(Debug, Clone)]
pub struct StagingCache {
    root: PathBuf,
}

impl StagingCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write a staged file under the root, creating missing directories,
    /// and return its absolute path. Last writer wins on duplicate
    /// paths.
    pub fn materialize(&self, file: &StagedFile) -> Result<PathBuf, SyncError> {
        let dir = self.root.join(&file.dir);
        create_dir_recursive(&dir)?;
        let path = dir.join(&file.name);
        std::fs::write(&path, file.body.as_bytes()).map_err(|e| io_err(&path, e))?;
        Ok(path)
    }

    /// Delete everything under the root, the root included. A missing
    /// root is a no-op, so running this twice is fine.
    pub fn purge_all(&self) -> Result<(), SyncError> {
        remove_tree(&self.root)
    }
}

/// Walk up from `dir` to the first existing ancestor, then create the
/// missing segments top-down. Reaching an empty ancestor means the walk
/// climbed above the filesystem root — a configuration error, not an
/// I/O failure. An ancestor that exists as a non-directory surfaces the
/// create error verbatim.
fn create_dir_recursive(dir: &Path) -> Result<(), SyncError> {
    if dir.exists() {
        return Ok(());
    }

    let mut missing = vec![dir.to_path_buf()];
    let mut cursor = dir.to_path_buf();
    loop {
        let Some(parent) = cursor.parent() else {
            return Err(SyncError::NoAncestor {
                path: dir.to_path_buf(),
            });
        };
        if parent.as_os_str().is_empty() {
            return Err(SyncError::NoAncestor {
                path: dir.to_path_buf(),
            });
        }
        if parent.exists() {
            break;
        }
        missing.push(parent.to_path_buf());
        cursor = parent.to_path_buf();
    }

    for segment in missing.iter().rev() {
        match std::fs::create_dir(segment) {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::AlreadyExists => {}
            Err(err) => return Err(io_err(segment, err)),
        }
    }
    Ok(())
}

fn remove_tree(dir: &Path) -> Result<(), SyncError> {
    if !dir.exists() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir).map_err(|e| io_err(dir, e))? {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = std::fs::symlink_metadata(&path).map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            remove_tree(&path)?;
        } else {
            std::fs::remove_file(&path).map_err(|e| io_err(&path, e))?;
        }
    }
    std::fs::remove_dir(dir).map_err(|e| io_err(dir, e))?;
    Ok(())
}
