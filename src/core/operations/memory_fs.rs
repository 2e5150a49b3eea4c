use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use super::DatasetFs;
use crate::error::{SplitError, SplitResult};

/// In-memory `DatasetFs` for tests
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    dirs: RefCell<BTreeSet<PathBuf>>,
    failing_copies: RefCell<BTreeSet<PathBuf>>,
    copy_log: RefCell<Vec<(PathBuf, PathBuf)>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source-side directory, parents included
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors().filter(|a| !a.as_os_str().is_empty()) {
            dirs.insert(ancestor.to_path_buf());
        }
    }

    pub fn add_file(&self, path: impl Into<PathBuf>, contents: &[u8]) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files.borrow_mut().insert(path, contents.to_vec());
    }

    /// Make any copy whose destination is `dest` fail
    pub fn fail_copy_to(&self, dest: impl Into<PathBuf>) {
        self.failing_copies.borrow_mut().insert(dest.into());
    }

    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    /// Files directly inside `dir`
    pub fn files_in(&self, dir: &Path) -> Vec<PathBuf> {
        self.files
            .borrow()
            .keys()
            .filter(|p| p.parent() == Some(dir))
            .cloned()
            .collect()
    }

    pub fn copies(&self) -> Vec<(PathBuf, PathBuf)> {
        self.copy_log.borrow().clone()
    }

    pub fn dir_count(&self) -> usize {
        self.dirs.borrow().len()
    }
}

impl DatasetFs for MemoryFs {
    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.borrow().contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn list_files(&self, root: &Path) -> SplitResult<Vec<PathBuf>> {
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|p| p.starts_with(root) && p.as_path() != root)
            .cloned()
            .collect())
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> SplitResult<()> {
        let copy_error = |kind: io::ErrorKind, msg: &str| SplitError::FileCopy {
            src: src.to_path_buf(),
            dest: dest.to_path_buf(),
            source: io::Error::new(kind, msg.to_string()),
        };

        if self.failing_copies.borrow().contains(dest) {
            return Err(copy_error(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        let contents = self
            .read(src)
            .ok_or_else(|| copy_error(io::ErrorKind::NotFound, "source not found"))?;
        let parent_exists = dest.parent().map_or(false, |p| self.is_dir(p));
        if !parent_exists {
            return Err(copy_error(io::ErrorKind::NotFound, "destination directory missing"));
        }

        self.files.borrow_mut().insert(dest.to_path_buf(), contents);
        self.copy_log
            .borrow_mut()
            .push((src.to_path_buf(), dest.to_path_buf()));
        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> SplitResult<()> {
        self.add_dir(path);
        Ok(())
    }
}
