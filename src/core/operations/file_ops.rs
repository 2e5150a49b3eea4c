use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use walkdir::WalkDir;

use crate::config::LABEL_EXTENSION;
use crate::error::{SplitError, SplitResult};

/// The filesystem capabilities the splitter relies on.
///
/// Partitioning and copying only ever go through this trait, so they can run
/// against an in-memory fake in tests.
pub trait DatasetFs {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Every file below `root`, at any depth. A missing root yields nothing.
    fn list_files(&self, root: &Path) -> SplitResult<Vec<PathBuf>>;

    /// Copy `src` to `dest`, overwriting `dest` if it exists
    fn copy_file(&self, src: &Path, dest: &Path) -> SplitResult<()>;

    /// Create `path` and its parents; no-op if it already exists
    fn ensure_dir(&self, path: &Path) -> SplitResult<()>;
}

/// `DatasetFs` backed by the local disk
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl DatasetFs for LocalFs {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, root: &Path) -> SplitResult<Vec<PathBuf>> {
        if !root.is_dir() {
            warn!("Directory does not exist, nothing to list: {:?}", root);
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|e| SplitError::ListFiles {
                path: root.to_path_buf(),
                reason: e.to_string(),
            })?;
            // Follows symlinked files, skips directories
            if entry.path().is_file() {
                files.push(entry.into_path());
            }
        }

        debug!("Listed {} files under {:?}", files.len(), root);
        Ok(files)
    }

    fn copy_file(&self, src: &Path, dest: &Path) -> SplitResult<()> {
        debug!("Copying file from {:?} to {:?}", src, dest);

        if let Err(e) = fs::copy(src, dest) {
            error!("Failed to copy file from {:?} to {:?}: {}", src, dest, e);
            return Err(SplitError::FileCopy {
                src: src.to_path_buf(),
                dest: dest.to_path_buf(),
                source: e,
            });
        }

        Ok(())
    }

    fn ensure_dir(&self, path: &Path) -> SplitResult<()> {
        fs::create_dir_all(path).map_err(|e| {
            error!("Failed to create directory {:?}: {}", path, e);
            SplitError::CreateDir {
                path: path.to_path_buf(),
                source: e,
            }
        })
    }
}

/// Get the label file path for an image: `{label_dir}/{stem}.txt`.
///
/// The stem match is case-sensitive. Returns `None` when the image path has
/// no file stem.
pub fn get_label_path_for_image(image_path: &Path, label_dir: &Path) -> Option<PathBuf> {
    image_path.file_stem().map(|stem| {
        let mut file_name = stem.to_os_string();
        file_name.push(".");
        file_name.push(LABEL_EXTENSION);
        label_dir.join(file_name)
    })
}
