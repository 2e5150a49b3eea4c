use std::path::{Path, PathBuf};

use super::DatasetSplit;
use crate::config::{IMAGES_DIR, LABELS_DIR};

/// Image and label directories for one split
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitDirs {
    pub images: PathBuf,
    pub labels: PathBuf,
}

/// The `{root}/{split}/{images,labels}` layout that items are copied into.
#[derive(Debug, Clone)]
pub struct DestinationTree {
    root: PathBuf,
}

impl DestinationTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn dirs(&self, split: DatasetSplit) -> SplitDirs {
        let split_root = self.root.join(split.as_str());
        SplitDirs {
            images: split_root.join(IMAGES_DIR),
            labels: split_root.join(LABELS_DIR),
        }
    }

    /// All six directories, train first
    pub fn all_dirs(&self) -> Vec<PathBuf> {
        DatasetSplit::all()
            .into_iter()
            .flat_map(|split| {
                let dirs = self.dirs(split);
                [dirs.images, dirs.labels]
            })
            .collect()
    }
}
