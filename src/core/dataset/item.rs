use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetSplit {
    Train,
    Val,
    Test,
}

impl DatasetSplit {
    /// Name of the split's directory in the destination tree
    pub fn as_str(&self) -> &str {
        match self {
            DatasetSplit::Train => "train",
            DatasetSplit::Val => "validation",
            DatasetSplit::Test => "test",
        }
    }

    /// Splits in the order they are materialized
    pub fn all() -> [DatasetSplit; 3] {
        [DatasetSplit::Train, DatasetSplit::Val, DatasetSplit::Test]
    }
}

/// An image file and its annotation, if one exists.
///
/// Items are built during enumeration and dropped once copied.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetItem {
    pub image_path: PathBuf,
    pub label_path: Option<PathBuf>,
}

impl DatasetItem {
    pub fn new(image_path: PathBuf, label_path: Option<PathBuf>) -> Self {
        Self {
            image_path,
            label_path,
        }
    }

    pub fn image_name(&self) -> Option<&std::ffi::OsStr> {
        self.image_path.file_name()
    }

    pub fn has_label(&self) -> bool {
        self.label_path.is_some()
    }
}
