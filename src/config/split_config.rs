use serde::Serialize;
use std::path::PathBuf;

/// Source images, searched recursively
pub const IMAGES_DIR: &str = "images";
/// Annotations, looked up flat by image stem
pub const LABELS_DIR: &str = "labels";
pub const LABEL_EXTENSION: &str = "txt";
/// Compared case-insensitively
pub const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Configuration for a single split run
///
/// Everything the splitter needs is passed in through this struct, including
/// the output root, so nothing depends on global argument state.
#[derive(Debug, Clone, Serialize)]
pub struct SplitConfig {
    /// Directory containing `images/` and `labels/`
    pub data_path: PathBuf,
    /// Root of the train/validation/test destination tree
    pub output_root: PathBuf,
    pub train_pct: f64,
    pub test_pct: f64,
    /// Seed for the shuffle; `None` draws from OS entropy
    pub seed: Option<u64>,
    /// Plan only, copy nothing
    pub dry_run: bool,
    /// Where to write the JSON split report, if anywhere
    pub report_path: Option<PathBuf>,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::new(),
            output_root: PathBuf::from("data"),
            train_pct: 0.7,
            test_pct: 0.2,
            seed: None,
            dry_run: false,
            report_path: None,
        }
    }
}

impl SplitConfig {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            ..Self::default()
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.data_path.join(IMAGES_DIR)
    }

    pub fn labels_dir(&self) -> PathBuf {
        self.data_path.join(LABELS_DIR)
    }
}
