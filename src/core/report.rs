use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::dataset::{DatasetSplit, SplitCounts};
use crate::error::{SplitError, SplitResult};

/// File names copied into one split's image and label directories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopiedFiles {
    pub images: Vec<String>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SplitRecord {
    pub split: DatasetSplit,
    pub directory: PathBuf,
    #[serde(flatten)]
    pub files: CopiedFiles,
}

/// Record of a completed split run, written as JSON on request
#[derive(Debug, Clone, Serialize)]
pub struct SplitReport {
    pub created_at: DateTime<Utc>,
    pub data_path: PathBuf,
    pub output_root: PathBuf,
    pub train_pct: f64,
    pub test_pct: f64,
    pub val_pct: f64,
    pub seed: Option<u64>,
    pub counts: SplitCounts,
    pub splits: Vec<SplitRecord>,
}

impl SplitReport {
    pub fn images_copied(&self) -> usize {
        self.splits.iter().map(|s| s.files.images.len()).sum()
    }

    pub fn labels_copied(&self) -> usize {
        self.splits.iter().map(|s| s.files.labels.len()).sum()
    }

    /// Save the report as pretty-printed JSON, creating parent directories
    pub fn write_to(&self, path: &Path) -> SplitResult<()> {
        let report_error = |reason: String| SplitError::Report {
            path: path.to_path_buf(),
            reason,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| report_error(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| report_error(e.to_string()))?;
        fs::write(path, json).map_err(|e| report_error(e.to_string()))?;

        info!("Split report saved to: {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_report() -> SplitReport {
        SplitReport {
            created_at: Utc::now(),
            data_path: PathBuf::from("dataset"),
            output_root: PathBuf::from("data"),
            train_pct: 0.7,
            test_pct: 0.2,
            val_pct: 0.1,
            seed: Some(7),
            counts: SplitCounts {
                train: 1,
                test: 0,
                val: 1,
            },
            splits: vec![
                SplitRecord {
                    split: DatasetSplit::Train,
                    directory: PathBuf::from("data/train"),
                    files: CopiedFiles {
                        images: vec!["a.jpg".to_string()],
                        labels: vec!["a.txt".to_string()],
                    },
                },
                SplitRecord {
                    split: DatasetSplit::Val,
                    directory: PathBuf::from("data/validation"),
                    files: CopiedFiles {
                        images: vec!["b.png".to_string()],
                        labels: vec![],
                    },
                },
            ],
        }
    }

    #[test]
    fn test_report_totals() {
        let report = create_test_report();
        assert_eq!(report.images_copied(), 2);
        assert_eq!(report.labels_copied(), 1);
    }

    #[test]
    fn test_report_json_shape() {
        let json = serde_json::to_value(create_test_report()).unwrap();

        assert_eq!(json["seed"], 7);
        assert_eq!(json["counts"]["train"], 1);
        assert_eq!(json["splits"][0]["split"], "train");
        assert_eq!(json["splits"][0]["images"][0], "a.jpg");
        assert_eq!(json["splits"][1]["split"], "val");
        assert!(json["splits"][1]["labels"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_write_report_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("split.json");

        create_test_report().write_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&contents).unwrap();
        assert_eq!(json["data_path"], "dataset");
    }
}
