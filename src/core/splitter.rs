//! Dataset splitting: validate, enumerate, shuffle, partition, copy.
//!
//! Planning (`plan_split`) never touches the destination tree, so invalid
//! input and dry runs leave the filesystem untouched. Execution
//! (`execute_plan`) creates the tree and copies every group.

use chrono::Utc;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::Path;
use tracing::{debug, info, instrument};

use crate::config::{SplitConfig, IMAGE_EXTENSIONS};
use crate::core::dataset::{
    DatasetItem, DatasetSplit, DestinationTree, SplitCounts, SplitRatios,
};
use crate::core::operations::{get_label_path_for_image, DatasetFs};
use crate::core::report::{CopiedFiles, SplitRecord, SplitReport};
use crate::error::{SplitError, SplitResult};

/// Shuffled items divided into three disjoint groups
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub ratios: SplitRatios,
    pub counts: SplitCounts,
    pub train: Vec<DatasetItem>,
    pub test: Vec<DatasetItem>,
    pub val: Vec<DatasetItem>,
}

impl SplitPlan {
    pub fn group(&self, split: DatasetSplit) -> &[DatasetItem] {
        match split {
            DatasetSplit::Train => &self.train,
            DatasetSplit::Val => &self.val,
            DatasetSplit::Test => &self.test,
        }
    }

    pub fn total_items(&self) -> usize {
        self.counts.total()
    }
}

/// Seeded RNG when a seed is given, OS entropy otherwise
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
}

/// Check the source directory, then the ratios.
pub fn validate<F: DatasetFs + ?Sized>(
    fs: &F,
    data_path: &Path,
    train_pct: f64,
    test_pct: f64,
) -> SplitResult<SplitRatios> {
    if !fs.is_dir(data_path) {
        return Err(SplitError::InvalidPath(data_path.to_path_buf()));
    }

    let ratios = SplitRatios::new(train_pct, test_pct)?;
    debug!(
        "Ratios: train {:.3}, test {:.3}, val {:.3}",
        ratios.train_pct(),
        ratios.test_pct(),
        ratios.val_pct()
    );
    Ok(ratios)
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Find every image below `image_dir` and pair it with `{label_dir}/{stem}.txt`
/// when that file exists.
///
/// Items are sorted by image path so a seeded shuffle gives the same split on
/// every platform.
#[instrument(skip_all)]
pub fn enumerate_images<F: DatasetFs + ?Sized>(
    fs: &F,
    image_dir: &Path,
    label_dir: &Path,
) -> SplitResult<Vec<DatasetItem>> {
    let mut image_paths: Vec<_> = fs
        .list_files(image_dir)?
        .into_iter()
        .filter(|path| is_image(path))
        .collect();
    image_paths.sort();

    let items: Vec<DatasetItem> = image_paths
        .into_iter()
        .map(|image_path| {
            let label_path = get_label_path_for_image(&image_path, label_dir)
                .filter(|label| fs.is_file(label));
            DatasetItem::new(image_path, label_path)
        })
        .collect();

    let labeled = items.iter().filter(|item| item.has_label()).count();
    info!(
        "Found {} images in {:?} ({} with labels)",
        items.len(),
        image_dir,
        labeled
    );
    Ok(items)
}

/// Shuffle `items` and cut them into train, test and validation blocks, in
/// that order. Validation takes whatever the floored train and test counts
/// leave over.
pub fn partition<R: Rng + ?Sized>(
    mut items: Vec<DatasetItem>,
    ratios: SplitRatios,
    rng: &mut R,
) -> SplitPlan {
    items.shuffle(rng);

    let counts = SplitCounts::from_ratios(items.len(), &ratios);
    let val = items.split_off(counts.train + counts.test);
    let test = items.split_off(counts.train);
    let train = items;

    SplitPlan {
        ratios,
        counts,
        train,
        test,
        val,
    }
}

/// Copy each item's image into `dest_image_dir` and its label, if any, into
/// `dest_label_dir`. Both directories are created first.
///
/// Stops at the first failed copy. Files already copied stay in place.
#[instrument(skip_all, fields(images = %dest_image_dir.display()))]
pub fn materialize<F: DatasetFs + ?Sized>(
    fs: &F,
    group: &[DatasetItem],
    dest_image_dir: &Path,
    dest_label_dir: &Path,
) -> SplitResult<CopiedFiles> {
    fs.ensure_dir(dest_image_dir)?;
    fs.ensure_dir(dest_label_dir)?;

    let mut copied = CopiedFiles::default();
    for item in group {
        let image_name = item.image_name().ok_or_else(|| SplitError::FileCopy {
            src: item.image_path.clone(),
            dest: dest_image_dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "image path has no file name"),
        })?;
        fs.copy_file(&item.image_path, &dest_image_dir.join(image_name))?;
        copied.images.push(image_name.to_string_lossy().into_owned());

        if let Some(label_path) = &item.label_path {
            if let Some(label_name) = label_path.file_name() {
                fs.copy_file(label_path, &dest_label_dir.join(label_name))?;
                copied.labels.push(label_name.to_string_lossy().into_owned());
            }
        }
    }

    debug!(
        "Copied {} images and {} labels",
        copied.images.len(),
        copied.labels.len()
    );
    Ok(copied)
}

/// Validate the configuration, enumerate the source images and partition them.
/// Nothing is written.
#[instrument(skip_all, fields(data_path = %config.data_path.display()))]
pub fn plan_split<F: DatasetFs + ?Sized, R: Rng + ?Sized>(
    fs: &F,
    config: &SplitConfig,
    rng: &mut R,
) -> SplitResult<SplitPlan> {
    let ratios = validate(fs, &config.data_path, config.train_pct, config.test_pct)?;
    let items = enumerate_images(fs, &config.images_dir(), &config.labels_dir())?;
    let plan = partition(items, ratios, rng);

    info!(
        "Planned split of {} images: train {}, val {}, test {}",
        plan.total_items(),
        plan.counts.train,
        plan.counts.val,
        plan.counts.test
    );
    Ok(plan)
}

/// Create the destination tree under `config.output_root` and copy every group.
///
/// All six directories are created before the first copy, even for empty
/// groups.
#[instrument(skip_all, fields(output = %config.output_root.display()))]
pub fn execute_plan<F: DatasetFs + ?Sized>(
    fs: &F,
    plan: &SplitPlan,
    config: &SplitConfig,
) -> SplitResult<SplitReport> {
    let tree = DestinationTree::new(&config.output_root);
    for dir in tree.all_dirs() {
        fs.ensure_dir(&dir)?;
    }

    let mut splits = Vec::with_capacity(3);
    for split in DatasetSplit::all() {
        let dirs = tree.dirs(split);
        let files = materialize(fs, plan.group(split), &dirs.images, &dirs.labels)?;
        info!(
            "{}: copied {} images, {} labels",
            split.as_str(),
            files.images.len(),
            files.labels.len()
        );
        splits.push(SplitRecord {
            split,
            directory: tree.root().join(split.as_str()),
            files,
        });
    }

    Ok(SplitReport {
        created_at: Utc::now(),
        data_path: config.data_path.clone(),
        output_root: config.output_root.clone(),
        train_pct: plan.ratios.train_pct(),
        test_pct: plan.ratios.test_pct(),
        val_pct: plan.ratios.val_pct(),
        seed: config.seed,
        counts: plan.counts,
        splits,
    })
}
