use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

mod config;
use config::SplitConfig;

mod core;
use crate::core::{execute_plan, make_rng, plan_split, LocalFs};

mod error;
use error::{SplitError, SplitResult};

mod logging;

/// Exit status for rejected input: early termination, not a crash
const EXIT_INVALID_INPUT: u8 = 2;

/// Split a YOLO dataset (images/ + labels/) into train, validation and test folders
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to data folder containing image and annotation files
    #[arg(long)]
    datapath: PathBuf,

    /// Ratio of images to go to train folder (example: ".7")
    #[arg(long = "train_pct", visible_alias = "train-pct", default_value_t = 0.7)]
    train_pct: f64,

    /// Ratio of images to go to test folder (example: ".2")
    #[arg(long = "test_pct", visible_alias = "test-pct", default_value_t = 0.2)]
    test_pct: f64,

    /// Root of the train/validation/test output tree
    #[arg(long, default_value = "data")]
    output: PathBuf,

    /// Seed for the shuffle, for reproducible splits
    #[arg(long)]
    seed: Option<u64>,

    /// Print the split counts without creating or copying anything
    #[arg(long)]
    dry_run: bool,

    /// Write a JSON report of which files went where
    #[arg(long)]
    report: Option<PathBuf>,

    /// Also write logs to a timestamped file in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for SplitConfig {
    fn from(args: Args) -> Self {
        SplitConfig {
            output_root: args.output,
            train_pct: args.train_pct,
            test_pct: args.test_pct,
            seed: args.seed,
            dry_run: args.dry_run,
            report_path: args.report,
            ..SplitConfig::new(args.datapath)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::setup_logging(args.verbose, args.log_dir.as_deref()) {
        eprintln!("Error: {:#}", e);
        return ExitCode::FAILURE;
    }

    let config = SplitConfig::from(args);
    info!("Starting dataset split: {:?}", config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_usage() => {
            match &e {
                SplitError::InvalidPath(path) => warn!("Source directory not found: {:?}", path),
                SplitError::InvalidRatio {
                    train_pct,
                    test_pct,
                } => warn!("Rejected ratios: train {}, test {}", train_pct, test_pct),
                _ => {}
            }
            println!("{}", e);
            ExitCode::from(EXIT_INVALID_INPUT)
        }
        Err(e) => {
            error!("Dataset split aborted: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &SplitConfig) -> SplitResult<()> {
    let fs = LocalFs;
    let mut rng = make_rng(config.seed);

    let plan = plan_split(&fs, config, &mut rng)?;
    println!("Total images: {}", plan.total_items());
    println!(
        "Images → train: {}, val: {}, test: {}",
        plan.counts.train, plan.counts.val, plan.counts.test
    );

    if config.dry_run {
        println!("Dry run: no files copied.");
        return Ok(());
    }

    let report = execute_plan(&fs, &plan, config)?;
    info!(
        "Copied {} images and {} labels into {:?}",
        report.images_copied(),
        report.labels_copied(),
        report.output_root
    );
    if let Some(path) = &config.report_path {
        report.write_to(path)?;
        println!("Report written to {}", path.display());
    }

    println!("✅ Dataset split complete!");
    Ok(())
}
