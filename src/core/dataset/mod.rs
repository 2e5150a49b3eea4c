mod item;
mod ratios;
mod tree;

pub use item::{DatasetItem, DatasetSplit};
pub use ratios::{SplitCounts, SplitRatios};
pub use tree::{DestinationTree, SplitDirs};
