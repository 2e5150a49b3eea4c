mod file_ops;
#[cfg(test)]
mod memory_fs;

pub use file_ops::{get_label_path_for_image, DatasetFs, LocalFs};
#[cfg(test)]
pub use memory_fs::MemoryFs;
