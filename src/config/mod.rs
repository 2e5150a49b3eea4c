mod split_config;

pub use split_config::{
    SplitConfig, IMAGES_DIR, IMAGE_EXTENSIONS, LABELS_DIR, LABEL_EXTENSION,
};
