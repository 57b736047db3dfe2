//! Filesystem module.
//!
//! Provides:
//! - Data file path resolution
//! - Download URL and filename handling

pub mod naming;
pub mod paths;

pub use naming::{data_file_url, file_name_from_url, sanitize_filename};
pub use paths::{
    default_root, ensure_dir, get_data_path, DataPathResolver, DATA_DIR, PROJECT_ROOT_VAR,
};
