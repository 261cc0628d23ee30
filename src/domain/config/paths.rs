use std::path::{Path, PathBuf};

/// The `.gebug/` configuration root directory name.
pub const ROOT_DIR: &str = ".gebug";

/// Configuration file name inside [`ROOT_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

/// `.gebug/`
pub fn root_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(ROOT_DIR)
}

/// `.gebug/config.yaml`
pub fn config_file(work_dir: &Path) -> PathBuf {
    root_dir(work_dir).join(CONFIG_FILE)
}
