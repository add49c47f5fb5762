use super::LllConfig;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::lll_error::{LllError, LllErrorKind};
use log::debug;
use std::env;
use std::path::{Path, PathBuf};

/// Load `.lll/config.toml` from the working directory.
pub(crate) fn load_local() -> Result<LllConfig, Box<LllError>> {
    let cwd = env::current_dir().map_err(|e| {
        LllError::boxed(
            "Failed to get current directory",
            &e.to_string(),
            LllErrorKind::Config,
        )
    })?;
    let path = local_config_path(&cwd);
    debug!("Project config - resolved path: {}", path.display());
    LllConfig::read(&path)
}

pub(crate) fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}
