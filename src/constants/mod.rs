// Default Lovász parameter, 3/4
pub(crate) const DEFAULT_DELTA_NUMER: u32 = 3;
pub(crate) const DEFAULT_DELTA_DENOM: u32 = 4;

// Directory and file names for per-project and per-user configuration
pub(crate) const CONFIG_DIR_NAME: &str = ".lll";
pub(crate) const GLOBAL_CONFIG_DIR_NAME: &str = "lll";
pub(crate) const CONFIG_FILE_NAME: &str = "config.toml";

pub(crate) const SPINNER_TICK_MS: u64 = 120;

/// Basis used by `--test`, rows of the 3x3 textbook example.
pub(crate) const DEMO_BASIS: [[i64; 3]; 3] = [[1, 1, 1], [-1, 0, 2], [3, 5, 6]];
