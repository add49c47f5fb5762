use super::LllConfig;
use crate::constants::{CONFIG_FILE_NAME, GLOBAL_CONFIG_DIR_NAME};
use crate::lll_error::LllError;
use log::debug;
use std::path::PathBuf;

/// Load the per-user config. A missing file yields defaults.
pub(crate) fn load_global() -> Result<LllConfig, Box<LllError>> {
    let path = find_global_config_path();
    debug!("Global config - resolved path: {}", path.display());
    LllConfig::read(&path)
}

/// Platform-appropriate path to the per-user config file
/// Linux/macOS: $XDG_CONFIG_HOME/lll/config.toml or ~/.config/lll/config.toml
/// Windows: %APPDATA%/lll/config.toml
pub(crate) fn find_global_config_path() -> PathBuf {
    #[cfg(windows)]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata)
                .join(GLOBAL_CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME);
        }
    }

    resolve_global_config_path(
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        home::home_dir(),
    )
}

fn resolve_global_config_path(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> PathBuf {
    let base = match xdg_config_home {
        Some(xdg) if !xdg.as_os_str().is_empty() => xdg,
        _ => home
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config"),
    };
    base.join(GLOBAL_CONFIG_DIR_NAME).join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xdg_wins_over_home() {
        let path = resolve_global_config_path(
            Some(PathBuf::from("/xdg")),
            Some(PathBuf::from("/home/alice")),
        );
        assert_eq!(path, PathBuf::from("/xdg/lll/config.toml"));
    }

    #[test]
    fn test_home_fallback() {
        let path = resolve_global_config_path(None, Some(PathBuf::from("/home/alice")));
        assert_eq!(path, PathBuf::from("/home/alice/.config/lll/config.toml"));

        let path = resolve_global_config_path(Some(PathBuf::new()), None);
        assert_eq!(path, PathBuf::from("./.config/lll/config.toml"));
    }
}
