use std::path::PathBuf;

use viewer_core::{ViewMode, ViewerConfig};

pub const STORE_DIR_ENV: &str = "VIEWER_STORE_DIR";
pub const VIEW_MODE_ENV: &str = "VIEWER_VIEW_MODE";
pub const DEFAULT_STORE_DIR: &str = "viewer-data";

/// Read an env var and parse it, falling back to `default` when unset or invalid.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub struct NativeConfig {
    pub viewer: ViewerConfig,
    pub store_dir: PathBuf,
}

impl NativeConfig {
    pub fn from_env() -> Self {
        let view_mode: ViewMode = env_parse(VIEW_MODE_ENV, ViewMode::default());
        let store_dir: PathBuf = env_parse(STORE_DIR_ENV, PathBuf::from(DEFAULT_STORE_DIR));
        Self {
            viewer: ViewerConfig::default().with_view_mode(view_mode),
            store_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_parse_missing_returns_default() {
        let val: usize = env_parse("__VIEWER_TEST_MISSING__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn env_parse_reads_view_mode() {
        std::env::set_var("__VIEWER_TEST_MODE__", " 2d ");
        let mode: ViewMode = env_parse("__VIEWER_TEST_MODE__", ViewMode::ThreeD);
        assert_eq!(mode, ViewMode::TwoD);
        std::env::remove_var("__VIEWER_TEST_MODE__");
    }

    #[test]
    fn env_parse_invalid_falls_back() {
        std::env::set_var("__VIEWER_TEST_BAD_MODE__", "4d");
        let mode: ViewMode = env_parse("__VIEWER_TEST_BAD_MODE__", ViewMode::ThreeD);
        assert_eq!(mode, ViewMode::ThreeD);
        std::env::remove_var("__VIEWER_TEST_BAD_MODE__");
    }
}
