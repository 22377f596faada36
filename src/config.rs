// File: src/config.rs
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable overriding the dataset directory.
pub const DATASET_DIR_ENV: &str = "JPNAME_DATASET_DIR";
const LOCAL_DATASET_DIR: &str = "dataset";
const APP_DIR: &str = "japanese-personal-names";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub dataset_dir: PathBuf,
}

impl Config {
    /// Explicit directory, then `$JPNAME_DATASET_DIR`, then `./dataset` if it
    /// exists, then the per-user data directory.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let from_env = env::var_os(DATASET_DIR_ENV).map(PathBuf::from);
        Self::resolve_with(explicit, from_env)
    }

    fn resolve_with(explicit: Option<&Path>, from_env: Option<PathBuf>) -> Self {
        let dataset_dir = explicit
            .map(Path::to_path_buf)
            .or(from_env.filter(|p| !p.as_os_str().is_empty()))
            .or_else(|| {
                let local = PathBuf::from(LOCAL_DATASET_DIR);
                local.is_dir().then_some(local)
            })
            .unwrap_or_else(default_data_dir);
        Self { dataset_dir }
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path.push(LOCAL_DATASET_DIR);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_dir_wins() {
        let config = Config::resolve_with(Some(Path::new("/data/names")), Some("/env".into()));
        assert_eq!(config.dataset_dir, PathBuf::from("/data/names"));
    }

    #[test]
    fn env_dir_used_without_explicit() {
        let config = Config::resolve_with(None, Some("/env/names".into()));
        assert_eq!(config.dataset_dir, PathBuf::from("/env/names"));
    }

    #[test]
    fn empty_env_value_is_ignored() {
        let config = Config::resolve_with(None, Some(PathBuf::new()));
        assert_ne!(config.dataset_dir, PathBuf::new());
    }
}
