use std::env;
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Environment variable naming the directory to autosave.
pub const NOTES_DIR_VAR: &str = "NOTES";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub notes_dir: PathBuf,
    pub dry_run: bool,
}

impl AppConfig {
    pub fn load(dry_run: bool) -> AppResult<Self> {
        Self::from_env_value(env::var(NOTES_DIR_VAR).ok(), dry_run)
    }

    fn from_env_value(value: Option<String>, dry_run: bool) -> AppResult<Self> {
        let notes_dir = value
            .filter(|path| !path.is_empty())
            .ok_or_else(|| AppError::Configuration(format!("${NOTES_DIR_VAR} is not set")))?;

        Ok(Self {
            notes_dir: PathBuf::from(notes_dir),
            dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_directory_from_env_value() {
        let config = AppConfig::from_env_value(Some("/home/me/notes".to_string()), false).unwrap();
        assert_eq!(config.notes_dir, PathBuf::from("/home/me/notes"));
        assert!(!config.dry_run);
    }

    #[test]
    fn carries_dry_run_flag() {
        let config = AppConfig::from_env_value(Some("/home/me/notes".to_string()), true).unwrap();
        assert!(config.dry_run);
    }

    #[test]
    fn rejects_missing_directory() {
        let error = AppConfig::from_env_value(None, false).unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }

    #[test]
    fn rejects_empty_directory() {
        let error = AppConfig::from_env_value(Some(String::new()), false).unwrap_err();
        assert!(matches!(error, AppError::Configuration(_)));
    }
}
