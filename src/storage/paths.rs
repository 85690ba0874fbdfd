use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::{DukeError, Result};

pub const ENV_DATA_DIR: &str = "DUKE_DATA_DIR";
const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "duke";
const APPLICATION: &str = "duke";

/// Resolve and create the base directory for all persisted data.
///
/// An explicit override (the `--data-dir` flag) wins over everything else.
pub fn data_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    let path = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => determine_data_dir()?,
    };
    fs::create_dir_all(&path)?;
    Ok(path)
}

/// Path to the task list JSON file.
pub fn tasks_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join("tasks.json")
}

/// Path to the mutation history log file.
pub fn history_log_path(data_dir: &Path) -> PathBuf {
    data_dir.join("history.jsonl")
}

fn determine_data_dir() -> Result<PathBuf> {
    // Priority 1: Explicit environment variable override
    if let Some(env_dir) = env::var_os(ENV_DATA_DIR) {
        return Ok(PathBuf::from(env_dir));
    }

    // Priority 2: OS-standard application data directory
    if let Some(project_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        return Ok(project_dirs.data_local_dir().to_path_buf());
    }

    Err(DukeError::DataDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("duke-data");
        let resolved = data_dir(Some(&target)).unwrap();
        assert_eq!(resolved, target);
        assert!(target.is_dir());
        assert_eq!(tasks_file_path(&resolved), target.join("tasks.json"));
        assert_eq!(history_log_path(&resolved), target.join("history.jsonl"));
    }
}
