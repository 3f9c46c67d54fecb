use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gstatus_core::Config;
use gstatus_git::Repository;

/// clap value parser: the repository root must be an existing directory.
pub fn parse_repo_dir(value: &str) -> std::result::Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else {
        Err(format!("'{value}' is not a directory"))
    }
}

/// Load config from `path` (if given) and apply the page-size override.
pub fn load_config(path: Option<&Path>, page_size: Option<NonZeroUsize>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(size) = page_size {
        config.general.page_size = size.get();
    }

    Ok(config)
}

/// Open the repository using the configured git executable.
pub fn open_repo(root: &Path, config: &Config) -> Result<Repository> {
    let repo = Repository::open(root)
        .with_context(|| format!("Cannot open repository at {}", root.display()))?;
    Ok(repo.with_program(config.general.git_program.clone()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_repo_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().to_str().unwrap();
        assert_eq!(parse_repo_dir(dir).unwrap(), temp.path());

        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let err = parse_repo_dir(file.to_str().unwrap()).unwrap_err();
        assert!(err.contains("is not a directory"));
    }

    #[test]
    fn test_load_config_override() {
        let config = load_config(None, NonZeroUsize::new(3)).unwrap();
        assert_eq!(config.general.page_size, 3);

        let config = load_config(None, None).unwrap();
        assert_eq!(config.general.page_size, 10);
    }

    #[test]
    fn test_load_config_file_then_override() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("gstatus.toml");
        fs::write(&path, "[general]\npage_size = 20\n").unwrap();

        assert_eq!(load_config(Some(&path), None).unwrap().general.page_size, 20);
        assert_eq!(
            load_config(Some(&path), NonZeroUsize::new(5))
                .unwrap()
                .general
                .page_size,
            5
        );
    }
}
