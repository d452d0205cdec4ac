use crate::error::{OrganizeError, Result};
use std::path::Path;

/// 來源資料夾必須存在且為資料夾
pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(OrganizeError::DirectoryNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// 若資料夾不存在則建立（可重複呼叫）
pub fn ensure_directory_exists(path: &Path) -> Result<()> {
    if !path.is_dir() {
        std::fs::create_dir_all(path).map_err(|source| OrganizeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing");
        assert!(matches!(
            validate_directory_exists(&missing),
            Err(OrganizeError::DirectoryNotFound(p)) if p == missing
        ));
    }

    #[test]
    fn test_validate_file_is_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("C0001.MP4");
        std::fs::write(&file, "video").unwrap();
        assert!(validate_directory_exists(&file).is_err());
    }

    #[test]
    fn test_ensure_directory_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("sorted").join("2024-03");
        ensure_directory_exists(&nested).unwrap();
        ensure_directory_exists(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
