use super::destination_planner::DestinationPlan;
use crate::tools::{ensure_directory_exists, move_file};
use log::{error, info, warn};
use std::path::{Path, PathBuf};

/// 單一檔案的搬移結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelocationOutcome {
    Moved(PathBuf),
    /// 目標已存在，不覆寫
    Collision(PathBuf),
    /// 搬移失敗，檔案留在原處
    Failed,
}

/// 建立年月資料夾並搬移檔案，任何失敗都不影響其他檔案
#[must_use]
pub fn relocate(source: &Path, plan: &DestinationPlan) -> RelocationOutcome {
    if let Err(e) = ensure_directory_exists(&plan.directory) {
        error!("無法建立資料夾，略過 {}: {e}", source.display());
        return RelocationOutcome::Failed;
    }

    let target_path = plan.path();
    if target_path.exists() {
        warn!(
            "目標已存在，略過 {}: {}",
            source.display(),
            target_path.display()
        );
        return RelocationOutcome::Collision(target_path);
    }

    match move_file(source, &target_path) {
        Ok(()) => {
            info!("{} -> {}", source.display(), target_path.display());
            RelocationOutcome::Moved(target_path)
        }
        Err(e) => {
            error!(
                "移動檔案失敗 {} -> {}: {e}",
                source.display(),
                target_path.display()
            );
            RelocationOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn plan(root: &Path, name: &str) -> DestinationPlan {
        DestinationPlan {
            directory: root.join("2024-03"),
            file_name: name.to_string(),
        }
    }

    #[test]
    fn test_relocate_creates_month_directory() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("C0001.MP4");
        fs::write(&source, "video").unwrap();
        let sorted = temp_dir.path().join("sorted");

        let outcome = relocate(&source, &plan(&sorted, "2024-03-15 10.30.00.MP4"));

        let expected = sorted.join("2024-03").join("2024-03-15 10.30.00.MP4");
        assert_eq!(outcome, RelocationOutcome::Moved(expected.clone()));
        assert!(!source.exists());
        assert_eq!(fs::read_to_string(expected).unwrap(), "video");
    }

    #[test]
    fn test_relocate_never_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let sorted = temp_dir.path().join("sorted");
        fs::create_dir_all(sorted.join("2024-03")).unwrap();
        let existing = sorted.join("2024-03").join("2024-03-15 10.30.00.MP4");
        fs::write(&existing, "first").unwrap();

        let source = temp_dir.path().join("C0002.MP4");
        fs::write(&source, "second").unwrap();

        let outcome = relocate(&source, &plan(&sorted, "2024-03-15 10.30.00.MP4"));

        assert_eq!(outcome, RelocationOutcome::Collision(existing.clone()));
        assert!(source.exists());
        assert_eq!(fs::read_to_string(existing).unwrap(), "first");
    }

    #[test]
    fn test_relocate_missing_source_fails() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("C0003.MP4");
        let sorted = temp_dir.path().join("sorted");

        let outcome = relocate(&source, &plan(&sorted, "2024-03-15 10.30.00.MP4"));
        assert_eq!(outcome, RelocationOutcome::Failed);
    }

    #[test]
    fn test_relocate_directory_blocked_by_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = temp_dir.path().join("C0004.MP4");
        fs::write(&source, "video").unwrap();
        let sorted = temp_dir.path().join("sorted");
        fs::create_dir_all(&sorted).unwrap();
        fs::write(sorted.join("2024-03"), "not a directory").unwrap();

        let outcome = relocate(&source, &plan(&sorted, "2024-03-15 10.30.00.MP4"));
        assert_eq!(outcome, RelocationOutcome::Failed);
        assert!(source.exists());
    }
}
