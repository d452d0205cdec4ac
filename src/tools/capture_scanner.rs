use crate::config::CapturePattern;
use log::{debug, error, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 待處理的相機檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// 原始檔名（含副檔名）
    pub file_name: String,
}

impl CandidateFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy().into_owned();
        Some(Self { path, file_name })
    }

    /// 含前導點的副檔名，保留原始大小寫；沒有副檔名時為空字串
    #[must_use]
    pub fn extension(&self) -> String {
        self.path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }
}

/// 列出資料夾（不含子資料夾）中符合樣式的檔案
///
/// 列舉過程中任何錯誤都會記錄並回傳空集合
#[must_use]
pub fn scan_capture_files(directory: &Path, pattern: &CapturePattern) -> Vec<CandidateFile> {
    let regex = pattern.to_regex();
    let mut files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(1)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("無法列舉資料夾 {}: {e}", directory.display());
                return Vec::new();
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            warn!("檔名不是有效的 UTF-8，略過: {}", entry.path().display());
            continue;
        };
        if !regex.is_match(name) {
            continue;
        }

        if let Some(file) = CandidateFile::new(entry.into_path()) {
            files.push(file);
        }
    }

    debug!(
        "{} 中找到 {} 個符合 {pattern} 的檔案",
        directory.display(),
        files.len()
    );
    files
}
