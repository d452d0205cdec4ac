//! 重試群組解析器
//!
//! 相機經 FTP 傳輸中斷後重傳時，原檔名會留下不完整的檔案，
//! 完整的檔案則以 `_N` 後綴另存。此模組依去除後綴的名稱分組，
//! 每組只保留一個檔案，其餘移到隔離資料夾

use crate::tools::{CandidateFile, ensure_directory_exists, move_file};
use log::{debug, info, warn};
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// 隔離資料夾名稱（位於來源資料夾下）
pub const QUARANTINE_FOLDER: &str = "likely-corrupted";

/// 最後一個 `_` 之後的任何片段都視為重試後綴，不限於數字；
/// 因此 `DSC_0001.JPG` 與 `DSC_0002.JPG` 會歸為同一組
static REGEX_RETRY_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?P<base>.+)_[^_]*$").expect("Invalid regex"));

/// 去除重試後綴後的名稱
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalName {
    /// 去除 `_N` 後的完整檔名（含副檔名）
    pub name: String,
    pub has_suffix: bool,
}

impl CanonicalName {
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Self {
        let (stem, extension) = split_extension(file_name);

        match REGEX_RETRY_SUFFIX.captures(stem) {
            Some(caps) => Self {
                name: format!("{}{extension}", &caps["base"]),
                has_suffix: true,
            },
            None => Self {
                name: file_name.to_string(),
                has_suffix: false,
            },
        }
    }

    /// 分組用的鍵值（不分大小寫）
    #[must_use]
    pub fn group_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// 分離副檔名，回傳 (檔名主體, 含前導點的副檔名)
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

/// 同一次拍攝的多次傳輸結果
#[derive(Debug, Clone)]
pub struct RetryGroup {
    pub canonical_name: String,
    pub members: Vec<(CandidateFile, bool)>,
}

impl RetryGroup {
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// 決定保留與隔離的檔案，回傳 (保留, 隔離)
    ///
    /// 只有一個檔案時無論是否有後綴都保留；
    /// 多個檔案時保留完整檔名依序數遞減排序後最大的有後綴檔案
    #[must_use]
    pub fn resolve(self) -> (Vec<CandidateFile>, Vec<CandidateFile>) {
        if self.len() < 2 {
            return (self.members.into_iter().map(|(f, _)| f).collect(), Vec::new());
        }

        if !self.members.iter().any(|(_, has_suffix)| *has_suffix) {
            warn!(
                "{} 有 {} 個同名檔案但都沒有重試後綴，全部保留",
                self.canonical_name,
                self.members.len()
            );
            return (self.members.into_iter().map(|(f, _)| f).collect(), Vec::new());
        }

        let (mut suffixed, mut discarded): (Vec<_>, Vec<_>) =
            self.members.into_iter().partition(|(_, has_suffix)| *has_suffix);

        suffixed.sort_by(|a, b| b.0.file_name.cmp(&a.0.file_name));
        let mut suffixed = suffixed.into_iter();
        let survivor = suffixed.next().map(|(f, _)| f);
        discarded.extend(suffixed);

        (
            survivor.into_iter().collect(),
            discarded.into_iter().map(|(f, _)| f).collect(),
        )
    }
}

/// 解析結果
#[derive(Debug, Default)]
pub struct RetryResolution {
    /// 每個群組的保留檔案
    pub survivors: Vec<CandidateFile>,
    /// 已移到隔離資料夾的檔案（移動後的路徑）
    pub quarantined: Vec<PathBuf>,
    /// 應隔離但移動失敗、仍留在原處的檔案
    pub quarantine_failures: Vec<PathBuf>,
}

/// 重試群組解析器
pub struct RetryGroupResolver {
    quarantine_folder_name: String,
}

impl Default for RetryGroupResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryGroupResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            quarantine_folder_name: QUARANTINE_FOLDER.to_string(),
        }
    }

    /// 設定隔離資料夾名稱
    #[must_use]
    pub fn with_quarantine_folder_name(mut self, name: impl Into<String>) -> Self {
        self.quarantine_folder_name = name.into();
        self
    }

    /// 依去除後綴的名稱分組（不分大小寫）
    #[must_use]
    pub fn group(files: Vec<CandidateFile>) -> Vec<RetryGroup> {
        let mut groups: HashMap<String, RetryGroup> = HashMap::new();

        for file in files {
            let canonical = CanonicalName::from_file_name(&file.file_name);
            groups
                .entry(canonical.group_key())
                .or_insert_with(|| RetryGroup {
                    canonical_name: canonical.name.clone(),
                    members: Vec::new(),
                })
                .members
                .push((file, canonical.has_suffix));
        }

        groups.into_values().collect()
    }

    /// 只計算保留與隔離的檔案，不移動
    #[must_use]
    pub fn plan(files: Vec<CandidateFile>) -> (Vec<CandidateFile>, Vec<CandidateFile>) {
        let mut survivors = Vec::new();
        let mut discarded = Vec::new();

        for group in Self::group(files) {
            let (keep, drop) = group.resolve();
            survivors.extend(keep);
            discarded.extend(drop);
        }

        (survivors, discarded)
    }

    /// 分組、隔離可能損壞的檔案，回傳剩下的檔案
    ///
    /// 隔離失敗不會中止流程，該檔案留在原處
    pub fn resolve(&self, files: Vec<CandidateFile>, source_root: &Path) -> RetryResolution {
        let (survivors, discarded) = Self::plan(files);
        let mut resolution = RetryResolution {
            survivors,
            ..RetryResolution::default()
        };

        if discarded.is_empty() {
            return resolution;
        }

        let quarantine_dir = source_root.join(&self.quarantine_folder_name);
        if let Err(e) = ensure_directory_exists(&quarantine_dir) {
            warn!("無法建立隔離資料夾，可能損壞的檔案將留在原處: {e}");
            resolution
                .quarantine_failures
                .extend(discarded.into_iter().map(|f| f.path));
            return resolution;
        }

        for file in discarded {
            let target_path = quarantine_dir.join(&file.file_name);

            if target_path.exists() {
                warn!(
                    "隔離資料夾已有同名檔案，保留原檔: {}",
                    target_path.display()
                );
                resolution.quarantine_failures.push(file.path);
                continue;
            }

            match move_file(&file.path, &target_path) {
                Ok(()) => {
                    info!(
                        "可能損壞，已隔離: {} -> {}",
                        file.path.display(),
                        target_path.display()
                    );
                    resolution.quarantined.push(target_path);
                }
                Err(e) => {
                    warn!("隔離檔案失敗 {}: {e}", file.path.display());
                    resolution.quarantine_failures.push(file.path);
                }
            }
        }

        debug!(
            "重試群組解析完成 - 保留: {}, 隔離: {}, 隔離失敗: {}",
            resolution.survivors.len(),
            resolution.quarantined.len(),
            resolution.quarantine_failures.len()
        );

        resolution
    }
}
