use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// 檔名樣式：前綴 + 選用的副檔名，皆不分大小寫
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CapturePattern {
    pub prefix: String,
    pub extension: Option<String>,
}

impl CapturePattern {
    /// 轉換為不分大小寫的正規表示式，例如 `C*.MP4` → `(?i)^C.*\.MP4$`
    #[must_use]
    pub fn to_regex(&self) -> Regex {
        let prefix = regex::escape(&self.prefix);
        let pattern = match &self.extension {
            Some(ext) => format!(r"(?i)^{prefix}.*\.{}$", regex::escape(ext)),
            None => format!("(?i)^{prefix}"),
        };
        Regex::new(&pattern).expect("Invalid regex")
    }
}

impl fmt::Display for CapturePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.extension {
            Some(ext) => write!(f, "{}*.{}", self.prefix, ext),
            None => write!(f, "{}*", self.prefix),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CapturePatternTable {
    #[serde(rename = "VIDEO_FILE")]
    pub video_file: CapturePattern,
    #[serde(rename = "PHOTO_FILE")]
    pub photo_file: CapturePattern,
}

impl CapturePatternTable {
    #[must_use]
    pub const fn pattern_for(&self, kind: CaptureKind) -> &CapturePattern {
        match kind {
            CaptureKind::Video => &self.video_file,
            CaptureKind::Photo => &self.photo_file,
        }
    }
}

/// 相機輸出的檔案種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaptureKind {
    Video,
    Photo,
}

impl CaptureKind {
    /// 目標檔名的時間格式（不含副檔名）
    #[must_use]
    pub const fn filename_format(self) -> &'static str {
        match self {
            Self::Video => "%Y-%m-%d %H.%M.%S",
            Self::Photo => "%Y-%m-%d %H.%M.%S%.3f",
        }
    }

    /// 是否需要處理傳輸重試產生的 `_N` 檔案
    #[must_use]
    pub const fn resolves_retries(self) -> bool {
        matches!(self, Self::Photo)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Video => "影片",
            Self::Photo => "照片",
        }
    }
}

impl fmt::Display for CaptureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// 外部工具路徑，啟動時解析一次
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub ffprobe: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub pattern_table: CapturePatternTable,
    pub tool_paths: ToolPaths,
}

/// 單次執行的參數
#[derive(Debug, Clone)]
pub struct RenameJob {
    pub kind: CaptureKind,
    pub unsorted_dir: PathBuf,
    pub sorted_dir: PathBuf,
}
