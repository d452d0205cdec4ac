//! 錯誤類型
//!
//! 只有會中止整批作業的狀況才以錯誤回傳，單一檔案的失敗一律記錄後略過

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrganizeError {
    /// 來源資料夾不存在
    #[error("路徑不存在: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// 不支援的作業系統
    #[error("不支援的作業系統: {0}")]
    UnsupportedPlatform(&'static str),

    /// ffprobe 無法執行或路徑設定錯誤
    #[error("無法執行 ffprobe ({}): {source}", path.display())]
    MetadataToolUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O 錯誤 ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, OrganizeError>;
