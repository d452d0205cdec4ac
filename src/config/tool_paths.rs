//! 外部工具路徑解析
//!
//! ffprobe 隨程式發佈於執行檔旁的 `Resources/<platform>/` 目錄

use crate::config::types::ToolPaths;
use crate::error::{OrganizeError, Result};
use std::path::{Path, PathBuf};

pub const RESOURCES_DIR: &str = "Resources";

const FFPROBE_BINARY: &str = "ffprobe";

/// 目前作業系統對應的資源子目錄
pub fn platform_dir() -> Result<&'static str> {
    match std::env::consts::OS {
        "macos" => Ok("macos"),
        "linux" => Ok("linux"),
        other => Err(OrganizeError::UnsupportedPlatform(other)),
    }
}

impl ToolPaths {
    #[must_use]
    pub fn new(ffprobe: impl Into<PathBuf>) -> Self {
        Self {
            ffprobe: ffprobe.into(),
        }
    }

    /// 依執行檔位置解析工具路徑
    pub fn resolve() -> Result<Self> {
        let platform = platform_dir()?;
        let exe = std::env::current_exe().map_err(|source| {
            OrganizeError::MetadataToolUnavailable {
                path: PathBuf::from(FFPROBE_BINARY),
                source,
            }
        })?;
        let exe_dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::under(exe_dir, platform))
    }

    #[must_use]
    pub fn under(base_dir: &Path, platform: &str) -> Self {
        Self::new(
            base_dir
                .join(RESOURCES_DIR)
                .join(platform)
                .join(FFPROBE_BINARY),
        )
    }
}
