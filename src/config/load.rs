use crate::config::types::{CapturePatternTable, Config, ToolPaths};
use crate::error::Result;
use anyhow::Context;

/// 編譯時嵌入的檔名樣式表（不需要外部檔案）
const CAPTURE_PATTERN_TABLE_JSON: &str = include_str!("../data/capture_pattern_table.json");

impl Config {
    /// 載入樣式表並依目前作業系統解析 ffprobe 路徑
    pub fn new() -> Result<Self> {
        Ok(Self {
            pattern_table: CapturePatternTable::embedded(),
            tool_paths: ToolPaths::resolve()?,
        })
    }

    #[must_use]
    pub const fn with_tool_paths(pattern_table: CapturePatternTable, tool_paths: ToolPaths) -> Self {
        Self {
            pattern_table,
            tool_paths,
        }
    }
}

impl CapturePatternTable {
    /// 從編譯時嵌入的 JSON 載入樣式表
    pub fn load_embedded() -> anyhow::Result<Self> {
        serde_json::from_str(CAPTURE_PATTERN_TABLE_JSON).context("無法解析嵌入的檔名樣式設定")
    }

    /// 嵌入的 JSON 隨程式一起編譯，內容固定
    #[must_use]
    pub fn embedded() -> Self {
        Self::load_embedded().expect("Invalid embedded capture pattern table")
    }
}
