use anyhow::{Context, Result, bail};
use chrono::{DateTime, FixedOffset};
use serde::Deserialize;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::process::Command;

/// 容器層級的拍攝時間標籤
pub const CREATION_TIME_TAG: &str = "creation_time";

/// ffprobe 執行結果
#[derive(Debug)]
pub enum ProbeError {
    /// ffprobe 本身無法啟動（不存在、無執行權限等）
    Spawn(io::Error),
    /// ffprobe 執行成功但輸出無法使用
    Probe(anyhow::Error),
}

#[derive(Deserialize)]
struct FfprobeOutput {
    format: Option<FormatInfo>,
}

#[derive(Deserialize)]
struct FormatInfo {
    #[serde(default)]
    tags: HashMap<String, String>,
}

/// 使用 ffprobe 取得容器層級的標籤
pub fn get_format_tags(ffprobe: &Path, path: &Path) -> Result<HashMap<String, String>, ProbeError> {
    let output = Command::new(ffprobe)
        .args(["-v", "quiet", "-print_format", "json", "-show_format"])
        .arg(path)
        .output()
        .map_err(ProbeError::Spawn)?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ProbeError::Probe(anyhow::anyhow!(
            "ffprobe 執行失敗 ({}): {stderr}",
            path.display()
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    parse_format_tags(&stdout).map_err(ProbeError::Probe)
}

/// 解析 ffprobe 的 JSON 輸出，只取 format.tags
pub fn parse_format_tags(json: &str) -> Result<HashMap<String, String>> {
    let probe: FfprobeOutput =
        serde_json::from_str(json).with_context(|| "無法解析 ffprobe 輸出")?;
    Ok(probe.format.map(|f| f.tags).unwrap_or_default())
}

/// 解析 `creation_time`，並固定轉換為 UTC-7
pub fn parse_creation_time(value: &str) -> Result<DateTime<FixedOffset>> {
    let parsed = DateTime::parse_from_rfc3339(value.trim())
        .with_context(|| format!("無法解析拍攝時間: {value}"))?;
    let Some(offset) = FixedOffset::west_opt(7 * 3600) else {
        bail!("無效的時區偏移");
    };
    Ok(parsed.with_timezone(&offset))
}
