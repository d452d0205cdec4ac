use anyhow::{Context, Result};
use chrono::{Duration, NaiveDateTime};
use exif::{In, Tag, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// EXIF 中讀到的原始拍攝時間
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExifCaptureTime {
    pub date_time_original: NaiveDateTime,
    /// `SubSecTimeOriginal` 的原始字串
    pub sub_sec_original: Option<String>,
}

/// 讀取 EXIF 拍攝時間；沒有 `DateTimeOriginal` 時回傳 `Ok(None)`
pub fn read_capture_time(path: &Path) -> Result<Option<ExifCaptureTime>> {
    let file = File::open(path).with_context(|| format!("無法開啟檔案: {}", path.display()))?;
    let mut reader = BufReader::new(file);
    let exif = exif::Reader::new()
        .read_from_container(&mut reader)
        .with_context(|| format!("無法讀取 EXIF: {}", path.display()))?;

    let Some(field) = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY) else {
        return Ok(None);
    };

    // display_value 會輸出 "2024-03-15 10:30:00"
    let value = field.display_value().to_string();
    let date_time_original = NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S")
        .with_context(|| format!("無法解析 DateTimeOriginal: {value}"))?;

    let sub_sec_original = exif
        .get_field(Tag::SubSecTimeOriginal, In::PRIMARY)
        .and_then(|f| ascii_value(&f.value));

    Ok(Some(ExifCaptureTime {
        date_time_original,
        sub_sec_original,
    }))
}

fn ascii_value(value: &Value) -> Option<String> {
    match value {
        Value::Ascii(parts) => parts
            .first()
            .map(|bytes| String::from_utf8_lossy(bytes).trim_matches(['\0', ' ']).to_string()),
        _ => None,
    }
}

const MILLIS_PER_SECOND: f64 = 1000.0;

/// 將 `SubSecTimeOriginal` 視為毫秒數（可含小數），必須小於一秒
pub fn parse_sub_seconds(value: &str) -> Result<Duration> {
    let millis: f64 = value
        .trim()
        .parse()
        .with_context(|| format!("無法解析 SubSecTimeOriginal: {value}"))?;
    if !millis.is_finite() || !(0.0..MILLIS_PER_SECOND).contains(&millis) {
        anyhow::bail!("無效的 SubSecTimeOriginal: {value}");
    }
    Ok(Duration::microseconds((millis * 1000.0).round() as i64))
}
