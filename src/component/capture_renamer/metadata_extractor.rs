//! 拍攝時間擷取
//!
//! 影片透過 ffprobe 讀取容器標籤，照片透過 EXIF。
//! 除了 ffprobe 無法執行以外，所有讀取或解析錯誤都視為「沒有拍攝時間」

use crate::config::{CaptureKind, ToolPaths};
use crate::error::{OrganizeError, Result};
use crate::tools::{
    CREATION_TIME_TAG, ProbeError, get_format_tags, parse_creation_time, parse_sub_seconds,
    read_capture_time,
};
use chrono::{DateTime, FixedOffset, NaiveDateTime};
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// 拍攝時間（牆上時鐘時間，時區已在擷取時決定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CaptureTimestamp(NaiveDateTime);

impl CaptureTimestamp {
    /// 相機記錄的當地時間
    #[must_use]
    pub const fn from_camera_local(local: NaiveDateTime) -> Self {
        Self(local)
    }

    /// 已換算到固定時區的時間
    #[must_use]
    pub fn from_fixed_offset(time: DateTime<FixedOffset>) -> Self {
        Self(time.naive_local())
    }

    #[must_use]
    pub const fn local(&self) -> NaiveDateTime {
        self.0
    }
}

pub trait MetadataExtractor {
    /// 讀取拍攝時間；找不到時回傳 `Ok(None)`
    ///
    /// 只有外部工具無法執行時回傳錯誤，呼叫端應中止整批作業
    fn capture_time(&self, path: &Path) -> Result<Option<CaptureTimestamp>>;
}

/// 依檔案種類選擇擷取方式
#[must_use]
pub fn extractor_for(kind: CaptureKind, tool_paths: &ToolPaths) -> Box<dyn MetadataExtractor> {
    match kind {
        CaptureKind::Video => Box::new(FfprobeExtractor::new(tool_paths.ffprobe.clone())),
        CaptureKind::Photo => Box::new(ExifExtractor),
    }
}

/// 以 ffprobe 讀取 `creation_time`，固定以 UTC-7 表示
pub struct FfprobeExtractor {
    ffprobe: PathBuf,
}

impl FfprobeExtractor {
    #[must_use]
    pub const fn new(ffprobe: PathBuf) -> Self {
        Self { ffprobe }
    }
}

impl MetadataExtractor for FfprobeExtractor {
    fn capture_time(&self, path: &Path) -> Result<Option<CaptureTimestamp>> {
        let tags = match get_format_tags(&self.ffprobe, path) {
            Ok(tags) => tags,
            Err(ProbeError::Spawn(source)) => {
                return Err(OrganizeError::MetadataToolUnavailable {
                    path: self.ffprobe.clone(),
                    source,
                });
            }
            Err(ProbeError::Probe(e)) => {
                warn!("無法讀取影片資訊 {}: {e:#}", path.display());
                return Ok(None);
            }
        };

        let Some(value) = tags.get(CREATION_TIME_TAG) else {
            debug!("{} 沒有 {CREATION_TIME_TAG} 標籤", path.display());
            return Ok(None);
        };

        match parse_creation_time(value) {
            Ok(time) => Ok(Some(CaptureTimestamp::from_fixed_offset(time))),
            Err(e) => {
                warn!("{}: {e:#}", path.display());
                Ok(None)
            }
        }
    }
}

/// 以 EXIF `DateTimeOriginal` + `SubSecTimeOriginal` 取得拍攝時間
pub struct ExifExtractor;

impl MetadataExtractor for ExifExtractor {
    fn capture_time(&self, path: &Path) -> Result<Option<CaptureTimestamp>> {
        let exif_time = match read_capture_time(path) {
            Ok(Some(time)) => time,
            Ok(None) => {
                debug!("{} 沒有 DateTimeOriginal", path.display());
                return Ok(None);
            }
            Err(e) => {
                warn!("{e:#}");
                return Ok(None);
            }
        };

        let base = exif_time.date_time_original;
        let local = match exif_time.sub_sec_original.as_deref() {
            Some(sub_sec) => with_sub_seconds(base, sub_sec, path),
            None => base,
        };

        Ok(Some(CaptureTimestamp::from_camera_local(local)))
    }
}

/// 加上毫秒數；無法解析或超出範圍時以 0 毫秒計算
fn with_sub_seconds(base: NaiveDateTime, sub_sec: &str, path: &Path) -> NaiveDateTime {
    let offset = match parse_sub_seconds(sub_sec) {
        Ok(offset) => offset,
        Err(e) => {
            warn!("{}: {e:#}，以 0 毫秒計算", path.display());
            return base;
        }
    };

    base.checked_add_signed(offset).unwrap_or_else(|| {
        warn!("{}: 拍攝時間超出範圍，以 0 毫秒計算", path.display());
        base
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_from_fixed_offset_keeps_wall_clock() {
        let time = DateTime::parse_from_rfc3339("2024-03-15T10:30:00-07:00").unwrap();
        let timestamp = CaptureTimestamp::from_fixed_offset(time);
        assert_eq!(
            timestamp.local(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap()
        );
    }

    fn base_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_with_sub_seconds_adds_milliseconds() {
        let local = with_sub_seconds(base_time(), "500", Path::new("DSC0001.HIF"));
        assert_eq!(local, base_time() + chrono::Duration::milliseconds(500));
    }

    #[test]
    fn test_with_sub_seconds_falls_back_to_zero() {
        let path = Path::new("DSC0001.HIF");
        assert_eq!(with_sub_seconds(base_time(), "abc", path), base_time());
        assert_eq!(with_sub_seconds(base_time(), "1e300", path), base_time());
        assert_eq!(
            with_sub_seconds(base_time(), "99999999999999999999", path),
            base_time()
        );
    }

    #[test]
    fn test_with_sub_seconds_does_not_overflow() {
        let local = with_sub_seconds(NaiveDateTime::MAX, "999", Path::new("DSC0001.HIF"));
        assert_eq!(local, NaiveDateTime::MAX);
    }

    #[test]
    fn test_missing_ffprobe_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let video = temp_dir.path().join("C0001.MP4");
        fs::write(&video, "video").unwrap();

        let extractor = FfprobeExtractor::new(temp_dir.path().join("Resources/linux/ffprobe"));
        let result = extractor.capture_time(&video);
        assert!(matches!(
            result,
            Err(OrganizeError::MetadataToolUnavailable { .. })
        ));
    }

    #[test]
    fn test_unreadable_photo_has_no_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let photo = temp_dir.path().join("DSC0001.HIF");
        fs::write(&photo, "not a heif container").unwrap();

        assert_eq!(ExifExtractor.capture_time(&photo).unwrap(), None);
    }

    #[test]
    fn test_missing_photo_has_no_timestamp() {
        let temp_dir = TempDir::new().unwrap();
        let photo = temp_dir.path().join("DSC0404.HIF");
        assert_eq!(ExifExtractor.capture_time(&photo).unwrap(), None);
    }
}
